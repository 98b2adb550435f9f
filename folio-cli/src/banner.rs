use folio_client::{Phase, TypingTitle};
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};

pub async fn handle(cycles: Option<usize>) -> Result<()> {
    let mut title = TypingTitle::default();
    let mut stdout = io::stdout();
    let mut completed = 0;

    loop {
        // carriage return plus "erase line" keeps the title on a single row
        write!(stdout, "\r\x1b[2K{}|", title.text()).into_diagnostic()?;
        stdout.flush().into_diagnostic()?;

        tokio::select! {
            () = tokio::time::sleep(title.delay()) => {}
            _ = tokio::signal::ctrl_c() => break,
        }

        let was_erased = title.phase() == Phase::Erasing(0);
        title.tick();

        if was_erased {
            completed += 1;
            if cycles.is_some_and(|cycles| completed >= cycles) {
                break;
            }
        }
    }

    writeln!(stdout).into_diagnostic()?;
    Ok(())
}
