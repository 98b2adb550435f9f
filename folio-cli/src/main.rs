use self::config::Configuration;
use clap::{Parser, Subcommand};
use folio_core::consts::VERSION;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

mod banner;
mod check;
mod config;
mod send;

#[derive(Subcommand)]
enum AppSubcommand {
    /// Submit a message to a running contact endpoint
    Send(send::SendArgs),

    /// Play the typing animation of the site title
    Banner {
        /// Number of roles to type out before exiting. Runs until interrupted when omitted
        #[clap(long)]
        cycles: Option<usize>,
    },

    /// Check that the configured mail transport is reachable
    Check {
        /// Path to the configuration file. The environment is used when omitted
        #[clap(long, short)]
        config: Option<PathBuf>,
    },
}

/// CLI companion for the folio contact relay
#[derive(Parser)]
#[command(about, author, version = VERSION)]
struct App {
    #[clap(subcommand)]
    subcommand: AppSubcommand,
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_panic_hook();
    dotenvy::dotenv().ok();

    let cmd = App::parse();
    if !matches!(cmd.subcommand, AppSubcommand::Banner { .. }) {
        folio_observability::initialise().map_err(|error| miette::miette!("{error:#}"))?;
    }

    match cmd.subcommand {
        AppSubcommand::Send(args) => {
            let config: Configuration = envy::from_env().into_diagnostic()?;
            self::send::handle(args, &config).await?;
        }
        AppSubcommand::Banner { cycles } => self::banner::handle(cycles).await?,
        AppSubcommand::Check { config } => self::check::handle(config).await?,
    }

    Ok(())
}
