use folio_config::Configuration;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

#[allow(clippy::needless_pass_by_value)]
fn report(error: eyre::Report) -> miette::Report {
    miette::miette!("{error:#}")
}

pub async fn handle(config: Option<PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => Configuration::load(path).await,
        None => Configuration::from_env(),
    }
    .map_err(report)?;

    let contact = folio::prepare::contact_service(&config.email).map_err(report)?;
    contact.verify().await.into_diagnostic()?;

    println!("Mail transport is reachable and accepted our credentials");
    Ok(())
}
