use clap::Parser;
use color_eyre::eyre::{self, Context};
use folio_config::Configuration;
use folio_core::consts::VERSION;
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Contact form relay for a portfolio site
#[derive(Parser)]
#[command(about, author, version = VERSION)]
struct Args {
    /// Path to the configuration file
    ///
    /// Without it the configuration is read from the environment (and a `.env` file, if present)
    #[clap(long, short)]
    config: Option<PathBuf>,
}

async fn boot() -> eyre::Result<()> {
    let args = Args::parse();
    let config = match args.config {
        Some(path) => Configuration::load(path)
            .await
            .wrap_err("Failed to load the configuration file")?,
        None => {
            dotenvy::dotenv().ok();
            Configuration::from_env()
                .wrap_err("Failed to read the configuration from the environment")?
        }
    };
    folio_observability::initialise()?;

    let state = folio::initialise_state(&config)?;
    let shutdown_signal = folio::signal::shutdown();

    folio::http::run(state, config.server, shutdown_signal).await
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(boot())
}
