#![forbid(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(forbidden_lint_groups)]

#[macro_use]
extern crate tracing;

pub mod http;
pub mod prepare;
pub mod signal;
pub mod state;

use self::state::Zustand;
use color_eyre::eyre;
use folio_config::Configuration;

pub fn initialise_state(config: &Configuration) -> eyre::Result<Zustand> {
    let contact = prepare::contact_service(&config.email)?;

    if config.email.verify_on_startup {
        let contact = contact.clone();
        tokio::spawn(async move { contact.ensure_verified().await });
    }

    Ok(Zustand { contact })
}
