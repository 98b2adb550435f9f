use crate::{signal, state::Zustand};
use color_eyre::eyre::{self, Context};
use folio_config::server;
use folio_email::MailTransport;
use http::HeaderName;
use tokio::net::TcpListener;

pub mod extractor;
pub mod handler;
pub mod middleware;
pub mod router;

pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

#[instrument(skip_all, fields(port = %server_config.port))]
pub async fn run<T>(
    state: Zustand<T>,
    server_config: server::Configuration,
    shutdown_signal: signal::Receiver,
) -> eyre::Result<()>
where
    T: MailTransport,
{
    let router = router::create(state, &server_config)?;
    let listener = TcpListener::bind(("0.0.0.0", server_config.port))
        .await
        .wrap_err("Failed to bind the listener")?;

    info!(address = %listener.local_addr()?, path = %server_config.contact_path, "accepting contact submissions");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal.wait())
        .await?;

    Ok(())
}
