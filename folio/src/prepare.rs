use color_eyre::eyre::{self, Context};
use folio_config::email::{self, TransportConfiguration};
use folio_email::{
    lettre::message::Mailbox,
    transport::{SendgridTransport, SmtpTransport},
    AnyTransport, ContactService,
};
use folio_http_client::Client;
use std::time::Duration;

pub fn transport(config: &email::Configuration) -> eyre::Result<AnyTransport> {
    let timeout = Duration::from_secs(config.send_timeout_secs);

    let transport = match config.transport {
        TransportConfiguration::Smtp(ref smtp) => {
            info!(host = %smtp.host, port = smtp.port, tls = ?smtp.tls_mode(), "using SMTP transport");
            SmtpTransport::new(smtp, timeout)
                .wrap_err("Failed to build the SMTP transport")?
                .into()
        }
        TransportConfiguration::Sendgrid(ref sendgrid) => {
            info!(api_url = %sendgrid.api_url, "using SendGrid transport");
            SendgridTransport::builder()
                .api_key(sendgrid.api_key.as_str())
                .api_url(sendgrid.api_url.as_str())
                .client(Client::builder().timeout(timeout).build())
                .build()
                .into()
        }
    };

    Ok(transport)
}

pub fn contact_service(config: &email::Configuration) -> eyre::Result<ContactService> {
    let from_mailbox: Mailbox = config
        .from_address
        .parse()
        .wrap_err("Invalid sender address")?;
    let to_mailbox: Mailbox = config
        .to_address
        .parse()
        .wrap_err("Invalid receiver address")?;

    Ok(ContactService::builder()
        .transport(transport(config)?)
        .from_mailbox(from_mailbox)
        .to_mailbox(to_mailbox)
        .send_timeout(Duration::from_secs(config.send_timeout_secs))
        .build())
}
