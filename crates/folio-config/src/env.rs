use crate::{
    email::{
        self, SendgridConfiguration, SmtpConfiguration, TlsMode, TransportConfiguration,
        DEFAULT_SENDGRID_API_URL, DEFAULT_SEND_TIMEOUT_SECS, DEFAULT_SMTP_PORT,
    },
    server, Configuration,
};
use serde::Deserialize;
use smol_str::{format_smolstr, SmolStr};

/// Display name used for the sender mailbox when it is derived from the SMTP username
pub const SENDER_DISPLAY_NAME: &str = "Portfolio Contact";

/// Flat environment layout
///
/// Every variable maps onto its upper-case name (`smtp_host` is read from `SMTP_HOST`).
#[derive(Default, Deserialize)]
pub struct Environment {
    pub smtp_host: Option<SmolStr>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<SmolStr>,
    pub smtp_pass: Option<SmolStr>,
    pub smtp_tls: Option<SmolStr>,

    pub sendgrid_api_key: Option<SmolStr>,
    pub api_key: Option<SmolStr>,
    pub sendgrid_api_url: Option<SmolStr>,

    pub sender_email: Option<SmolStr>,
    pub receiver_email: Option<SmolStr>,
    pub send_timeout_secs: Option<u64>,
    pub verify_on_startup: Option<bool>,

    pub port: Option<u16>,
    pub contact_path: Option<SmolStr>,
    pub request_timeout_secs: Option<u64>,
    pub max_body_size: Option<usize>,
    pub frontend_dir: Option<SmolStr>,
}

impl Environment {
    fn transport(&mut self) -> eyre::Result<TransportConfiguration> {
        if let Some(host) = self.smtp_host.take() {
            let (Some(username), Some(password)) = (self.smtp_user.clone(), self.smtp_pass.take())
            else {
                eyre::bail!("SMTP_HOST is set but SMTP_USER or SMTP_PASS is missing");
            };

            let tls = self
                .smtp_tls
                .as_deref()
                .map(str::parse::<TlsMode>)
                .transpose()?;

            return Ok(TransportConfiguration::Smtp(SmtpConfiguration {
                host,
                port: self.smtp_port.unwrap_or(DEFAULT_SMTP_PORT),
                tls,
                username,
                password,
            }));
        }

        if let Some(api_key) = self.sendgrid_api_key.take().or_else(|| self.api_key.take()) {
            return Ok(TransportConfiguration::Sendgrid(SendgridConfiguration {
                api_key,
                api_url: self
                    .sendgrid_api_url
                    .take()
                    .unwrap_or_else(|| SmolStr::new_static(DEFAULT_SENDGRID_API_URL)),
            }));
        }

        eyre::bail!("No mail transport configured. Set either SMTP_HOST or SENDGRID_API_KEY")
    }

    fn from_address(&mut self, transport: &TransportConfiguration) -> eyre::Result<SmolStr> {
        if let Some(sender) = self.sender_email.take() {
            return Ok(sender);
        }

        match transport {
            TransportConfiguration::Smtp(smtp) => Ok(format_smolstr!(
                "\"{SENDER_DISPLAY_NAME}\" <{}>",
                smtp.username
            )),
            TransportConfiguration::Sendgrid(..) => {
                eyre::bail!("SENDER_EMAIL is required when sending through SendGrid")
            }
        }
    }
}

impl TryFrom<Environment> for Configuration {
    type Error = eyre::Report;

    fn try_from(mut value: Environment) -> Result<Self, Self::Error> {
        let transport = value.transport()?;
        let from_address = value.from_address(&transport)?;
        let Some(to_address) = value.receiver_email.take() else {
            eyre::bail!("RECEIVER_EMAIL is missing");
        };

        let defaults = server::Configuration::default();
        let server = server::Configuration {
            contact_path: value.contact_path.unwrap_or(defaults.contact_path),
            frontend_dir: value.frontend_dir,
            max_body_size: value.max_body_size.unwrap_or(defaults.max_body_size),
            port: value.port.unwrap_or(defaults.port),
            request_timeout_secs: value
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
        };

        Ok(Self {
            email: email::Configuration {
                from_address,
                to_address,
                send_timeout_secs: value.send_timeout_secs.unwrap_or(DEFAULT_SEND_TIMEOUT_SECS),
                verify_on_startup: value.verify_on_startup.unwrap_or(true),
                transport,
            },
            server,
        })
    }
}
