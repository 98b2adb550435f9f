use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::str::FromStr;

pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 10;

const IMPLICIT_TLS_PORT: u16 = 465;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TlsMode {
    /// TLS from the first byte (SMTPS)
    Implicit,

    /// Plain connection upgraded via `STARTTLS`
    Starttls,

    /// No encryption at all. Only meant for local mail catchers
    None,
}

impl TlsMode {
    #[must_use]
    pub fn for_port(port: u16) -> Self {
        if port == IMPLICIT_TLS_PORT {
            Self::Implicit
        } else {
            Self::Starttls
        }
    }
}

impl FromStr for TlsMode {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "implicit" | "tls" | "ssl" => Ok(Self::Implicit),
            "starttls" => Ok(Self::Starttls),
            "none" | "plain" => Ok(Self::None),
            other => Err(eyre::eyre!("unknown SMTP TLS mode \"{other}\"")),
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SmtpConfiguration {
    pub host: SmolStr,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub tls: Option<TlsMode>,
    pub username: SmolStr,
    pub password: SmolStr,
}

impl SmtpConfiguration {
    /// Explicitly configured TLS mode, otherwise the one implied by the port
    #[must_use]
    pub fn tls_mode(&self) -> TlsMode {
        self.tls.unwrap_or_else(|| TlsMode::for_port(self.port))
    }
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SendgridConfiguration {
    pub api_key: SmolStr,
    #[serde(default = "default_sendgrid_api_url")]
    pub api_url: SmolStr,
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum TransportConfiguration {
    Smtp(SmtpConfiguration),
    Sendgrid(SendgridConfiguration),
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    pub from_address: SmolStr,
    pub to_address: SmolStr,
    #[serde(default = "default_send_timeout_secs")]
    pub send_timeout_secs: u64,
    #[serde(default = "default_verify_on_startup")]
    pub verify_on_startup: bool,
    pub transport: TransportConfiguration,
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

fn default_sendgrid_api_url() -> SmolStr {
    SmolStr::new_static(DEFAULT_SENDGRID_API_URL)
}

fn default_send_timeout_secs() -> u64 {
    DEFAULT_SEND_TIMEOUT_SECS
}

fn default_verify_on_startup() -> bool {
    true
}
