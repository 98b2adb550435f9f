#![forbid(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, forbidden_lint_groups)]

pub mod email;
pub mod env;
pub mod server;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    pub email: email::Configuration,
    #[serde(default)]
    pub server: server::Configuration,
}

impl Configuration {
    pub async fn load<P>(path: P) -> eyre::Result<Self>
    where
        P: AsRef<Path>,
    {
        let content = fs::read_to_string(path).await?;
        toml::from_str(&content).map_err(eyre::Report::from)
    }

    /// Read the configuration from the flat environment variables used by serverless deployments
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> eyre::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let environment: env::Environment = envy::from_iter(vars)?;
        environment.try_into()
    }
}

#[cfg(test)]
mod test {
    use super::{
        email::{TlsMode, TransportConfiguration},
        Configuration,
    };
    use pretty_assertions::assert_eq;

    const SMTP_CONFIG: &str = r#"
        [email]
        from-address = "Portfolio Contact <mailer@example.com>"
        to-address = "owner@example.com"

        [email.transport]
        type = "smtp"
        host = "smtp.example.com"
        port = 465
        username = "mailer@example.com"
        password = "hunter2"

        [server]
        port = 8080
        frontend-dir = "dist"
    "#;

    const SENDGRID_CONFIG: &str = r#"
        [email]
        from-address = "verified-sender@example.com"
        to-address = "owner@example.com"
        send-timeout-secs = 5
        verify-on-startup = false

        [email.transport]
        type = "sendgrid"
        api-key = "SG.secret"
    "#;

    #[test]
    fn parse_smtp() {
        let config: Configuration = toml::from_str(SMTP_CONFIG).unwrap();
        let TransportConfiguration::Smtp(ref smtp) = config.email.transport else {
            panic!("expected the SMTP transport");
        };

        assert_eq!(smtp.host, "smtp.example.com");
        assert_eq!(smtp.tls_mode(), TlsMode::Implicit);
        assert_eq!(config.email.send_timeout_secs, 10);
        assert!(config.email.verify_on_startup);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.contact_path, "/api/contact");
        assert_eq!(config.server.frontend_dir.as_deref(), Some("dist"));
    }

    #[test]
    fn parse_sendgrid_with_defaults() {
        let config: Configuration = toml::from_str(SENDGRID_CONFIG).unwrap();
        let TransportConfiguration::Sendgrid(ref sendgrid) = config.email.transport else {
            panic!("expected the SendGrid transport");
        };

        assert_eq!(sendgrid.api_key, "SG.secret");
        assert_eq!(sendgrid.api_url, "https://api.sendgrid.com");
        assert_eq!(config.email.send_timeout_secs, 5);
        assert!(!config.email.verify_on_startup);
        assert_eq!(config.server.port, 3000);
    }
}
