//! Email delivery over SMTP with STARTTLS.
//!
//! Credentials and recipient come from the environment only:
//! `SMTP_USER` (sender address and login), `SMTP_PASS`, `EMAIL_TO`.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use driftwatch_core::config::NotifyConfig;
use driftwatch_core::errors::NotifyError;
use driftwatch_core::traits::Notifier;

pub const SMTP_USER_VAR: &str = "SMTP_USER";
pub const SMTP_PASS_VAR: &str = "SMTP_PASS";
pub const EMAIL_TO_VAR: &str = "EMAIL_TO";

/// Resolved connection and addressing for one SMTP relay.
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub to: String,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("to", &self.to)
            .finish()
    }
}

impl SmtpSettings {
    /// Host and port from `config`, credentials from the process environment.
    pub fn from_env(config: &NotifyConfig) -> Result<Self, NotifyError> {
        Self::from_lookup(config, |key| std::env::var(key).ok())
    }

    /// Like [`SmtpSettings::from_env`] with an injectable variable lookup.
    /// Reports every missing variable at once; empty values count as missing.
    pub fn from_lookup(
        config: &NotifyConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, NotifyError> {
        let mut missing = Vec::new();
        let mut get = |key: &str| match lookup(key).filter(|v| !v.trim().is_empty()) {
            Some(v) => v,
            None => {
                missing.push(key.to_string());
                String::new()
            }
        };

        let username = get(SMTP_USER_VAR);
        let password = get(SMTP_PASS_VAR);
        let to = get(EMAIL_TO_VAR);

        if !missing.is_empty() {
            return Err(NotifyError::MissingCredentials { missing });
        }

        Ok(Self {
            host: config.effective_smtp_host(),
            port: config.effective_smtp_port(),
            username,
            password,
            to,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    settings: SmtpSettings,
}

impl SmtpNotifier {
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    pub fn from_env(config: &NotifyConfig) -> Result<Self, NotifyError> {
        SmtpSettings::from_env(config).map(Self::new)
    }

    pub fn settings(&self) -> &SmtpSettings {
        &self.settings
    }

    /// Plain-text message from the login address to the configured recipient.
    pub fn build_message(&self, subject: &str, body: &str) -> Result<Message, NotifyError> {
        Message::builder()
            .from(parse_mailbox(&self.settings.username)?)
            .to(parse_mailbox(&self.settings.to)?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::Message(e.to_string()))
    }

    fn delivery_error(&self, e: impl std::fmt::Display) -> NotifyError {
        NotifyError::Delivery {
            channel: format!("smtp://{}:{}", self.settings.host, self.settings.port),
            message: e.to_string(),
        }
    }
}

impl Notifier for SmtpNotifier {
    fn name(&self) -> &str {
        "smtp"
    }

    fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let message = self.build_message(subject, body)?;
        let credentials = Credentials::new(
            self.settings.username.clone(),
            self.settings.password.clone(),
        );

        let transport = SmtpTransport::starttls_relay(&self.settings.host)
            .map_err(|e| self.delivery_error(e))?
            .port(self.settings.port)
            .credentials(credentials)
            .build();

        transport
            .send(&message)
            .map_err(|e| self.delivery_error(e))?;

        tracing::info!(host = %self.settings.host, to = %self.settings.to, "email sent");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| NotifyError::InvalidAddress {
            address: address.to_string(),
            message: e.to_string(),
        })
}
