//! Configuration module for formrelay.

use axum::http::HeaderValue;
use chrono_tz::Tz;
use lettre::message::Mailbox;
use lettre::Address;
use serde::Deserialize;
use std::path::Path;

use crate::{RelayError, Result};

/// HTTP surface configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Host address to bind.
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// The only origin allowed to make cross-origin requests.
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_web_host() -> String {
    "0.0.0.0".to_string()
}

fn default_web_port() -> u16 {
    5000
}

fn default_frontend_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024 // 10MB
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            frontend_url: default_frontend_url(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Which mail transport to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailTransportKind {
    /// Send through an SMTP relay.
    #[default]
    Smtp,
    /// Record and log messages without sending them.
    Stub,
}

/// SMTP connection security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Plain connection upgraded with STARTTLS.
    #[default]
    Starttls,
    /// Implicit TLS (usually port 465).
    Tls,
    /// No encryption (local relays only).
    None,
}

/// Outbound mail configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Transport kind.
    #[serde(default)]
    pub transport: MailTransportKind,
    /// SMTP server host name.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP server port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Connection security.
    #[serde(default)]
    pub security: SmtpSecurity,
    /// SMTP account user name.
    #[serde(default)]
    pub username: String,
    /// SMTP account password.
    #[serde(default)]
    pub password: String,
    /// Display name used in the `From` header.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Address used in the `From` header. Falls back to `username`.
    #[serde(default)]
    pub from_address: String,
    /// Where submissions are delivered.
    #[serde(default)]
    pub recipient: String,
    /// Upper bound on a single send, in seconds.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_name() -> String {
    "Contact Form".to_string()
}

fn default_send_timeout() -> u64 {
    30
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            transport: MailTransportKind::default(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            security: SmtpSecurity::default(),
            username: String::new(),
            password: String::new(),
            from_name: default_from_name(),
            from_address: String::new(),
            recipient: String::new(),
            send_timeout_secs: default_send_timeout(),
        }
    }
}

impl MailConfig {
    /// Address used in the `From` header.
    pub fn sender_address(&self) -> &str {
        if self.from_address.is_empty() {
            &self.username
        } else {
            &self.from_address
        }
    }

    /// Build the `From` mailbox.
    pub fn sender_mailbox(&self) -> Result<Mailbox> {
        let address: Address = self.sender_address().parse().map_err(|e| {
            RelayError::Config(format!(
                "invalid sender address '{}': {e}",
                self.sender_address()
            ))
        })?;
        Ok(Mailbox::new(Some(self.from_name.clone()), address))
    }
}

/// Contact message rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Label prepended to the submitted subject.
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
    /// Timezone for the submission timestamp (e.g., "Europe/Berlin", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Escape HTML metacharacters in the HTML body.
    #[serde(default = "default_escape_html")]
    pub escape_html: bool,
}

fn default_subject_prefix() -> String {
    "[Contact Form]".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_escape_html() -> bool {
    true
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            subject_prefix: default_subject_prefix(),
            timezone: default_timezone(),
            escape_html: default_escape_html(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file. Console only when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP surface configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Outbound mail configuration.
    #[serde(default)]
    pub mail: MailConfig,
    /// Contact message configuration.
    #[serde(default)]
    pub contact: ContactConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RelayError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RelayError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FORMRELAY_SMTP_USERNAME`: SMTP account user name
    /// - `FORMRELAY_SMTP_PASSWORD`: SMTP account password
    /// - `FORMRELAY_RECIPIENT`: Recipient address
    /// - `FORMRELAY_FRONTEND_URL`: Allowed cross-origin caller
    /// - `FORMRELAY_PORT`: Listen port
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(username) = env_override("FORMRELAY_SMTP_USERNAME") {
            self.mail.username = username;
        }
        if let Some(password) = env_override("FORMRELAY_SMTP_PASSWORD") {
            self.mail.password = password;
        }
        if let Some(recipient) = env_override("FORMRELAY_RECIPIENT") {
            self.mail.recipient = recipient;
        }
        if let Some(frontend_url) = env_override("FORMRELAY_FRONTEND_URL") {
            self.web.frontend_url = frontend_url;
        }
        if let Some(port) = env_override("FORMRELAY_PORT") {
            match port.parse() {
                Ok(port) => self.web.port = port,
                Err(_) => tracing::warn!("Ignoring invalid FORMRELAY_PORT value: {}", port),
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - the recipient is missing or not a valid address
    /// - the SMTP transport is selected without a valid sender address
    /// - only one of the SMTP username and password is set
    /// - the frontend URL cannot be used as an origin header
    /// - the timezone is unknown
    /// - the send timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.mail.recipient.is_empty() {
            return Err(RelayError::Config(
                "mail.recipient is not set. \
                 Set it in config.toml or via FORMRELAY_RECIPIENT environment variable."
                    .to_string(),
            ));
        }
        self.mail.recipient.parse::<Mailbox>().map_err(|e| {
            RelayError::Config(format!(
                "invalid mail.recipient '{}': {e}",
                self.mail.recipient
            ))
        })?;

        if self.mail.username.is_empty() != self.mail.password.is_empty() {
            return Err(RelayError::Config(
                "mail.username and mail.password must be set together".to_string(),
            ));
        }

        if self.mail.transport == MailTransportKind::Smtp {
            if self.mail.sender_address().is_empty() {
                return Err(RelayError::Config(
                    "mail.from_address or mail.username must be set for the SMTP transport"
                        .to_string(),
                ));
            }
            self.mail.sender_mailbox()?;
        }

        if self.mail.send_timeout_secs == 0 {
            return Err(RelayError::Config(
                "mail.send_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if HeaderValue::from_str(&self.web.frontend_url).is_err() {
            return Err(RelayError::Config(format!(
                "invalid web.frontend_url '{}'",
                self.web.frontend_url
            )));
        }

        if self.contact.timezone.parse::<Tz>().is_err() {
            return Err(RelayError::Config(format!(
                "unknown contact.timezone '{}'",
                self.contact.timezone
            )));
        }

        Ok(())
    }
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
