//! Contact-form mail delivery via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport to forward contact
//! messages to the configured recipient. Configuration is loaded from
//! environment variables; if `MAIL_SERVER` is not set,
//! [`MailConfig::from_env`] returns `None` and no mailer should be
//! constructed.

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for mail delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient, sender, or reply-to address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// MailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_MAIL_PORT: u16 = 587;

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub server: String,
    /// SMTP server port (defaults to 587).
    pub port: u16,
    /// Optional SMTP username.
    pub username: Option<String>,
    /// Optional SMTP password.
    pub password: Option<String>,
    /// RFC 5322 "From" address for outgoing mail.
    pub default_sender: String,
    /// Address contact messages are delivered to.
    pub recipient: String,
    /// Whether to negotiate STARTTLS (default: true).
    pub use_tls: bool,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `MAIL_SERVER` is not set, signalling that mail
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable              | Required | Default                  |
    /// |-----------------------|----------|--------------------------|
    /// | `MAIL_SERVER`         | yes      | —                        |
    /// | `MAIL_PORT`           | no       | `587`                    |
    /// | `MAIL_USERNAME`       | no       | —                        |
    /// | `MAIL_PASSWORD`       | no       | —                        |
    /// | `MAIL_DEFAULT_SENDER` | no       | `noreply@folio.local`    |
    /// | `MAIL_RECIPIENT`      | yes      | —                        |
    /// | `MAIL_USE_TLS`        | no       | `true`                   |
    pub fn from_env() -> Option<Self> {
        let server = std::env::var("MAIL_SERVER").ok()?;
        let recipient = std::env::var("MAIL_RECIPIENT").ok()?;
        Some(Self {
            server,
            port: std::env::var("MAIL_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_MAIL_PORT),
            username: std::env::var("MAIL_USERNAME").ok(),
            password: std::env::var("MAIL_PASSWORD").ok(),
            default_sender: std::env::var("MAIL_DEFAULT_SENDER")
                .unwrap_or_else(|_| "noreply@folio.local".to_string()),
            recipient,
            use_tls: std::env::var("MAIL_USE_TLS")
                .map(|v| matches!(v.as_str(), "1" | "true" | "True" | "TRUE"))
                .unwrap_or(true),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Forwards contact-form messages to the site owner via SMTP.
pub struct Mailer {
    config: MailConfig,
}

impl Mailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Deliver a contact-form message to the configured recipient.
    ///
    /// The visitor's address goes into `Reply-To` so the owner can
    /// answer directly from their mail client.
    pub async fn send_contact_message(
        &self,
        name: &str,
        reply_to: &str,
        message: &str,
    ) -> Result<(), MailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let subject = format!("New contact message from {name}");
        let body = format!("From: {name} <{reply_to}>\n\n{message}");

        let email = Message::builder()
            .from(self.config.default_sender.parse()?)
            .reply_to(reply_to.parse()?)
            .to(self.config.recipient.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| MailError::Build(e.to_string()))?;

        let mut transport_builder = if self.config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.server)?
                .port(self.config.port)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.server)
                .port(self.config.port)
        };

        if let (Some(user), Some(pass)) = (&self.config.username, &self.config.password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = %self.config.recipient, "Contact message delivered");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_mail_server() {
        // Ensure MAIL_SERVER is not set in the test environment.
        std::env::remove_var("MAIL_SERVER");
        assert!(MailConfig::from_env().is_none());
    }

    #[test]
    fn mail_error_display_build() {
        let err = MailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn mail_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = MailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
