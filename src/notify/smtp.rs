//! SMTP delivery via `lettre`.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::debug;

use crate::config::IMPLICIT_TLS_SMTP_PORT;
use crate::error_handling::NotifyError;
use crate::models::EmailCredentials;

use super::{Mailer, OutgoingEmail};

/// How the connection to the relay is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Plain connection upgraded with STARTTLS (submission, port 587)
    Starttls,
    /// TLS from connect (SMTPS, port 465)
    ImplicitTls,
}

impl SmtpSecurity {
    /// Picks the handshake the relay expects on `port`.
    pub fn for_port(port: u16) -> Self {
        if port == IMPLICIT_TLS_SMTP_PORT {
            SmtpSecurity::ImplicitTls
        } else {
            SmtpSecurity::Starttls
        }
    }
}

/// Sends mail through an authenticated submission relay.
///
/// The relay host and port come from the stored credentials (Gmail's
/// `smtp.gmail.com:587` unless configured otherwise). Port 465 uses implicit
/// TLS; every other port upgrades with STARTTLS. The transport is built per
/// send; nothing connects until [`Mailer::send`] is called.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
    security: SmtpSecurity,
    username: String,
    password: String,
}

impl SmtpMailer {
    /// Builds a mailer authenticating as the sending account.
    pub fn new(credentials: &EmailCredentials) -> Self {
        Self {
            host: credentials.smtp_host.clone(),
            port: credentials.smtp_port,
            security: SmtpSecurity::for_port(credentials.smtp_port),
            username: credentials.from_address.clone(),
            password: credentials.password.clone(),
        }
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address.parse().map_err(|source| NotifyError::Address {
        address: address.to_string(),
        source,
    })
}

/// Assembles a plaintext message.
pub(crate) fn build_message(email: &OutgoingEmail) -> Result<Message, NotifyError> {
    let message = Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())?;
    Ok(message)
}

impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), NotifyError> {
        let message = build_message(email)?;
        type Transport = AsyncSmtpTransport<Tokio1Executor>;
        let builder = match self.security {
            SmtpSecurity::Starttls => Transport::starttls_relay(&self.host)?,
            SmtpSecurity::ImplicitTls => Transport::relay(&self.host)?,
        };
        let transport = builder
            .port(self.port)
            .credentials(Credentials::new(
                self.username.clone(),
                self.password.clone(),
            ))
            .build();
        debug!(
            "Sending alert via {}:{} ({:?})",
            self.host, self.port, self.security
        );
        transport.send(message).await?;
        Ok(())
    }
}
