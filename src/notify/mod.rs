//! Alert email composition and delivery.
//!
//! An [`EmailHandler`] is built fresh for each scan from stored credentials,
//! collects one `endpoint,status` line per failing host and sends a single
//! plaintext email. Once sent, further sends are no-ops.

mod smtp;

use std::future::Future;

use log::{debug, error};
use strum_macros::Display;

use crate::config::{ALERT_BODY_HEADER, ALERT_SUBJECT};
use crate::error_handling::NotifyError;
use crate::models::{EmailCredentials, Host};

pub use smtp::{SmtpMailer, SmtpSecurity};

/// A fully composed email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plaintext body
    pub body: String,
}

/// Delivers composed emails.
pub trait Mailer {
    /// Attempts delivery once.
    fn send(&self, email: &OutgoingEmail) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Delivery state of an [`EmailHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EmailStatus {
    /// Not sent yet
    Unsent,
    /// Delivered; further sends are no-ops
    Sent,
    /// The last attempt failed
    Failed,
}

/// Per-scan alert email.
pub struct EmailHandler<M> {
    credentials: EmailCredentials,
    body: String,
    status: EmailStatus,
    last_error: Option<String>,
    mailer: M,
}

impl<M: Mailer> EmailHandler<M> {
    /// Starts an unsent alert with the standard header.
    pub fn new(credentials: EmailCredentials, mailer: M) -> Self {
        Self {
            credentials,
            body: ALERT_BODY_HEADER.to_string(),
            status: EmailStatus::Unsent,
            last_error: None,
            mailer,
        }
    }

    /// Appends an `endpoint,status` line. No CSV escaping is applied.
    pub fn append_failure(&mut self, host: &Host) {
        self.body
            .push_str(&format!("{},{}\r\n", host.endpoint, host.status));
    }

    /// Current body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Current delivery state.
    pub fn status(&self) -> EmailStatus {
        self.status
    }

    /// Why the last attempt failed, while the status is `Failed`.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Sends the alert.
    ///
    /// Returns `true` only when this call delivered the email. After a
    /// successful send, further calls do nothing and return `false`. A failed
    /// attempt sets the status to `Failed`, keeps the error in
    /// [`last_error`](Self::last_error) and is not retried.
    pub async fn send(&mut self) -> bool {
        if self.status == EmailStatus::Sent {
            debug!("Alert already sent; not sending again");
            return false;
        }

        let email = OutgoingEmail {
            from: self.credentials.from_address.clone(),
            to: self.credentials.to_address.clone(),
            subject: ALERT_SUBJECT.to_string(),
            body: self.body.clone(),
        };

        match self.mailer.send(&email).await {
            Ok(()) => {
                self.status = EmailStatus::Sent;
                self.last_error = None;
                true
            }
            Err(e) => {
                error!("Alert delivery failed: {e}");
                self.status = EmailStatus::Failed;
                self.last_error = Some(e.to_string());
                false
            }
        }
    }
}
