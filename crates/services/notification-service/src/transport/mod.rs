//! Outbound mail transports.

mod log;
mod smtp;

pub use self::log::LogMailer;
pub use self::smtp::SmtpMailer;

use async_trait::async_trait;

use crate::error::TransportError;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fully rendered message handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// `"Name" <address>`
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Proof that the transport accepted a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub message_id: String,
}

/// Trait for anything that can submit an email for delivery.
///
/// One call submits one message. Implementations do not retry.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, TransportError>;
}
