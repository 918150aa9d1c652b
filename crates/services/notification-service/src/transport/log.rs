//! Development transport that logs instead of sending.

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use super::{MailTransport, OutboundEmail, SendReceipt};
use crate::error::TransportError;

/// Accepts every message and writes it to the log.
///
/// Used when no SMTP host is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailTransport for LogMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, TransportError> {
        let message_id = format!("<{}@localhost>", Uuid::new_v4());
        info!(
            to = %email.to,
            from = %email.from,
            subject = %email.subject,
            %message_id,
            "Email not sent, no SMTP host configured"
        );
        debug!(html = %email.html, "Email body");
        Ok(SendReceipt { message_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accepts_with_fresh_message_ids() {
        let email = OutboundEmail {
            from: "\"LifeMate\" <noreply@lifemate.com>".to_string(),
            to: "nurse@example.com".to_string(),
            subject: "Welcome".to_string(),
            html: String::new(),
        };
        let first = LogMailer::new().send(&email).await.unwrap();
        let second = LogMailer::new().send(&email).await.unwrap();

        assert_ne!(first.message_id, second.message_id);
    }
}
