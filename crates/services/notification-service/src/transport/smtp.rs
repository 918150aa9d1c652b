//! SMTP delivery through `lettre`.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;
use uuid::Uuid;

use common::SmtpConfig;

use super::{MailTransport, OutboundEmail, SendReceipt};
use crate::error::TransportError;

/// Sends mail through an SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the relay client. No connection is made until the first send.
    pub fn new(config: &SmtpConfig) -> Result<Self, TransportError> {
        let host = config
            .host
            .as_deref()
            .filter(|host| !host.trim().is_empty())
            .ok_or_else(|| TransportError::NotConfigured("EMAIL_HOST is not set".to_string()))?;

        let mut builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        }
        .port(config.port);

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        debug!(%host, port = config.port, starttls = config.starttls, "SMTP transport ready");
        Ok(Self {
            transport: builder.build(),
        })
    }
}

/// `<uuid@domain>` using the sender's domain
fn message_id(from: &Mailbox) -> String {
    format!("<{}@{}>", Uuid::new_v4(), from.email.domain())
}

pub(crate) fn build_message(email: &OutboundEmail) -> Result<(Message, String), TransportError> {
    let from: Mailbox = email.from.parse()?;
    let to: Mailbox = email.to.parse()?;
    let id = message_id(&from);

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .message_id(Some(id.clone()))
        .header(ContentType::TEXT_HTML)
        .body(email.html.clone())
        .map_err(|e| TransportError::Build(e.to_string()))?;

    Ok((message, id))
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, TransportError> {
        let (message, message_id) = build_message(email)?;
        let response = self.transport.send(message).await?;

        if !response.is_positive() {
            return Err(TransportError::Rejected(response.code().to_string()));
        }
        Ok(SendReceipt { message_id })
    }
}
