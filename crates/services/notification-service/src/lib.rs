//! Notification Service Library
//!
//! Renders the platform's transactional emails (verification, password
//! reset, application notification, interview invitation, welcome) and
//! hands each one to a mail transport.

pub mod composer;
pub mod config;
pub mod error;
pub mod inputs;
pub mod kind;
pub mod templates;
pub mod transport;

use std::sync::Arc;

use tracing::warn;

pub use composer::NotificationComposer;
pub use config::NotificationServiceConfig;
pub use error::{DeliveryError, NotificationError, TransportError};
pub use inputs::{
    ApplicationNotificationEmail, InterviewDetails, InterviewInvitationEmail, PasswordResetEmail,
    VerificationEmail, WelcomeEmail,
};
pub use kind::NotificationKind;
pub use templates::{RenderContext, RenderedEmail};
pub use transport::{LogMailer, MailTransport, OutboundEmail, SendReceipt, SmtpMailer};

/// SMTP when a host is configured, otherwise the logging transport.
pub fn transport_for(config: &NotificationServiceConfig) -> Result<Arc<dyn MailTransport>, TransportError> {
    if config.smtp.is_configured() {
        Ok(Arc::new(SmtpMailer::new(&config.smtp)?))
    } else {
        warn!("EMAIL_HOST not set, emails will be logged instead of sent");
        Ok(Arc::new(LogMailer::new()))
    }
}

/// Composer wired from the process environment.
pub fn composer_from_env() -> Result<NotificationComposer, TransportError> {
    let config = NotificationServiceConfig::from_env();
    let transport = transport_for(&config)?;
    Ok(NotificationComposer::new(config, transport))
}
