//! Notification composer - renders and dispatches transactional emails.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use validator::Validate;

use crate::config::NotificationServiceConfig;
use crate::error::{DeliveryError, NotificationError};
use crate::inputs::{
    check_input, ApplicationNotificationEmail, InterviewInvitationEmail, PasswordResetEmail,
    VerificationEmail, WelcomeEmail,
};
use crate::kind::NotificationKind;
use crate::templates::{
    render_application_notification, render_interview_invitation, render_password_reset,
    render_verification, render_welcome, RenderContext, RenderedEmail,
};
use crate::transport::{MailTransport, OutboundEmail, SendReceipt};

type Renderer<T> = fn(&RenderContext, &T) -> RenderedEmail;

/// Builds each notification and submits it to a [`MailTransport`].
///
/// Holds no mutable state; calls may run concurrently.
pub struct NotificationComposer {
    config: NotificationServiceConfig,
    transport: Arc<dyn MailTransport>,
}

impl NotificationComposer {
    pub fn new(config: NotificationServiceConfig, transport: Arc<dyn MailTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &NotificationServiceConfig {
        &self.config
    }

    pub async fn send_verification(
        &self,
        input: &VerificationEmail,
    ) -> Result<SendReceipt, NotificationError> {
        self.dispatch(
            NotificationKind::EmailVerification,
            input,
            &input.email,
            render_verification,
        )
        .await
    }

    pub async fn send_password_reset(
        &self,
        input: &PasswordResetEmail,
    ) -> Result<SendReceipt, NotificationError> {
        self.dispatch(
            NotificationKind::PasswordReset,
            input,
            &input.email,
            render_password_reset,
        )
        .await
    }

    /// Goes to the employer
    pub async fn send_application_notification(
        &self,
        input: &ApplicationNotificationEmail,
    ) -> Result<SendReceipt, NotificationError> {
        self.dispatch(
            NotificationKind::ApplicationNotification,
            input,
            &input.employer_email,
            render_application_notification,
        )
        .await
    }

    /// Goes to the candidate
    pub async fn send_interview_invitation(
        &self,
        input: &InterviewInvitationEmail,
    ) -> Result<SendReceipt, NotificationError> {
        self.dispatch(
            NotificationKind::InterviewInvitation,
            input,
            &input.candidate_email,
            render_interview_invitation,
        )
        .await
    }

    pub async fn send_welcome(&self, input: &WelcomeEmail) -> Result<SendReceipt, NotificationError> {
        self.dispatch(NotificationKind::Welcome, input, &input.email, render_welcome)
            .await
    }

    /// Validate, render, then make exactly one transport call
    async fn dispatch<T>(
        &self,
        kind: NotificationKind,
        input: &T,
        recipient: &str,
        render: Renderer<T>,
    ) -> Result<SendReceipt, NotificationError>
    where
        T: Validate + Sync,
    {
        check_input(kind, input)?;

        let ctx = self.config.render_context(Utc::now().date_naive());
        let rendered = render(&ctx, input);
        let email = OutboundEmail {
            from: self.config.sender.mailbox(),
            to: recipient.trim().to_string(),
            subject: rendered.subject,
            html: rendered.html,
        };

        match self.transport.send(&email).await {
            Ok(receipt) => {
                info!(%kind, recipient = %email.to, message_id = %receipt.message_id, "Email sent");
                Ok(receipt)
            }
            Err(cause) => {
                error!(%kind, recipient = %email.to, error = %cause, "Email delivery failed");
                Err(DeliveryError {
                    kind,
                    recipient: email.to,
                    cause,
                }
                .into())
            }
        }
    }
}
