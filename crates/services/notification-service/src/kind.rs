//! The transactional notifications the platform sends.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    EmailVerification,
    PasswordReset,
    ApplicationNotification,
    InterviewInvitation,
    Welcome,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::EmailVerification => "email_verification",
            NotificationKind::PasswordReset => "password_reset",
            NotificationKind::ApplicationNotification => "application_notification",
            NotificationKind::InterviewInvitation => "interview_invitation",
            NotificationKind::Welcome => "welcome",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
