//! Notification error types.

use common::AppError;
use thiserror::Error;

use crate::kind::NotificationKind;

/// Failure reported by a [`MailTransport`](crate::transport::MailTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("mail transport is not configured: {0}")]
    NotConfigured(String),

    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Message refused by the receiving side
    #[error("rejected: {0}")]
    Rejected(String),
}

/// A notification that reached the transport but was not accepted.
#[derive(Debug, Error)]
#[error("failed to deliver {kind} to {recipient}: {cause}")]
pub struct DeliveryError {
    pub kind: NotificationKind,
    pub recipient: String,
    #[source]
    pub cause: TransportError,
}

#[derive(Debug, Error)]
pub enum NotificationError {
    /// Rejected before anything was handed to the transport
    #[error("{kind}: invalid {field}: {message}")]
    MissingInput {
        kind: NotificationKind,
        field: String,
        message: String,
    },

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl NotificationError {
    pub fn kind(&self) -> NotificationKind {
        match self {
            NotificationError::MissingInput { kind, .. } => *kind,
            NotificationError::Delivery(err) => err.kind,
        }
    }
}

impl From<NotificationError> for AppError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::MissingInput { field, message, .. } => {
                AppError::bad_request(format!("{field}: {message}"))
            }
            NotificationError::Delivery(err) => AppError::Delivery {
                kind: err.kind.to_string(),
                recipient: err.recipient,
                cause: err.cause.to_string(),
            },
        }
    }
}
