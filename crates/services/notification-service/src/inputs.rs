//! Parameters of each notification, checked before anything is rendered.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors, ValidationErrorsKind};

use domain::UserRole;

use crate::error::NotificationError;
use crate::kind::NotificationKind;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// One-time tokens travel as a URL path segment: `[A-Za-z0-9_-]` only.
fn url_safe_token(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    let token = value.trim();
    if !token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        let mut err = ValidationError::new("token");
        err.message = Some("must contain only letters, digits, '-' or '_'".into());
        return Err(err);
    }
    Ok(())
}

/// Absolute `http` or `https` URL
fn web_link(value: &str) -> Result<(), ValidationError> {
    let link = value.trim();
    let scheme = link.split(':').next().unwrap_or_default().to_ascii_lowercase();
    if !link.validate_url() || !matches!(scheme.as_str(), "http" | "https") {
        let mut err = ValidationError::new("url");
        err.message = Some("must be an http or https URL".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerificationEmail {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "url_safe_token"))]
    pub token: String,
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetEmail {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "url_safe_token"))]
    pub token: String,
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
}

/// Sent to the employer when a candidate applies
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationNotificationEmail {
    #[validate(email(message = "must be a valid email address"))]
    pub employer_email: String,
    #[validate(custom(function = "not_blank"))]
    pub employer_name: String,
    #[validate(custom(function = "not_blank"))]
    pub job_title: String,
    #[validate(custom(function = "not_blank"))]
    pub candidate_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub candidate_email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDetails {
    pub date: NaiveDate,
    #[validate(custom(function = "not_blank"))]
    pub time: String,
    /// In person, phone, video...
    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank"))]
    pub interview_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "web_link"))]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Sent to the candidate when an interview is scheduled
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InterviewInvitationEmail {
    #[validate(email(message = "must be a valid email address"))]
    pub candidate_email: String,
    #[validate(custom(function = "not_blank"))]
    pub candidate_name: String,
    #[validate(custom(function = "not_blank"))]
    pub job_title: String,
    #[validate(custom(function = "not_blank"))]
    pub company_name: String,
    #[validate(nested)]
    pub interview_details: InterviewDetails,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeEmail {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    pub role: UserRole,
}

/// Run the derived checks and report the first failing field.
pub(crate) fn check_input<T: Validate>(kind: NotificationKind, input: &T) -> Result<(), NotificationError> {
    input.validate().map_err(|errors| {
        let (field, message) = first_failure(&errors)
            .unwrap_or_else(|| ("input".to_string(), "is invalid".to_string()));
        NotificationError::MissingInput {
            kind,
            field,
            message,
        }
    })
}

/// Field path and message of the alphabetically first failure
fn first_failure(errors: &ValidationErrors) -> Option<(String, String)> {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    entries.into_iter().find_map(|(field, kind)| match kind {
        ValidationErrorsKind::Field(list) => list.first().map(|err| {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            (field.to_string(), message)
        }),
        ValidationErrorsKind::Struct(inner) => {
            first_failure(inner).map(|(path, message)| (format!("{field}.{path}"), message))
        }
        ValidationErrorsKind::List(items) => items.iter().next().and_then(|(index, inner)| {
            first_failure(inner).map(|(path, message)| (format!("{field}[{index}].{path}"), message))
        }),
    })
}
