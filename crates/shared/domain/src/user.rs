//! User identity as seen by the job-seeker domain.
//!
//! Users are owned by the identity collaborator; this crate only needs the
//! fields used for name derivation and the profile image completion check.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_ADMIN, ROLE_EMPLOYER, ROLE_JOBSEEKER};
use crate::error::ValidationError;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[serde(rename = "jobseeker")]
    JobSeeker,
    Employer,
    Admin,
}

impl UserRole {
    /// Check if this role owns a job-seeker profile
    pub fn is_job_seeker(&self) -> bool {
        matches!(self, UserRole::JobSeeker)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::JobSeeker => ROLE_JOBSEEKER,
            UserRole::Employer => ROLE_EMPLOYER,
            UserRole::Admin => ROLE_ADMIN,
        }
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_JOBSEEKER => Ok(UserRole::JobSeeker),
            ROLE_EMPLOYER => Ok(UserRole::Employer),
            ROLE_ADMIN => Ok(UserRole::Admin),
            other => Err(ValidationError::new("role", "enum", other)),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The external user a profile belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// URL of the uploaded avatar, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UserIdentity {
    /// "{first} {last}", as shown to employers
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether a non-blank profile image is set
    pub fn has_profile_image(&self) -> bool {
        self.profile_image
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(image: Option<&str>) -> UserIdentity {
        UserIdentity {
            id: Uuid::new_v4(),
            email: "asha@example.com".to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            profile_image: image.map(str::to_string),
            role: UserRole::JobSeeker,
            is_active: true,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(identity(None).full_name(), "Asha Rao");
    }

    #[test]
    fn test_blank_profile_image_does_not_count() {
        assert!(!identity(None).has_profile_image());
        assert!(!identity(Some("  ")).has_profile_image());
        assert!(identity(Some("https://cdn.example.com/a.png")).has_profile_image());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&UserRole::JobSeeker).unwrap(), "\"jobseeker\"");
        assert_eq!("employer".parse::<UserRole>().unwrap(), UserRole::Employer);
        assert!("recruiter".parse::<UserRole>().is_err());
    }
}
