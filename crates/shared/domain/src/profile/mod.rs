//! Job-seeker profile entity.
//!
//! # Write path
//!
//! Every persisted mutation MUST go through [`JobSeekerProfile::prepare_for_write`].
//! It trims free text, validates every field rule and recomputes
//! `profileCompletion`. Storage only accepts the resulting
//! [`ValidatedProfile`], which cannot be built any other way, so a write
//! can never skip validation or leave a stale completion score behind.

mod completion;
mod rules;
mod sections;

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult, ValidationError};
use crate::user::UserIdentity;
use crate::vocabulary::Specialization;

pub use completion::{CompletionCheck, CompletionReport};
pub use sections::{
    Certification, Document, Education, ExpectedSalary, Experience, JobPreferences,
    PortfolioItem, PreferredLocation, PrivacySettings, ProfileStats, Skill, StatKind,
    WorkExperience,
};

/// Job-seeker profile, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerProfile {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Owning user, unique across profiles
    pub user_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub specializations: BTreeSet<Specialization>,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub job_preferences: JobPreferences,
    #[serde(default)]
    pub resume: Option<Document>,
    #[serde(default)]
    pub cover_letter: Option<Document>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    /// Derived; only `prepare_for_write` sets it
    #[serde(default)]
    profile_completion: u8,
    #[serde(default)]
    pub privacy_settings: PrivacySettings,
    #[serde(default)]
    pub stats: ProfileStats,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    /// Set when the owning user is deactivated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retired_at: Option<DateTime<Utc>>,
}

impl JobSeekerProfile {
    /// Empty profile for a freshly registered job seeker
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: None,
            bio: None,
            specializations: BTreeSet::new(),
            experience: Experience::default(),
            education: Vec::new(),
            work_experience: Vec::new(),
            skills: Vec::new(),
            certifications: Vec::new(),
            job_preferences: JobPreferences::default(),
            resume: None,
            cover_letter: None,
            portfolio: Vec::new(),
            profile_completion: 0,
            privacy_settings: PrivacySettings::default(),
            stats: ProfileStats::default(),
            created_at: now,
            updated_at: now,
            retired_at: None,
        }
    }

    /// Completion percentage as of the last write
    pub fn profile_completion(&self) -> u8 {
        self.profile_completion
    }

    pub fn is_retired(&self) -> bool {
        self.retired_at.is_some()
    }

    /// Owner's display name, empty when the owner is unknown
    pub fn full_name(&self, owner: Option<&UserIdentity>) -> String {
        match owner {
            Some(user) if user.id == self.user_id => user.full_name(),
            _ => String::new(),
        }
    }

    /// Trim every free-text field; blank optional text becomes `None`.
    pub fn normalize(&mut self) {
        trim_opt(&mut self.title);
        trim_opt(&mut self.bio);
        trim_opt(&mut self.experience.current_position);
        trim_opt(&mut self.experience.current_company);

        for entry in &mut self.education {
            trim(&mut entry.field);
            trim(&mut entry.institution);
            trim_opt(&mut entry.grade);
        }
        for entry in &mut self.work_experience {
            trim(&mut entry.position);
            trim(&mut entry.company);
            trim(&mut entry.location);
            trim_opt(&mut entry.description);
            entry.achievements.iter_mut().for_each(trim);
        }
        for skill in &mut self.skills {
            trim(&mut skill.name);
        }
        for cert in &mut self.certifications {
            trim(&mut cert.name);
            trim(&mut cert.issuing_organization);
            trim_opt(&mut cert.credential_id);
            trim_opt(&mut cert.credential_url);
        }
        for place in &mut self.job_preferences.preferred_locations {
            trim(&mut place.city);
            trim(&mut place.state);
            trim(&mut place.country);
        }
        for item in &mut self.portfolio {
            trim(&mut item.title);
            trim_opt(&mut item.description);
            trim(&mut item.url);
        }
    }

    /// First violated field rule, if any
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_for_year(Utc::now().year())
    }

    /// Same as [`validate`](Self::validate) with an explicit current year.
    pub fn validate_for_year(&self, current_year: i32) -> Result<(), ValidationError> {
        self.schema(current_year).validate()
    }

    /// Every violated field rule
    pub fn violations(&self) -> Vec<ValidationError> {
        self.schema(Utc::now().year()).violations()
    }

    pub fn completion_report(&self, owner_has_image: bool) -> CompletionReport {
        CompletionReport::evaluate(self, owner_has_image)
    }

    /// Pre-commit hook: normalize, validate and recompute completion.
    ///
    /// `owner` must be the identity this profile belongs to; its profile
    /// image feeds the last completion check.
    pub fn prepare_for_write(mut self, owner: &UserIdentity) -> DomainResult<ValidatedProfile> {
        if owner.id != self.user_id {
            return Err(DomainError::forbidden(format!(
                "user {} does not own profile {}",
                owner.id, self.id
            )));
        }

        self.normalize();
        self.validate()?;
        self.profile_completion = self.completion_report(owner.has_profile_image()).percent();
        self.updated_at = Utc::now();

        Ok(ValidatedProfile(self))
    }
}

/// A profile that passed the pre-commit hook and may be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProfile(JobSeekerProfile);

impl ValidatedProfile {
    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }

    pub fn into_inner(self) -> JobSeekerProfile {
        self.0
    }
}

impl AsRef<JobSeekerProfile> for ValidatedProfile {
    fn as_ref(&self) -> &JobSeekerProfile {
        &self.0
    }
}

fn trim(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn trim_opt(value: &mut Option<String>) {
    if let Some(inner) = value.as_mut() {
        trim(inner);
        if inner.is_empty() {
            *value = None;
        }
    }
}
