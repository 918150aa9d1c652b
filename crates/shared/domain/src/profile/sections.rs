//! Nested sections of a job-seeker profile.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COUNTRY;
use crate::vocabulary::{
    Availability, Currency, Degree, JobType, PortfolioKind, RemoteWorkPreference, SalaryPeriod,
    Shift, SkillLevel,
};

/// Overall experience summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Years in the field, 0..=50. `Some(0.0)` is a valid answer.
    #[serde(default)]
    pub total_years: Option<f64>,
    #[serde(default)]
    pub current_position: Option<String>,
    #[serde(default)]
    pub current_company: Option<String>,
    #[serde(default = "default_true")]
    pub is_currently_employed: bool,
}

impl Default for Experience {
    fn default() -> Self {
        Self {
            total_years: None,
            current_position: None,
            current_company: None,
            is_currently_employed: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: Degree,
    pub field: String,
    pub institution: String,
    pub year_of_completion: i32,
    #[serde(default)]
    pub grade: Option<String>,
}

impl Education {
    pub fn new(
        degree: Degree,
        field: impl Into<String>,
        institution: impl Into<String>,
        year_of_completion: i32,
    ) -> Self {
        Self {
            degree,
            field: field.into(),
            institution: institution.into(),
            year_of_completion,
            grade: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: NaiveDate,
    /// Must not be earlier than `start_date`
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl WorkExperience {
    pub fn new(
        position: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            position: position.into(),
            company: company.into(),
            location: location.into(),
            start_date,
            end_date: None,
            is_current: false,
            description: None,
            achievements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: SkillLevel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuing_organization: String,
    pub issue_date: NaiveDate,
    /// Must not be earlier than `issue_date`
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

impl Certification {
    pub fn new(
        name: impl Into<String>,
        issuing_organization: impl Into<String>,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            issuing_organization: issuing_organization.into(),
            issue_date,
            expiry_date: None,
            credential_id: None,
            credential_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredLocation {
    pub city: String,
    pub state: String,
    #[serde(default = "default_country")]
    pub country: String,
}

impl PreferredLocation {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            country: default_country(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectedSalary {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub period: SalaryPeriod,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPreferences {
    #[serde(default)]
    pub preferred_locations: Vec<PreferredLocation>,
    #[serde(default)]
    pub preferred_job_types: BTreeSet<JobType>,
    #[serde(default)]
    pub preferred_shifts: BTreeSet<Shift>,
    #[serde(default)]
    pub expected_salary: ExpectedSalary,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub willing_to_relocate: bool,
    #[serde(default)]
    pub remote_work_preference: RemoteWorkPreference,
}

/// Uploaded file descriptor (resume, cover letter)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
    /// Identifier assigned by the file storage
    #[serde(default)]
    pub storage_id: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

impl Document {
    /// Descriptor for a freshly uploaded file
    pub fn uploaded(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            filename: Some(filename.into()),
            uploaded_at: Some(Utc::now()),
            storage_id: None,
            size_bytes: None,
        }
    }

    pub fn has_url(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: PortfolioKind,
}

impl PortfolioItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: url.into(),
            kind: PortfolioKind::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    #[serde(default = "default_true")]
    pub show_contact_info: bool,
    #[serde(default)]
    pub show_current_salary: bool,
    #[serde(default = "default_true")]
    pub show_profile_to_employers: bool,
    #[serde(default = "default_true")]
    pub allow_direct_messages: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            show_contact_info: true,
            show_current_salary: false,
            show_profile_to_employers: true,
            allow_direct_messages: true,
        }
    }
}

/// Engagement counters, maintained by other parts of the platform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    #[serde(default)]
    pub profile_views: u64,
    #[serde(default)]
    pub applications_submitted: u64,
    #[serde(default)]
    pub interviews_scheduled: u64,
    #[serde(default)]
    pub jobs_offered: u64,
}

/// Which counter in [`ProfileStats`] to bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    ProfileViews,
    ApplicationsSubmitted,
    InterviewsScheduled,
    JobsOffered,
}

impl ProfileStats {
    /// Counters only ever go up.
    pub fn increment(&mut self, kind: StatKind) {
        let counter = match kind {
            StatKind::ProfileViews => &mut self.profile_views,
            StatKind::ApplicationsSubmitted => &mut self.applications_submitted,
            StatKind::InterviewsScheduled => &mut self.interviews_scheduled,
            StatKind::JobsOffered => &mut self.jobs_offered,
        };
        *counter = counter.saturating_add(1);
    }
}

fn default_true() -> bool {
    true
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}
