//! Profile repository contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use common::AppResult;
use domain::{JobSeekerProfile, ProfileStats, Specialization, StatKind, ValidatedProfile};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Filters over the indexed profile fields. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileQuery {
    pub specialization: Option<Specialization>,
    /// Inclusive lower bound on `experience.totalYears`
    pub min_years: Option<f64>,
    /// Inclusive upper bound on `experience.totalYears`
    pub max_years: Option<f64>,
    /// Matches any preferred location with this city
    pub city: Option<String>,
    /// Matches any preferred location with this state
    pub state: Option<String>,
    pub min_completion: Option<u8>,
}

impl ProfileQuery {
    /// Retired profiles never match.
    pub fn matches(&self, profile: &JobSeekerProfile) -> bool {
        if profile.is_retired() {
            return false;
        }
        if let Some(specialization) = self.specialization {
            if !profile.specializations.contains(&specialization) {
                return false;
            }
        }
        if self.min_years.is_some() || self.max_years.is_some() {
            let Some(years) = profile.experience.total_years else {
                return false;
            };
            if self.min_years.is_some_and(|min| years < min)
                || self.max_years.is_some_and(|max| years > max)
            {
                return false;
            }
        }

        let locations = &profile.job_preferences.preferred_locations;
        if let Some(city) = self.city.as_deref() {
            if !locations.iter().any(|place| place.city == city) {
                return false;
            }
        }
        if let Some(state) = self.state.as_deref() {
            if !locations.iter().any(|place| place.state == state) {
                return false;
            }
        }

        self.min_completion
            .map_or(true, |min| profile.profile_completion() >= min)
    }
}

/// Profile repository trait for dependency injection.
///
/// Writes take a [`ValidatedProfile`], so nothing reaches storage without
/// passing the profile pre-commit hook. Concurrent writes to the same
/// profile are last-write-wins.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<JobSeekerProfile>>;

    /// Store a new profile; fails with `Duplicate` if the user already has one
    async fn insert(&self, profile: ValidatedProfile) -> AppResult<JobSeekerProfile>;

    /// Replace an existing profile. Stored `stats` and `created_at` are kept.
    async fn update(&self, profile: ValidatedProfile) -> AppResult<JobSeekerProfile>;

    /// Profiles matching every set filter
    async fn search(&self, query: &ProfileQuery) -> AppResult<Vec<JobSeekerProfile>>;

    /// Bump one engagement counter (used by other parts of the platform)
    async fn increment_stat(&self, user_id: Uuid, stat: StatKind) -> AppResult<ProfileStats>;

    /// Mark a profile retired; retiring twice keeps the first timestamp
    async fn retire(&self, user_id: Uuid, at: DateTime<Utc>) -> AppResult<JobSeekerProfile>;
}
