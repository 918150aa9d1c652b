//! In-process profile store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{JobSeekerProfile, ProfileStats, StatKind, ValidatedProfile};

use super::profile_repository::{ProfileQuery, ProfileRepository};

/// Profiles keyed by owning user id, held in memory.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, JobSeekerProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<JobSeekerProfile>> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn insert(&self, profile: ValidatedProfile) -> AppResult<JobSeekerProfile> {
        let user_id = profile.user_id();
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(&user_id) {
            return Err(AppError::duplicate(user_id));
        }

        let profile = profile.into_inner();
        profiles.insert(user_id, profile.clone());
        Ok(profile)
    }

    async fn update(&self, profile: ValidatedProfile) -> AppResult<JobSeekerProfile> {
        let user_id = profile.user_id();
        let mut profiles = self.profiles.write().await;
        let stored = profiles.get_mut(&user_id).ok_or(AppError::NotFound)?;

        let mut profile = profile.into_inner();
        profile.id = stored.id;
        profile.created_at = stored.created_at;
        profile.stats = stored.stats;
        profile.retired_at = stored.retired_at;

        *stored = profile.clone();
        Ok(profile)
    }

    async fn search(&self, query: &ProfileQuery) -> AppResult<Vec<JobSeekerProfile>> {
        let profiles = self.profiles.read().await;
        let mut matches: Vec<_> = profiles
            .values()
            .filter(|profile| query.matches(profile))
            .cloned()
            .collect();
        // Most complete first, then oldest first for a stable order
        matches.sort_by(|a, b| {
            b.profile_completion()
                .cmp(&a.profile_completion())
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(matches)
    }

    async fn increment_stat(&self, user_id: Uuid, stat: StatKind) -> AppResult<ProfileStats> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.get_mut(&user_id).ok_or(AppError::NotFound)?;
        profile.stats.increment(stat);
        Ok(profile.stats)
    }

    async fn retire(&self, user_id: Uuid, at: DateTime<Utc>) -> AppResult<JobSeekerProfile> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.get_mut(&user_id).ok_or(AppError::NotFound)?;
        if profile.retired_at.is_none() {
            profile.retired_at = Some(at);
            profile.updated_at = at;
        }
        Ok(profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{PreferredLocation, Specialization, UserIdentity, UserRole};

    fn owner(user_id: Uuid) -> UserIdentity {
        UserIdentity {
            id: user_id,
            email: "ravi@example.com".to_string(),
            first_name: "Ravi".to_string(),
            last_name: "Menon".to_string(),
            profile_image: None,
            role: UserRole::JobSeeker,
            is_active: true,
        }
    }

    fn prepared(profile: JobSeekerProfile) -> ValidatedProfile {
        let me = owner(profile.user_id);
        profile.prepare_for_write(&me).unwrap()
    }

    #[tokio::test]
    async fn test_insert_rejects_second_profile_for_user() {
        let store = InMemoryProfileStore::new();
        let user_id = Uuid::new_v4();

        store.insert(prepared(JobSeekerProfile::new(user_id))).await.unwrap();
        let err = store
            .insert(prepared(JobSeekerProfile::new(user_id)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Duplicate { user_id: id } if id == user_id));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_keeps_stats_and_identity() {
        let store = InMemoryProfileStore::new();
        let user_id = Uuid::new_v4();
        let created = store.insert(prepared(JobSeekerProfile::new(user_id))).await.unwrap();
        store.increment_stat(user_id, StatKind::ProfileViews).await.unwrap();

        // An edit built from a stale copy must not roll the counter back
        let mut stale = created.clone();
        stale.id = Uuid::new_v4();
        stale.title = Some("Radiographer".to_string());
        let updated = store.update(prepared(stale)).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.stats.profile_views, 1);
        assert_eq!(updated.title.as_deref(), Some("Radiographer"));
        assert_eq!(updated.profile_completion(), 10);
    }

    #[tokio::test]
    async fn test_update_unknown_user_is_not_found() {
        let store = InMemoryProfileStore::new();
        let result = store.update(prepared(JobSeekerProfile::new(Uuid::new_v4()))).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_search_filters_and_skips_retired() {
        let store = InMemoryProfileStore::new();

        let cardiologist = Uuid::new_v4();
        let mut profile = JobSeekerProfile::new(cardiologist);
        profile.specializations.insert(Specialization::Cardiology);
        profile.experience.total_years = Some(8.0);
        profile
            .job_preferences
            .preferred_locations
            .push(PreferredLocation::new("Kochi", "Kerala"));
        store.insert(prepared(profile)).await.unwrap();

        let retired = Uuid::new_v4();
        let mut profile = JobSeekerProfile::new(retired);
        profile.specializations.insert(Specialization::Cardiology);
        store.insert(prepared(profile)).await.unwrap();
        store.retire(retired, Utc::now()).await.unwrap();

        let query = ProfileQuery {
            specialization: Some(Specialization::Cardiology),
            ..ProfileQuery::default()
        };
        let found = store.search(&query).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user_id, cardiologist);

        let query = ProfileQuery {
            min_years: Some(10.0),
            ..ProfileQuery::default()
        };
        assert!(store.search(&query).await.unwrap().is_empty());

        let query = ProfileQuery {
            state: Some("Kerala".to_string()),
            min_completion: Some(30),
            ..ProfileQuery::default()
        };
        assert_eq!(store.search(&query).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_retire_is_idempotent() {
        let store = InMemoryProfileStore::new();
        let user_id = Uuid::new_v4();
        store.insert(prepared(JobSeekerProfile::new(user_id))).await.unwrap();

        let first = store.retire(user_id, Utc::now()).await.unwrap();
        let second = store.retire(user_id, Utc::now()).await.unwrap();
        assert_eq!(first.retired_at, second.retired_at);
    }
}
