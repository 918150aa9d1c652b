//! Profile service - Handles job-seeker profile use cases.
//!
//! Every write loads the owner, applies the change, runs the profile
//! pre-commit hook and only then persists.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    Certification, CompletionReport, Document, Education, Experience, JobPreferences,
    JobSeekerProfile, PortfolioItem, PrivacySettings, Skill, Specialization, UserIdentity,
    WorkExperience,
};

use crate::client::IdentityClient;
use crate::repository::{ProfileQuery, ProfileRepository};

/// Partial profile edit. Each `Some` section replaces the stored one.
///
/// `resume` and `coverLetter` are tri-state: absent keeps the stored
/// document, `null` removes it, a value replaces it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub title: Option<String>,
    pub bio: Option<String>,
    pub specializations: Option<BTreeSet<Specialization>>,
    pub experience: Option<Experience>,
    pub education: Option<Vec<Education>>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub skills: Option<Vec<Skill>>,
    pub certifications: Option<Vec<Certification>>,
    pub job_preferences: Option<JobPreferences>,
    #[serde(default, deserialize_with = "present")]
    pub resume: Option<Option<Document>>,
    #[serde(default, deserialize_with = "present")]
    pub cover_letter: Option<Option<Document>>,
    pub portfolio: Option<Vec<PortfolioItem>>,
    pub privacy_settings: Option<PrivacySettings>,
}

/// Distinguishes an explicit `null` from a missing key
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProfileUpdate {
    /// Blank `title`/`bio` clear the field once the profile is normalized.
    pub fn apply(self, profile: &mut JobSeekerProfile) {
        if let Some(title) = self.title {
            profile.title = Some(title);
        }
        if let Some(bio) = self.bio {
            profile.bio = Some(bio);
        }
        if let Some(specializations) = self.specializations {
            profile.specializations = specializations;
        }
        if let Some(experience) = self.experience {
            profile.experience = experience;
        }
        if let Some(education) = self.education {
            profile.education = education;
        }
        if let Some(work_experience) = self.work_experience {
            profile.work_experience = work_experience;
        }
        if let Some(skills) = self.skills {
            profile.skills = skills;
        }
        if let Some(certifications) = self.certifications {
            profile.certifications = certifications;
        }
        if let Some(job_preferences) = self.job_preferences {
            profile.job_preferences = job_preferences;
        }
        if let Some(resume) = self.resume {
            profile.resume = resume;
        }
        if let Some(cover_letter) = self.cover_letter {
            profile.cover_letter = cover_letter;
        }
        if let Some(portfolio) = self.portfolio {
            profile.portfolio = portfolio;
        }
        if let Some(privacy_settings) = self.privacy_settings {
            profile.privacy_settings = privacy_settings;
        }
    }
}

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Create the empty profile of a newly registered job seeker
    async fn create_profile(&self, user_id: Uuid) -> AppResult<JobSeekerProfile>;

    /// Get the profile owned by a user
    async fn get_profile(&self, user_id: Uuid) -> AppResult<JobSeekerProfile>;

    /// Apply an edit by the owning user
    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate)
        -> AppResult<JobSeekerProfile>;

    /// Re-run the write hook after the owner's identity changed
    async fn refresh_completion(&self, user_id: Uuid) -> AppResult<JobSeekerProfile>;

    /// Per-check breakdown of the completion score
    async fn completion_report(&self, user_id: Uuid) -> AppResult<CompletionReport>;

    /// Find active profiles by indexed fields
    async fn search_profiles(&self, query: ProfileQuery) -> AppResult<Vec<JobSeekerProfile>>;

    /// Retire the profile of a deactivated user
    async fn retire_profile(&self, user_id: Uuid) -> AppResult<JobSeekerProfile>;
}

/// Concrete implementation of ProfileService using repository.
pub struct ProfileManager {
    repo: Arc<dyn ProfileRepository>,
    identities: Arc<dyn IdentityClient>,
}

impl ProfileManager {
    /// Create new profile service instance
    pub fn new(repo: Arc<dyn ProfileRepository>, identities: Arc<dyn IdentityClient>) -> Self {
        Self { repo, identities }
    }

    async fn owner(&self, user_id: Uuid) -> AppResult<UserIdentity> {
        self.identities.find_user(user_id).await?.ok_or_not_found()
    }

    async fn editable_profile(&self, user_id: Uuid) -> AppResult<JobSeekerProfile> {
        let profile = self.repo.find_by_user(user_id).await?.ok_or_not_found()?;
        if profile.is_retired() {
            return Err(AppError::forbidden("profile is retired"));
        }
        Ok(profile)
    }

    /// Pre-commit hook then persist
    async fn commit(
        &self,
        profile: JobSeekerProfile,
        owner: &UserIdentity,
    ) -> AppResult<JobSeekerProfile> {
        let prepared = profile.prepare_for_write(owner).map_err(|err| {
            warn!(user_id = %owner.id, error = %err, "Profile write rejected");
            AppError::from(err)
        })?;

        let saved = self.repo.update(prepared).await?;
        info!(
            user_id = %saved.user_id,
            completion = saved.profile_completion(),
            "Profile saved"
        );
        Ok(saved)
    }
}

#[async_trait]
impl ProfileService for ProfileManager {
    async fn create_profile(&self, user_id: Uuid) -> AppResult<JobSeekerProfile> {
        let owner = self.owner(user_id).await?;
        if !owner.is_active {
            return Err(AppError::forbidden("user is deactivated"));
        }
        if !owner.role.is_job_seeker() {
            return Err(AppError::forbidden("only job seekers have a profile"));
        }

        if self.repo.find_by_user(user_id).await?.is_some() {
            return Err(AppError::duplicate(user_id));
        }

        let prepared = JobSeekerProfile::new(user_id).prepare_for_write(&owner)?;
        let profile = self.repo.insert(prepared).await?;
        info!(%user_id, profile_id = %profile.id, "Profile created");
        Ok(profile)
    }

    async fn get_profile(&self, user_id: Uuid) -> AppResult<JobSeekerProfile> {
        self.repo.find_by_user(user_id).await?.ok_or_not_found()
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> AppResult<JobSeekerProfile> {
        let owner = self.owner(user_id).await?;
        let mut profile = self.editable_profile(user_id).await?;
        update.apply(&mut profile);
        self.commit(profile, &owner).await
    }

    async fn refresh_completion(&self, user_id: Uuid) -> AppResult<JobSeekerProfile> {
        let owner = self.owner(user_id).await?;
        let profile = self.editable_profile(user_id).await?;
        self.commit(profile, &owner).await
    }

    async fn completion_report(&self, user_id: Uuid) -> AppResult<CompletionReport> {
        let owner = self.owner(user_id).await?;
        let profile = self.get_profile(user_id).await?;
        Ok(profile.completion_report(owner.has_profile_image()))
    }

    async fn search_profiles(&self, query: ProfileQuery) -> AppResult<Vec<JobSeekerProfile>> {
        self.repo.search(&query).await
    }

    async fn retire_profile(&self, user_id: Uuid) -> AppResult<JobSeekerProfile> {
        let profile = self.repo.retire(user_id, Utc::now()).await?;
        info!(%user_id, "Profile retired");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockIdentityClient;
    use crate::repository::MockProfileRepository;
    use domain::UserRole;
    use mockall::predicate::eq;

    fn identity(user_id: Uuid, role: UserRole) -> UserIdentity {
        UserIdentity {
            id: user_id,
            email: "leela@example.com".to_string(),
            first_name: "Leela".to_string(),
            last_name: "Nair".to_string(),
            profile_image: Some("https://cdn.example.com/leela.png".to_string()),
            role,
            is_active: true,
        }
    }

    fn identities_with(user: UserIdentity) -> MockIdentityClient {
        let mut identities = MockIdentityClient::new();
        identities
            .expect_find_user()
            .with(eq(user.id))
            .returning(move |_| Ok(Some(user.clone())));
        identities
    }

    #[test]
    fn test_update_deserializes_camel_case_sections() {
        let update: ProfileUpdate = serde_json::from_value(serde_json::json!({
            "title": "Pharmacist",
            "specializations": ["Pharmacy"],
            "experience": { "totalYears": 4 },
            "jobPreferences": { "preferredLocations": [{ "city": "Pune", "state": "Maharashtra" }] }
        }))
        .unwrap();

        let mut profile = JobSeekerProfile::new(Uuid::new_v4());
        update.apply(&mut profile);

        assert_eq!(profile.title.as_deref(), Some("Pharmacist"));
        assert!(profile.specializations.contains(&Specialization::Pharmacy));
        assert_eq!(profile.experience.total_years, Some(4.0));
        assert!(profile.experience.is_currently_employed);
        assert_eq!(profile.job_preferences.preferred_locations[0].country, "India");
        assert_eq!(profile.bio, None);
    }

    #[test]
    fn test_null_document_removes_it_and_missing_key_keeps_it() {
        let mut profile = JobSeekerProfile::new(Uuid::new_v4());
        profile.resume = Some(Document::uploaded("https://files.example.com/cv.pdf", "cv.pdf"));
        profile.cover_letter = Some(Document::uploaded("https://files.example.com/cl.pdf", "cl.pdf"));

        let update: ProfileUpdate =
            serde_json::from_value(serde_json::json!({ "coverLetter": null })).unwrap();
        assert!(update.resume.is_none());
        assert!(matches!(update.cover_letter, Some(None)));

        update.apply(&mut profile);
        assert!(profile.resume.is_some());
        assert!(profile.cover_letter.is_none());
    }

    #[tokio::test]
    async fn test_create_profile_rejects_duplicate() {
        let user_id = Uuid::new_v4();
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_user()
            .returning(|id| Ok(Some(JobSeekerProfile::new(id))));
        repo.expect_insert().never();

        let service = ProfileManager::new(
            Arc::new(repo),
            Arc::new(identities_with(identity(user_id, UserRole::JobSeeker))),
        );
        let result = service.create_profile(user_id).await;

        assert!(matches!(result, Err(AppError::Duplicate { user_id: id }) if id == user_id));
    }

    #[tokio::test]
    async fn test_create_profile_scores_profile_image() {
        let user_id = Uuid::new_v4();
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_user().returning(|_| Ok(None));
        repo.expect_insert()
            .times(1)
            .returning(|prepared| Ok(prepared.into_inner()));

        let service = ProfileManager::new(
            Arc::new(repo),
            Arc::new(identities_with(identity(user_id, UserRole::JobSeeker))),
        );
        let profile = service.create_profile(user_id).await.unwrap();

        assert_eq!(profile.user_id, user_id);
        assert_eq!(profile.profile_completion(), 10);
    }

    #[tokio::test]
    async fn test_create_profile_requires_job_seeker_role() {
        let user_id = Uuid::new_v4();
        let mut repo = MockProfileRepository::new();
        repo.expect_insert().never();

        let service = ProfileManager::new(
            Arc::new(repo),
            Arc::new(identities_with(identity(user_id, UserRole::Employer))),
        );
        let result = service.create_profile(user_id).await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_create_profile_unknown_user() {
        let mut identities = MockIdentityClient::new();
        identities.expect_find_user().returning(|_| Ok(None));

        let service = ProfileManager::new(
            Arc::new(MockProfileRepository::new()),
            Arc::new(identities),
        );
        let result = service.create_profile(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_invalid_update_is_not_persisted() {
        let user_id = Uuid::new_v4();
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_user()
            .returning(|id| Ok(Some(JobSeekerProfile::new(id))));
        repo.expect_update().never();

        let service = ProfileManager::new(
            Arc::new(repo),
            Arc::new(identities_with(identity(user_id, UserRole::JobSeeker))),
        );
        let update = ProfileUpdate {
            bio: Some("x".repeat(1001)),
            ..ProfileUpdate::default()
        };
        let err = service.update_profile(user_id, update).await.unwrap_err();

        match err {
            AppError::Validation(v) => {
                assert_eq!(v.field, "bio");
                assert_eq!(v.constraint, "max_length(1000)");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_recomputes_completion() {
        let user_id = Uuid::new_v4();
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_user()
            .returning(|id| Ok(Some(JobSeekerProfile::new(id))));
        repo.expect_update()
            .times(1)
            .returning(|prepared| Ok(prepared.into_inner()));

        let service = ProfileManager::new(
            Arc::new(repo),
            Arc::new(identities_with(identity(user_id, UserRole::JobSeeker))),
        );
        let update = ProfileUpdate {
            title: Some("ICU Nurse".to_string()),
            bio: Some("Ten years on night shifts.".to_string()),
            ..ProfileUpdate::default()
        };
        let profile = service.update_profile(user_id, update).await.unwrap();

        assert_eq!(profile.profile_completion(), 30);
    }

    #[tokio::test]
    async fn test_retired_profile_cannot_be_edited() {
        let user_id = Uuid::new_v4();
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_user().returning(|id| {
            let mut profile = JobSeekerProfile::new(id);
            profile.retired_at = Some(Utc::now());
            Ok(Some(profile))
        });
        repo.expect_update().never();

        let service = ProfileManager::new(
            Arc::new(repo),
            Arc::new(identities_with(identity(user_id, UserRole::JobSeeker))),
        );
        let result = service
            .update_profile(user_id, ProfileUpdate::default())
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
