//! Profile service tests against the in-memory store and directory.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use common::AppError;
use domain::{
    CompletionCheck, Degree, Document, Education, Experience, JobPreferences, PreferredLocation,
    ProfileStats, Skill, Specialization, StatKind, UserIdentity, UserRole, WorkExperience,
};
use profile_service_lib::{
    InMemoryIdentityDirectory, InMemoryProfileStore, ProfileManager, ProfileQuery,
    ProfileRepository, ProfileService, ProfileUpdate,
};

struct Harness {
    store: Arc<InMemoryProfileStore>,
    directory: Arc<InMemoryIdentityDirectory>,
    service: ProfileManager,
}

fn harness() -> Harness {
    let store = Arc::new(InMemoryProfileStore::new());
    let directory = Arc::new(InMemoryIdentityDirectory::new());
    let service = ProfileManager::new(store.clone(), directory.clone());
    Harness {
        store,
        directory,
        service,
    }
}

fn job_seeker(image: Option<&str>) -> UserIdentity {
    UserIdentity {
        id: Uuid::new_v4(),
        email: "asha@example.com".to_string(),
        first_name: "Asha".to_string(),
        last_name: "Pillai".to_string(),
        profile_image: image.map(str::to_string),
        role: UserRole::JobSeeker,
        is_active: true,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn full_update(city: &str, years: f64) -> ProfileUpdate {
    ProfileUpdate {
        title: Some("Staff Nurse".to_string()),
        bio: Some("Critical care nurse.".to_string()),
        specializations: Some(BTreeSet::from([Specialization::Nursing])),
        experience: Some(Experience {
            total_years: Some(years),
            ..Experience::default()
        }),
        education: Some(vec![Education::new(
            Degree::BscNursing,
            "Nursing",
            "Government College of Nursing",
            2015,
        )]),
        work_experience: Some(vec![WorkExperience::new(
            "Staff Nurse",
            "City Hospital",
            city,
            date(2016, 1, 1),
        )]),
        skills: Some(vec![Skill::new("Triage")]),
        job_preferences: Some(JobPreferences {
            preferred_locations: vec![PreferredLocation::new(city, "Kerala")],
            ..JobPreferences::default()
        }),
        resume: Some(Some(Document::uploaded(
            "https://files.example.com/resume.pdf",
            "resume.pdf",
        ))),
        ..ProfileUpdate::default()
    }
}

#[tokio::test]
async fn test_full_profile_reaches_one_hundred() {
    let h = harness();
    let user = job_seeker(Some("https://cdn.example.com/asha.png"));
    h.directory.upsert(user.clone()).await;

    assert_ok!(h.service.create_profile(user.id).await);
    let profile = assert_ok!(h.service.update_profile(user.id, full_update("Kochi", 6.0)).await);

    assert_eq!(profile.profile_completion(), 100);
    let report = assert_ok!(h.service.completion_report(user.id).await);
    assert!(report.is_complete());
    assert!(report.missing().is_empty());
}

#[tokio::test]
async fn test_removing_profile_image_lowers_score_on_refresh() {
    let h = harness();
    let user = job_seeker(Some("https://cdn.example.com/asha.png"));
    h.directory.upsert(user.clone()).await;

    assert_ok!(h.service.create_profile(user.id).await);
    assert_ok!(h.service.update_profile(user.id, full_update("Kochi", 6.0)).await);

    assert_ok!(h.directory.set_profile_image(user.id, None).await);
    let stored = assert_ok!(h.service.get_profile(user.id).await);
    assert_eq!(stored.profile_completion(), 100);

    let refreshed = assert_ok!(h.service.refresh_completion(user.id).await);
    assert_eq!(refreshed.profile_completion(), 90);

    let report = assert_ok!(h.service.completion_report(user.id).await);
    assert_eq!(report.missing(), vec![CompletionCheck::ProfileImage]);
}

#[tokio::test]
async fn test_owner_can_remove_uploaded_resume() {
    let h = harness();
    let user = job_seeker(Some("https://cdn.example.com/asha.png"));
    h.directory.upsert(user.clone()).await;

    assert_ok!(h.service.create_profile(user.id).await);
    assert_ok!(h.service.update_profile(user.id, full_update("Kochi", 6.0)).await);

    let removal = ProfileUpdate {
        resume: Some(None),
        ..ProfileUpdate::default()
    };
    let profile = assert_ok!(h.service.update_profile(user.id, removal).await);

    assert!(profile.resume.is_none());
    assert_eq!(profile.profile_completion(), 90);
    let report = assert_ok!(h.service.completion_report(user.id).await);
    assert_eq!(report.missing(), vec![CompletionCheck::Resume]);
}

#[tokio::test]
async fn test_rejected_update_leaves_stored_profile_untouched() {
    let h = harness();
    let user = job_seeker(None);
    h.directory.upsert(user.clone()).await;
    assert_ok!(h.service.create_profile(user.id).await);

    let bad = ProfileUpdate {
        title: Some("Nurse".to_string()),
        experience: Some(Experience {
            total_years: Some(51.0),
            ..Experience::default()
        }),
        ..ProfileUpdate::default()
    };
    let err = assert_err!(h.service.update_profile(user.id, bad).await);
    assert!(matches!(err, AppError::Validation(ref v) if v.field == "experience.totalYears"));

    let stored = assert_ok!(h.service.get_profile(user.id).await);
    assert_eq!(stored.title, None);
    assert_eq!(stored.profile_completion(), 0);
}

#[tokio::test]
async fn test_stats_survive_profile_edits() {
    let h = harness();
    let user = job_seeker(None);
    h.directory.upsert(user.clone()).await;
    assert_ok!(h.service.create_profile(user.id).await);

    assert_ok!(h.store.increment_stat(user.id, StatKind::ProfileViews).await);
    assert_ok!(h.store.increment_stat(user.id, StatKind::ProfileViews).await);
    assert_ok!(h.store.increment_stat(user.id, StatKind::ApplicationsSubmitted).await);

    let profile = assert_ok!(h.service.update_profile(user.id, full_update("Kochi", 3.0)).await);
    assert_eq!(
        profile.stats,
        ProfileStats {
            profile_views: 2,
            applications_submitted: 1,
            ..ProfileStats::default()
        }
    );
}

#[tokio::test]
async fn test_search_filters_and_excludes_retired() {
    let h = harness();
    let kochi = job_seeker(None);
    let pune = job_seeker(None);
    let junior = job_seeker(None);
    for user in [&kochi, &pune, &junior] {
        h.directory.upsert(user.clone()).await;
        assert_ok!(h.service.create_profile(user.id).await);
    }
    assert_ok!(h.service.update_profile(kochi.id, full_update("Kochi", 8.0)).await);
    assert_ok!(h.service.update_profile(pune.id, full_update("Pune", 12.0)).await);
    assert_ok!(h.service.update_profile(junior.id, full_update("Kochi", 1.0)).await);

    let query = ProfileQuery {
        specialization: Some(Specialization::Nursing),
        min_years: Some(5.0),
        city: Some("Kochi".to_string()),
        ..ProfileQuery::default()
    };
    let found = assert_ok!(h.service.search_profiles(query.clone()).await);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].user_id, kochi.id);

    assert_ok!(h.directory.deactivate(kochi.id).await);
    let retired = assert_ok!(h.service.retire_profile(kochi.id).await);
    assert!(retired.is_retired());

    let found = assert_ok!(h.service.search_profiles(query).await);
    assert!(found.is_empty());

    let err = assert_err!(h.service.update_profile(kochi.id, ProfileUpdate::default()).await);
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[tokio::test]
async fn test_deactivated_user_cannot_create_profile() {
    let h = harness();
    let user = job_seeker(None);
    h.directory.upsert(user.clone()).await;
    assert_ok!(h.directory.deactivate(user.id).await);

    let err = assert_err!(h.service.create_profile(user.id).await);
    assert!(matches!(err, AppError::Forbidden(_)));
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn test_concurrent_creates_for_distinct_users() {
    let h = harness();
    let users: Vec<_> = (0..8).map(|_| job_seeker(None)).collect();
    for user in &users {
        h.directory.upsert(user.clone()).await;
    }

    let results = join_all(users.iter().map(|u| h.service.create_profile(u.id))).await;

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(h.store.len().await, users.len());
}
