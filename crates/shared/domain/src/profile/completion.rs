//! Profile completion scoring.
//!
//! Ten equally weighted checks, ten points each. The score is a pure
//! function of the record and of whether the owner has a profile image.

use serde::Serialize;

use crate::constants::{COMPLETION_CHECK_COUNT, COMPLETION_STEP};

use super::JobSeekerProfile;

/// One of the ten completion checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionCheck {
    Title,
    Bio,
    Specializations,
    ExperienceYears,
    Education,
    WorkExperience,
    Skills,
    PreferredLocations,
    Resume,
    ProfileImage,
}

impl CompletionCheck {
    pub const ALL: [CompletionCheck; COMPLETION_CHECK_COUNT] = [
        CompletionCheck::Title,
        CompletionCheck::Bio,
        CompletionCheck::Specializations,
        CompletionCheck::ExperienceYears,
        CompletionCheck::Education,
        CompletionCheck::WorkExperience,
        CompletionCheck::Skills,
        CompletionCheck::PreferredLocations,
        CompletionCheck::Resume,
        CompletionCheck::ProfileImage,
    ];

    /// Hint shown to the job seeker when the check is not met
    pub fn hint(&self) -> &'static str {
        match self {
            CompletionCheck::Title => "Add a professional title",
            CompletionCheck::Bio => "Write a short bio",
            CompletionCheck::Specializations => "Pick at least one specialization",
            CompletionCheck::ExperienceYears => "State your total years of experience",
            CompletionCheck::Education => "Add your education",
            CompletionCheck::WorkExperience => "Add your work history",
            CompletionCheck::Skills => "List your skills",
            CompletionCheck::PreferredLocations => "Choose preferred job locations",
            CompletionCheck::Resume => "Upload your resume",
            CompletionCheck::ProfileImage => "Upload a profile photo",
        }
    }

    fn is_met(&self, profile: &JobSeekerProfile, owner_has_image: bool) -> bool {
        match self {
            CompletionCheck::Title => has_text(profile.title.as_deref()),
            CompletionCheck::Bio => has_text(profile.bio.as_deref()),
            CompletionCheck::Specializations => !profile.specializations.is_empty(),
            CompletionCheck::ExperienceYears => profile.experience.total_years.is_some(),
            CompletionCheck::Education => !profile.education.is_empty(),
            CompletionCheck::WorkExperience => !profile.work_experience.is_empty(),
            CompletionCheck::Skills => !profile.skills.is_empty(),
            CompletionCheck::PreferredLocations => {
                !profile.job_preferences.preferred_locations.is_empty()
            }
            CompletionCheck::Resume => profile.resume.as_ref().is_some_and(|doc| doc.has_url()),
            CompletionCheck::ProfileImage => owner_has_image,
        }
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// Outcome of every completion check for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    results: [(CompletionCheck, bool); COMPLETION_CHECK_COUNT],
}

impl CompletionReport {
    pub fn evaluate(profile: &JobSeekerProfile, owner_has_image: bool) -> Self {
        Self {
            results: CompletionCheck::ALL.map(|check| (check, check.is_met(profile, owner_has_image))),
        }
    }

    /// 0..=100 in steps of 10
    pub fn percent(&self) -> u8 {
        self.passed().count() as u8 * COMPLETION_STEP
    }

    pub fn is_met(&self, check: CompletionCheck) -> bool {
        self.results
            .iter()
            .any(|(candidate, met)| *candidate == check && *met)
    }

    pub fn passed(&self) -> impl Iterator<Item = CompletionCheck> + '_ {
        self.results.iter().filter(|(_, met)| *met).map(|(check, _)| *check)
    }

    pub fn missing(&self) -> Vec<CompletionCheck> {
        self.results
            .iter()
            .filter(|(_, met)| !*met)
            .map(|(check, _)| *check)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.results.iter().all(|(_, met)| *met)
    }
}
