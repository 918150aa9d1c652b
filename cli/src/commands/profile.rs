//! `lifemate profile check`

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use domain::{JobSeekerProfile, ValidationError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    valid: bool,
    violations: Vec<ValidationError>,
    profile_completion: u8,
    missing: Vec<&'static str>,
}

/// Print the check report as JSON; fails when the document is invalid.
pub fn check(path: &Path, profile_image: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let mut profile: JobSeekerProfile = serde_json::from_str(&raw)?;
    profile.normalize();

    let violations = profile.violations();
    let completion = profile.completion_report(profile_image);
    let report = CheckReport {
        valid: violations.is_empty(),
        profile_completion: completion.percent(),
        missing: completion.missing().iter().map(|check| check.hint()).collect(),
        violations,
    };
    info!(
        path = %path.display(),
        valid = report.valid,
        completion = report.profile_completion,
        "Profile checked"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.valid {
        Ok(())
    } else {
        Err(format!("{} validation error(s)", report.violations.len()).into())
    }
}
