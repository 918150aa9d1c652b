//! Field rules of the job-seeker profile.

use crate::constants::*;
use crate::schema::{Constraint, FieldValue, Schema};

use super::JobSeekerProfile;

use Constraint::{Max, MaxLength, Min, NotBefore, Required};

impl JobSeekerProfile {
    /// Describe every constrained field of this record as a [`Schema`].
    ///
    /// `current_year` bounds `education[].yearOfCompletion`.
    pub fn schema(&self, current_year: i32) -> Schema<'_> {
        let mut schema = Schema::new();

        schema
            .rule("title", FieldValue::text(self.title.as_deref()), [MaxLength(MAX_TITLE_LENGTH)])
            .rule("bio", FieldValue::text(self.bio.as_deref()), [MaxLength(MAX_BIO_LENGTH)]);

        let experience = &self.experience;
        schema
            .rule(
                "experience.totalYears",
                FieldValue::number(experience.total_years),
                [Min(0.0), Max(MAX_EXPERIENCE_YEARS)],
            )
            .rule(
                "experience.currentPosition",
                FieldValue::text(experience.current_position.as_deref()),
                [MaxLength(MAX_POSITION_LENGTH)],
            )
            .rule(
                "experience.currentCompany",
                FieldValue::text(experience.current_company.as_deref()),
                [MaxLength(MAX_COMPANY_LENGTH)],
            );

        let latest_year = f64::from(current_year + EDUCATION_YEAR_LOOKAHEAD);
        for (i, entry) in self.education.iter().enumerate() {
            let path = format!("education[{i}]");
            schema
                .rule(
                    format!("{path}.field"),
                    FieldValue::Text(&entry.field),
                    [Required, MaxLength(MAX_FIELD_OF_STUDY_LENGTH)],
                )
                .rule(
                    format!("{path}.institution"),
                    FieldValue::Text(&entry.institution),
                    [Required, MaxLength(MAX_INSTITUTION_LENGTH)],
                )
                .rule(
                    format!("{path}.yearOfCompletion"),
                    FieldValue::Number(f64::from(entry.year_of_completion)),
                    [Required, Min(f64::from(MIN_EDUCATION_YEAR)), Max(latest_year)],
                )
                .rule(
                    format!("{path}.grade"),
                    FieldValue::text(entry.grade.as_deref()),
                    [MaxLength(MAX_GRADE_LENGTH)],
                );
        }

        for (i, entry) in self.work_experience.iter().enumerate() {
            let path = format!("workExperience[{i}]");
            schema
                .rule(
                    format!("{path}.position"),
                    FieldValue::Text(&entry.position),
                    [Required, MaxLength(MAX_POSITION_LENGTH)],
                )
                .rule(
                    format!("{path}.company"),
                    FieldValue::Text(&entry.company),
                    [Required, MaxLength(MAX_COMPANY_LENGTH)],
                )
                .rule(
                    format!("{path}.location"),
                    FieldValue::Text(&entry.location),
                    [Required, MaxLength(MAX_LOCATION_LENGTH)],
                )
                .rule(
                    format!("{path}.endDate"),
                    FieldValue::date(entry.end_date),
                    [NotBefore(entry.start_date)],
                )
                .rule(
                    format!("{path}.description"),
                    FieldValue::text(entry.description.as_deref()),
                    [MaxLength(MAX_WORK_DESCRIPTION_LENGTH)],
                );
            for (j, achievement) in entry.achievements.iter().enumerate() {
                schema.rule(
                    format!("{path}.achievements[{j}]"),
                    FieldValue::Text(achievement),
                    [MaxLength(MAX_ACHIEVEMENT_LENGTH)],
                );
            }
        }

        for (i, skill) in self.skills.iter().enumerate() {
            schema.rule(
                format!("skills[{i}].name"),
                FieldValue::Text(&skill.name),
                [Required, MaxLength(MAX_SKILL_NAME_LENGTH)],
            );
        }

        for (i, cert) in self.certifications.iter().enumerate() {
            let path = format!("certifications[{i}]");
            schema
                .rule(
                    format!("{path}.name"),
                    FieldValue::Text(&cert.name),
                    [Required, MaxLength(MAX_CERTIFICATION_NAME_LENGTH)],
                )
                .rule(
                    format!("{path}.issuingOrganization"),
                    FieldValue::Text(&cert.issuing_organization),
                    [Required, MaxLength(MAX_ORGANIZATION_LENGTH)],
                )
                .rule(
                    format!("{path}.expiryDate"),
                    FieldValue::date(cert.expiry_date),
                    [NotBefore(cert.issue_date)],
                )
                .rule(
                    format!("{path}.credentialId"),
                    FieldValue::text(cert.credential_id.as_deref()),
                    [MaxLength(MAX_CREDENTIAL_ID_LENGTH)],
                );
        }

        let preferences = &self.job_preferences;
        for (i, place) in preferences.preferred_locations.iter().enumerate() {
            let path = format!("jobPreferences.preferredLocations[{i}]");
            schema
                .rule(
                    format!("{path}.city"),
                    FieldValue::Text(&place.city),
                    [Required, MaxLength(MAX_PLACE_NAME_LENGTH)],
                )
                .rule(
                    format!("{path}.state"),
                    FieldValue::Text(&place.state),
                    [Required, MaxLength(MAX_PLACE_NAME_LENGTH)],
                )
                .rule(
                    format!("{path}.country"),
                    FieldValue::Text(&place.country),
                    [Required, MaxLength(MAX_PLACE_NAME_LENGTH)],
                );
        }
        schema
            .rule(
                "jobPreferences.expectedSalary.min",
                FieldValue::number(preferences.expected_salary.min),
                [Min(0.0)],
            )
            .rule(
                "jobPreferences.expectedSalary.max",
                FieldValue::number(preferences.expected_salary.max),
                [Min(0.0)],
            );

        for (i, item) in self.portfolio.iter().enumerate() {
            let path = format!("portfolio[{i}]");
            schema
                .rule(
                    format!("{path}.title"),
                    FieldValue::Text(&item.title),
                    [Required, MaxLength(MAX_PORTFOLIO_TITLE_LENGTH)],
                )
                .rule(
                    format!("{path}.description"),
                    FieldValue::text(item.description.as_deref()),
                    [MaxLength(MAX_PORTFOLIO_DESCRIPTION_LENGTH)],
                )
                .rule(format!("{path}.url"), FieldValue::Text(&item.url), [Required]);
        }

        schema
    }
}
