//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Role of users looking for healthcare jobs
pub const ROLE_JOBSEEKER: &str = "jobseeker";

/// Role of organizations posting jobs
pub const ROLE_EMPLOYER: &str = "employer";

/// Platform administrator role
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Profile text limits (characters, after trimming)
// =============================================================================

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_BIO_LENGTH: usize = 1000;
pub const MAX_POSITION_LENGTH: usize = 100;
pub const MAX_COMPANY_LENGTH: usize = 100;
pub const MAX_LOCATION_LENGTH: usize = 100;
pub const MAX_FIELD_OF_STUDY_LENGTH: usize = 100;
pub const MAX_INSTITUTION_LENGTH: usize = 200;
pub const MAX_GRADE_LENGTH: usize = 20;
pub const MAX_WORK_DESCRIPTION_LENGTH: usize = 1000;
pub const MAX_ACHIEVEMENT_LENGTH: usize = 200;
pub const MAX_SKILL_NAME_LENGTH: usize = 50;
pub const MAX_CERTIFICATION_NAME_LENGTH: usize = 100;
pub const MAX_ORGANIZATION_LENGTH: usize = 100;
pub const MAX_CREDENTIAL_ID_LENGTH: usize = 50;
pub const MAX_PLACE_NAME_LENGTH: usize = 50;
pub const MAX_PORTFOLIO_TITLE_LENGTH: usize = 100;
pub const MAX_PORTFOLIO_DESCRIPTION_LENGTH: usize = 500;

// =============================================================================
// Profile numeric limits
// =============================================================================

/// Upper bound for total years of experience
pub const MAX_EXPERIENCE_YEARS: f64 = 50.0;

/// Earliest accepted year of completion for an education entry
pub const MIN_EDUCATION_YEAR: i32 = 1950;

/// How many years into the future a year of completion may lie
pub const EDUCATION_YEAR_LOOKAHEAD: i32 = 5;

// =============================================================================
// Profile defaults
// =============================================================================

/// Country assumed for a preferred location when none is given
pub const DEFAULT_COUNTRY: &str = "India";

// =============================================================================
// Profile completion
// =============================================================================

/// Number of equally weighted completion checks
pub const COMPLETION_CHECK_COUNT: usize = 10;

/// Points contributed by each satisfied completion check
pub const COMPLETION_STEP: u8 = 10;
