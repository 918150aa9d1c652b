//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the job-seeker profile, its closed vocabularies, the field validation
//! schema and the completion score.

pub mod constants;
pub mod error;
pub mod profile;
pub mod schema;
pub mod user;
pub mod vocabulary;

pub use constants::*;
pub use error::{DomainError, DomainResult, ValidationError};
pub use profile::{
    Certification, CompletionCheck, CompletionReport, Document, Education, ExpectedSalary,
    Experience, JobPreferences, JobSeekerProfile, PortfolioItem, PreferredLocation,
    PrivacySettings, ProfileStats, Skill, StatKind, ValidatedProfile, WorkExperience,
};
pub use schema::{Constraint, FieldRule, FieldValue, Schema};
pub use user::{UserIdentity, UserRole};
pub use vocabulary::{
    Availability, Currency, Degree, JobType, PortfolioKind, RemoteWorkPreference, SalaryPeriod,
    Shift, SkillLevel, Specialization,
};
