//! Business logic layer.

mod profile_service;

pub use profile_service::{ProfileManager, ProfileService, ProfileUpdate};
