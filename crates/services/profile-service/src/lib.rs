//! Profile Service Library
//!
//! Write path and queries for job-seeker profiles. Storage and identity
//! lookups are collaborators behind traits; in-memory implementations of
//! both are provided for tools and tests.

pub mod client;
pub mod repository;
pub mod service;

pub use client::{IdentityClient, InMemoryIdentityDirectory};
pub use repository::{InMemoryProfileStore, ProfileQuery, ProfileRepository};
pub use service::{ProfileManager, ProfileService, ProfileUpdate};
