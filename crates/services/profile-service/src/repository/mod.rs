//! Repository layer for profile storage.

mod memory;
mod profile_repository;

pub use memory::InMemoryProfileStore;
pub use profile_repository::{ProfileQuery, ProfileRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
