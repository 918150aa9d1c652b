//! Clients for collaborating services.

mod identity_client;

pub use identity_client::{IdentityClient, InMemoryIdentityDirectory};

#[cfg(any(test, feature = "test-utils"))]
pub use identity_client::MockIdentityClient;
