//! Identity lookups for profile owners.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::UserIdentity;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Trait for the user lookups needed by the profile service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Resolve a user id to the identity that owns it
    async fn find_user(&self, user_id: Uuid) -> AppResult<Option<UserIdentity>>;
}

/// Identity directory held in memory, for tools and tests.
#[derive(Debug, Default)]
pub struct InMemoryIdentityDirectory {
    users: RwLock<HashMap<Uuid, UserIdentity>>,
}

impl InMemoryIdentityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user
    pub async fn upsert(&self, user: UserIdentity) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn set_profile_image(&self, user_id: Uuid, url: Option<String>) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&user_id).ok_or(AppError::NotFound)?;
        user.profile_image = url;
        Ok(())
    }

    pub async fn deactivate(&self, user_id: Uuid) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&user_id).ok_or(AppError::NotFound)?;
        user.is_active = false;
        Ok(())
    }
}

#[async_trait]
impl IdentityClient for InMemoryIdentityDirectory {
    async fn find_user(&self, user_id: Uuid) -> AppResult<Option<UserIdentity>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }
}
