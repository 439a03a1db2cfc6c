use async_trait::async_trait;

use crate::errors::LumenResult;
use crate::models::UserProfile;

/// Read access to the user-profile store.
#[async_trait]
pub trait IProfileStore: Send + Sync {
    async fn user_profile(&self, user_id: &str) -> LumenResult<UserProfile>;
}
