//! Minimal user profile shape needed by the pipeline.

use serde::{Deserialize, Serialize};

/// The slice of a user's profile the pipeline grounds answers in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub company_id: String,
    pub role: String,
    /// Free-form attributes the profile store carries (industry, plan, ...).
    #[serde(default)]
    pub metadata: serde_json::Value,
}
