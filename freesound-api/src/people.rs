//! User resources.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`user`](FreesoundClient::user) | `/people/{username}` |
//! | [`user_sounds`](FreesoundClient::user_sounds) | `/people/{username}/sounds` |
//! | [`user_packs`](FreesoundClient::user_packs) | `/people/{username}/packs` |
//! | [`user_bookmark_categories`](FreesoundClient::user_bookmark_categories) | `/people/{username}/bookmark_categories` |
//! | [`user_bookmark_category_sounds`](FreesoundClient::user_bookmark_category_sounds) | `/people/{username}/bookmark_categories/{categoryId}/sounds` |

use crate::client::FreesoundClient;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

impl FreesoundClient {
    /// Get a user profile by username.
    pub fn user(&self, username: &str) -> Result<Value> {
        self.request(&format!("/people/{username}"), Params::new())
    }

    /// List a user's sounds.
    pub fn user_sounds(&self, username: &str, params: Params) -> Result<Value> {
        self.request(&format!("/people/{username}/sounds"), params)
    }

    /// List a user's packs.
    pub fn user_packs(&self, username: &str) -> Result<Value> {
        self.request(&format!("/people/{username}/packs"), Params::new())
    }

    /// List a user's bookmark categories.
    pub fn user_bookmark_categories(&self, username: &str) -> Result<Value> {
        self.request(&format!("/people/{username}/bookmark_categories"), Params::new())
    }

    /// List the sounds in one of a user's bookmark categories.
    pub fn user_bookmark_category_sounds(
        &self,
        username: &str,
        category_id: u64,
        params: Params,
    ) -> Result<Value> {
        self.request(
            &format!("/people/{username}/bookmark_categories/{category_id}/sounds"),
            params,
        )
    }
}
