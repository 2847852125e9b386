//! Pack resources.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`pack`](FreesoundClient::pack) | `/packs/{id}` |
//! | [`pack_sounds`](FreesoundClient::pack_sounds) | `/packs/{id}/sounds` |

use crate::client::FreesoundClient;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

impl FreesoundClient {
    /// Get a pack by id.
    pub fn pack(&self, pack_id: u64) -> Result<Value> {
        self.request(&format!("/packs/{pack_id}"), Params::new())
    }

    /// List the sounds in a pack.
    pub fn pack_sounds(&self, pack_id: u64, params: Params) -> Result<Value> {
        self.request(&format!("/packs/{pack_id}/sounds"), params)
    }
}
