//! Sound resources.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`sound_search`](FreesoundClient::sound_search) | `/sounds/search` |
//! | [`sound_content_search`](FreesoundClient::sound_content_search) | `/sounds/content_search` |
//! | [`sound`](FreesoundClient::sound) | `/sounds/{id}` |
//! | [`sound_geotag`](FreesoundClient::sound_geotag) | `/sounds/geotag/` |
//! | [`sound_analysis`](FreesoundClient::sound_analysis) | `/sounds/{id}/analysis[/{filter}]…` |
//! | [`sound_similar`](FreesoundClient::sound_similar) | `/sounds/{id}/similar` |
//!
//! Identifiers are passed through as-is; an unknown or malformed id is
//! rejected by the service and surfaces as an ordinary
//! [`FreesoundError::Api`](crate::FreesoundError::Api).

use crate::client::FreesoundClient;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

impl FreesoundClient {
    /// Text search over sounds.
    ///
    /// Typical parameters: `q` (query), `f` (filter), `s` (sort), `p`
    /// (page), `fields`, `sounds_per_page`.
    pub fn sound_search(&self, params: Params) -> Result<Value> {
        self.request("/sounds/search", params)
    }

    /// Content-based (audio-feature) search over sounds.
    pub fn sound_content_search(&self, params: Params) -> Result<Value> {
        self.request("/sounds/content_search", params)
    }

    /// Get a single sound by id.
    pub fn sound(&self, sound_id: u64) -> Result<Value> {
        self.request(&format!("/sounds/{sound_id}"), Params::new())
    }

    /// Search sounds by geotag.
    ///
    /// Typical parameters: `min_lat`, `max_lat`, `min_lon`, `max_lon`.
    pub fn sound_geotag(&self, params: Params) -> Result<Value> {
        self.request("/sounds/geotag/", params)
    }

    /// Get the analysis data of a sound.
    ///
    /// `filters` narrows the returned analysis tree; each filter becomes
    /// its own path segment in the given order, e.g. `["lowlevel",
    /// "spectral_centroid"]` requests
    /// `/sounds/{id}/analysis/lowlevel/spectral_centroid`.
    pub fn sound_analysis(&self, sound_id: u64, filters: &[&str], params: Params) -> Result<Value> {
        self.request(&analysis_path(sound_id, filters), params)
    }

    /// List sounds similar to the given one.
    pub fn sound_similar(&self, sound_id: u64, params: Params) -> Result<Value> {
        self.request(&format!("/sounds/{sound_id}/similar"), params)
    }
}

fn analysis_path(sound_id: u64, filters: &[&str]) -> String {
    let mut path = format!("/sounds/{sound_id}/analysis");
    for filter in filters {
        path.push('/');
        path.push_str(filter);
    }
    path
}
