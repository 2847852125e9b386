//! Freesound API client library.
//!
//! Provides access to the [Freesound](https://freesound.org/) sound-library
//! API: sound search (text, content, and geotag based), sound detail and
//! analysis data, user profiles and bookmarks, and sample packs.
//!
//! # Authentication
//!
//! Every call carries a static API key as the `api_key` query parameter.
//! Request one at <https://freesound.org/api/apply/>.
//!
//! ```no_run
//! use freesound_api::{FreesoundClient, Params};
//!
//! let client = FreesoundClient::new("YOUR_API_KEY").unwrap();
//! let page = client.sound_search(Params::new().with("q", "thunder")).unwrap();
//! println!("{page}");
//! ```
//!
//! # API endpoint mapping
//!
//! | Method | Endpoint |
//! |---|---|
//! | [`FreesoundClient::sound_search`] | `/sounds/search` |
//! | [`FreesoundClient::sound_content_search`] | `/sounds/content_search` |
//! | [`FreesoundClient::sound`] | `/sounds/{id}` |
//! | [`FreesoundClient::sound_geotag`] | `/sounds/geotag/` |
//! | [`FreesoundClient::sound_analysis`] | `/sounds/{id}/analysis[/{filter}]…` |
//! | [`FreesoundClient::sound_similar`] | `/sounds/{id}/similar` |
//! | [`FreesoundClient::user`] | `/people/{username}` |
//! | [`FreesoundClient::user_sounds`] | `/people/{username}/sounds` |
//! | [`FreesoundClient::user_packs`] | `/people/{username}/packs` |
//! | [`FreesoundClient::user_bookmark_categories`] | `/people/{username}/bookmark_categories` |
//! | [`FreesoundClient::user_bookmark_category_sounds`] | `/people/{username}/bookmark_categories/{id}/sounds` |
//! | [`FreesoundClient::pack`] | `/packs/{id}` |
//! | [`FreesoundClient::pack_sounds`] | `/packs/{id}/sounds` |
//!
//! # Errors
//!
//! Every method returns `Result<serde_json::Value, FreesoundError>`; the
//! payload schema is owned by the service and passed through undecoded
//! beyond JSON parsing. The most recent failure is also retrievable from
//! [`FreesoundClient::last_error`] as a `{code, message}` record, matching
//! the service's own error envelope.

pub mod client;
pub mod error;
pub mod params;
mod packs;
mod people;
mod sounds;

pub use client::{FreesoundClient, FreesoundClientBuilder};
pub use error::{FreesoundError, LastError, Result};
pub use params::{ParamValue, Params};
