//! HTTP client for the Freesound API.
//!
//! Every resource call goes through the same path:
//!
//! 1. Inject the client's API key into the parameter bag under `api_key`
//!    (overwriting a caller-supplied value)
//! 2. Serialize the bag to a query string and append it to
//!    `{base_url}{suffix}`
//! 3. Issue one blocking GET
//! 4. Classify the outcome and overwrite the last-error slot
//!
//! # Response format
//!
//! A 200 response carries the resource payload as JSON (schema owned by the
//! service). Any other status carries the service's error envelope:
//!
//! ```json
//! {
//!   "status_code": 404,
//!   "explanation": "Not found"
//! }
//! ```
//!
//! Envelope responses are mapped to [`FreesoundError::Api`]; non-200
//! responses without a decodable envelope fall back to
//! [`FreesoundError::Status`] with the raw status and body.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FreesoundError, LastError, Result};
use crate::params::Params;

const BASE_URL: &str = "https://www.freesound.org/api";
const USER_AGENT: &str = concat!("freesound-api/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameter carrying the API key.
const API_KEY_PARAM: &str = "api_key";

/// Blocking HTTP client for the Freesound API.
///
/// Holds the API key, a configured [`reqwest::blocking::Client`], and the
/// last-error slot. Resource methods are implemented in separate modules
/// (`sounds`, `people`, `packs`) as `impl FreesoundClient` blocks.
///
/// The last-error slot is mutex-guarded, so one client may be shared across
/// threads; see [`last_error`](Self::last_error) for what concurrent calls
/// mean for the slot's contents.
#[derive(Debug)]
pub struct FreesoundClient {
    http: Client,
    api_key: String,
    base_url: String,
    last_error: Mutex<Option<LastError>>,
}

impl FreesoundClient {
    /// Create a client with default transport options (30 s timeout,
    /// redirects followed).
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom transport options.
    pub fn builder(api_key: impl Into<String>) -> FreesoundClientBuilder {
        FreesoundClientBuilder {
            api_key: api_key.into(),
            base_url: BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            follow_redirects: true,
            user_agent: USER_AGENT.to_owned(),
            headers: Vec::new(),
            proxy: None,
        }
    }

    /// Diagnostic record of the most recent call, if it failed.
    ///
    /// The slot is overwritten on every call: cleared on success, populated
    /// on failure. It is never accumulated. When several threads call
    /// through one client concurrently, the slot reflects whichever call
    /// finished last.
    pub fn last_error(&self) -> Option<LastError> {
        self.slot().clone()
    }

    /// Send a GET request to the given API path.
    ///
    /// `path` is the suffix after the base URL, e.g. `/sounds/search`.
    /// The client's API key is injected into `params` under `api_key`,
    /// replacing any caller-supplied value at its original position.
    ///
    /// Returns the decoded JSON payload on a 200 response. All resource
    /// methods delegate here; calling it directly covers endpoints this
    /// crate has no method for yet.
    pub fn request(&self, path: &str, mut params: Params) -> Result<Value> {
        params.set(API_KEY_PARAM, self.api_key.as_str());
        let url = self.build_url(path, &params);
        let outcome = self.execute(&url);
        *self.slot() = outcome.as_ref().err().map(LastError::from);
        outcome
    }

    fn build_url(&self, path: &str, params: &Params) -> String {
        let query = params.to_query_string();
        if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query}", self.base_url)
        }
    }

    fn execute(&self, url: &str) -> Result<Value> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if status == StatusCode::OK {
            return Ok(serde_json::from_str(&body)?);
        }
        Err(error_from_response(status.as_u16(), body))
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<LastError>> {
        // A poisoned lock only means another thread panicked mid-call; the
        // slot itself is always a valid Option.
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Service error envelope returned with non-200 statuses.
#[derive(Deserialize)]
struct ErrorEnvelope {
    status_code: i64,
    explanation: String,
}

fn error_from_response(status: u16, body: String) -> FreesoundError {
    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(env) => FreesoundError::Api {
            code: env.status_code,
            message: env.explanation,
        },
        Err(_) => FreesoundError::Status { status, body },
    }
}

/// Builder for [`FreesoundClient`] transport options.
///
/// Options override the library defaults; unset options keep them.
pub struct FreesoundClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    follow_redirects: bool,
    user_agent: String,
    headers: Vec<(String, String)>,
    proxy: Option<String>,
}

impl FreesoundClientBuilder {
    /// Override the API base URL (useful for tests or a local proxy).
    /// A trailing `/` is stripped; path suffixes supply their own.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Request timeout covering connect through body read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether to follow HTTP redirects (up to 10). On by default.
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Route all requests through the given proxy URL.
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// [`FreesoundError::Config`] for an invalid header name/value or proxy
    /// URL; [`FreesoundError::Transport`] if the underlying HTTP client
    /// fails to initialize.
    pub fn build(self) -> Result<FreesoundClient> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| FreesoundError::Config(format!("header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| FreesoundError::Config(format!("header value for {name}: {e}")))?;
            headers.insert(name, value);
        }

        let redirect = if self.follow_redirects {
            Policy::limited(10)
        } else {
            Policy::none()
        };

        let mut http = Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .redirect(redirect)
            .default_headers(headers);

        if let Some(url) = self.proxy {
            let proxy = reqwest::Proxy::all(&url)
                .map_err(|e| FreesoundError::Config(format!("proxy {url:?}: {e}")))?;
            http = http.proxy(proxy);
        }

        Ok(FreesoundClient {
            http: http.build()?,
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_owned(),
            last_error: Mutex::new(None),
        })
    }
}
