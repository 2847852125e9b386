//! Request/response contract tests against a live loopback server.
//!
//! Each test starts an axum server on a random port in a background thread
//! and points a client at it via the builder's `base_url` override. The
//! server echoes back the query string and path where the test needs to
//! observe URL construction, and serves canned success/error bodies for the
//! outcome-classification tests.

use axum::extract::{Path, RawQuery};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use freesound_api::{FreesoundClient, FreesoundError, LastError, Params};

fn app() -> Router {
    Router::new()
        .route("/sounds/search", get(echo_query))
        .route("/sounds/{id}", get(sound))
        .fallback(echo_path)
}

/// Echo the raw query string so tests can assert key injection and order.
async fn echo_query(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({ "query": query.unwrap_or_default() }))
}

/// Echo the request path so tests can assert suffix composition.
async fn echo_path(uri: Uri) -> Json<Value> {
    Json(json!({ "path": uri.path() }))
}

/// Canned sound responses keyed by id:
/// 404 — service error envelope, 500 — plain-text failure,
/// 666 — malformed JSON with status 200, anything else — a payload.
async fn sound(Path(id): Path<u64>) -> Response {
    match id {
        404 => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status_code": 404, "explanation": "Not found" })),
        )
            .into_response(),
        500 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        666 => "not json".into_response(),
        _ => Json(json!({ "id": id, "original_filename": "thunder.wav" })).into_response(),
    }
}

/// Start the mock server on a random port, return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> FreesoundClient {
    FreesoundClient::builder("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

#[test]
fn success_returns_payload_and_clears_last_error() {
    let client = client(&start_server());

    // Park a failure in the slot first, so "cleared" is observable.
    client.sound(404).unwrap_err();
    assert!(client.last_error().is_some());

    let payload = client.sound(1).unwrap();
    assert_eq!(payload["id"], 1);
    assert_eq!(payload["original_filename"], "thunder.wav");
    assert_eq!(client.last_error(), None);
}

#[test]
fn api_error_sets_last_error_from_envelope() {
    let client = client(&start_server());

    let err = client.sound(404).unwrap_err();
    assert!(matches!(
        err,
        FreesoundError::Api { code: 404, ref message } if message == "Not found"
    ));
    assert_eq!(
        client.last_error(),
        Some(LastError {
            code: 404,
            message: "Not found".to_owned(),
        })
    );
}

#[test]
fn transport_failure_overwrites_previous_outcome() {
    // Grab a port nothing is listening on.
    let unused = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_base = format!("http://{}", unused.local_addr().unwrap());
    drop(unused);

    let live = client(&start_server());
    live.sound(1).unwrap();
    assert_eq!(live.last_error(), None);

    let dead = client(&dead_base);
    let err = dead.sound(1).unwrap_err();
    assert!(matches!(err, FreesoundError::Transport(_)));

    let last = dead.last_error().unwrap();
    assert_eq!(last.code, 0);
    assert!(!last.message.is_empty());
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let client = client(&start_server());

    let err = client.sound(666).unwrap_err();
    assert!(matches!(err, FreesoundError::Decode(_)));

    let last = client.last_error().unwrap();
    assert_eq!(last.code, 0);
}

#[test]
fn non_envelope_error_body_keeps_raw_status_and_body() {
    let client = client(&start_server());

    let err = client.sound(500).unwrap_err();
    assert!(matches!(
        err,
        FreesoundError::Status { status: 500, ref body } if body == "Internal Server Error"
    ));
    assert_eq!(
        client.last_error(),
        Some(LastError {
            code: 500,
            message: "Internal Server Error".to_owned(),
        })
    );
}

#[test]
fn api_key_is_appended_to_caller_params() {
    let client = client(&start_server());

    let payload = client
        .sound_search(Params::new().with("q", "rain"))
        .unwrap();
    assert_eq!(payload["query"], "q=rain&api_key=test-key");
}

#[test]
fn caller_supplied_api_key_is_overwritten_in_place() {
    let client = client(&start_server());

    let params = Params::new().with("api_key", "caller-key").with("q", "rain");
    let payload = client.sound_search(params).unwrap();
    assert_eq!(payload["query"], "api_key=test-key&q=rain");
}

#[test]
fn analysis_builds_one_segment_per_filter() {
    let client = client(&start_server());

    let payload = client
        .sound_analysis(42, &["ac", "sfx"], Params::new())
        .unwrap();
    assert_eq!(payload["path"], "/sounds/42/analysis/ac/sfx");
}

#[test]
fn path_composition_matches_resource_table() {
    let client = client(&start_server());

    let payload = client.user("tester").unwrap();
    assert_eq!(payload["path"], "/people/tester");

    let payload = client
        .user_bookmark_category_sounds("tester", 7, Params::new())
        .unwrap();
    assert_eq!(payload["path"], "/people/tester/bookmark_categories/7/sounds");

    let payload = client.pack_sounds(12, Params::new()).unwrap();
    assert_eq!(payload["path"], "/packs/12/sounds");

    // The geotag collection keeps its trailing slash.
    let payload = client.sound_geotag(Params::new()).unwrap();
    assert_eq!(payload["path"], "/sounds/geotag/");
}
