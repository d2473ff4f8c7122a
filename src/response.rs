//! Maps pipeline results onto the HTTP contract the widget consumes.
//!
//! Every response built here carries the CORS headers derived from the
//! request's `Origin`. Bodies are JSON except for pre-flight answers.

use axum::{
    Json,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW, CACHE_CONTROL, VARY,
        },
    },
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    config::CorsConfig,
    error::Error,
    types::{TopTracks, TrackSnapshot},
};

pub const ALLOWED_METHODS: &str = "GET, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

pub const PLAYING_CACHE_CONTROL: &str = "public, s-maxage=60, stale-while-revalidate=30";
pub const IDLE_CACHE_CONTROL: &str = "public, s-maxage=10, stale-while-revalidate=10";
pub const TOP_TRACKS_CACHE_CONTROL: &str = "public, s-maxage=86400, stale-while-revalidate=43200";
pub const ERROR_CACHE_CONTROL: &str = "no-store";

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while fetching data";

/// Which origin a response is allowed to be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    allow_origin: String,
}

impl CorsDecision {
    /// Echoes an allow-listed origin; anything else gets the default origin.
    pub fn for_origin(origin: Option<&str>, cors: &CorsConfig) -> Self {
        let allow_origin = match origin.map(|o| o.trim_end_matches('/')) {
            Some(origin) if cors.is_allowed(origin) => origin.to_string(),
            _ => cors.default_origin().to_string(),
        };
        Self { allow_origin }
    }

    /// Reads the `Origin` header off an inbound request.
    pub fn from_headers(headers: &HeaderMap, cors: &CorsConfig) -> Self {
        let origin = headers
            .get(axum::http::header::ORIGIN)
            .and_then(|value| value.to_str().ok());
        Self::for_origin(origin, cors)
    }

    pub fn allow_origin(&self) -> &str {
        &self.allow_origin
    }

    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        // origins are validated when the allow-list is built
        if let Ok(origin) = HeaderValue::from_str(&self.allow_origin) {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.insert(VARY, HeaderValue::from_static("Origin"));
        headers
    }
}

fn with_cache(cors: &CorsDecision, cache_control: &'static str) -> HeaderMap {
    let mut headers = cors.headers();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(cache_control));
    headers
}

/// 200 with either the idle sentinel or the full track.
pub fn snapshot(snapshot: &TrackSnapshot, cors: &CorsDecision) -> Response {
    let cache_control = if snapshot.is_idle() {
        IDLE_CACHE_CONTROL
    } else {
        PLAYING_CACHE_CONTROL
    };

    (StatusCode::OK, with_cache(cors, cache_control), Json(snapshot)).into_response()
}

pub fn top_tracks(tracks: &TopTracks, cors: &CorsDecision) -> Response {
    (
        StatusCode::OK,
        with_cache(cors, TOP_TRACKS_CACHE_CONTROL),
        Json(tracks),
    )
        .into_response()
}

/// 500 with a generic message plus the underlying one.
pub fn failure(err: &Error, cors: &CorsDecision) -> Response {
    let body = json!({
        "error": GENERIC_ERROR_MESSAGE,
        "message": err.to_string(),
        "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
    });

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        with_cache(cors, ERROR_CACHE_CONTROL),
        Json(body),
    )
        .into_response()
}

pub fn preflight(cors: &CorsDecision) -> Response {
    (StatusCode::NO_CONTENT, cors.headers()).into_response()
}

pub fn method_not_allowed(cors: &CorsDecision) -> Response {
    let mut headers = cors.headers();
    headers.insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));

    let body = json!({
        "error": "Method Not Allowed",
        "status": StatusCode::METHOD_NOT_ALLOWED.as_u16(),
    });

    (StatusCode::METHOD_NOT_ALLOWED, headers, Json(body)).into_response()
}
