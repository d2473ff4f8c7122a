#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use nowplaying_api::{
    config::{Config, CorsConfig, SpotifyConfig},
    error::Error,
    spotify::{RawResponse, SpotifyApi},
    types::Credential,
};
use reqwest::StatusCode;
use serde_json::{Value, json};

/// What a fake endpoint answers with.
#[derive(Debug, Clone)]
pub enum Outcome {
    Respond(u16, String),
    Unavailable(String),
}

impl Outcome {
    pub fn json(status: u16, body: Value) -> Self {
        Outcome::Respond(status, body.to_string())
    }

    pub fn empty(status: u16) -> Self {
        Outcome::Respond(status, String::new())
    }

    fn resolve(&self) -> Result<RawResponse, Error> {
        match self {
            Outcome::Respond(status, body) => Ok(RawResponse::new(
                StatusCode::from_u16(*status).expect("valid status"),
                body.clone(),
            )),
            Outcome::Unavailable(msg) => Err(Error::UpstreamUnavailable(msg.clone())),
        }
    }
}

/// In-memory Spotify with per-endpoint canned answers and call counters.
pub struct FakeSpotify {
    pub auth_failure: Option<String>,
    pub now_playing: Outcome,
    pub artists: HashMap<String, Outcome>,
    pub artist_delays: HashMap<String, Duration>,
    pub top_tracks: Outcome,
    pub credential_calls: AtomicUsize,
    pub artist_calls: AtomicUsize,
}

impl FakeSpotify {
    pub fn new(now_playing: Outcome) -> Self {
        Self {
            auth_failure: None,
            now_playing,
            artists: HashMap::new(),
            artist_delays: HashMap::new(),
            top_tracks: Outcome::json(200, json!({ "items": [] })),
            credential_calls: AtomicUsize::new(0),
            artist_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_artist(mut self, id: &str, outcome: Outcome) -> Self {
        self.artists.insert(id.to_string(), outcome);
        self
    }

    pub fn with_artist_delay(mut self, id: &str, delay: Duration) -> Self {
        self.artist_delays.insert(id.to_string(), delay);
        self
    }

    pub fn with_top_tracks(mut self, outcome: Outcome) -> Self {
        self.top_tracks = outcome;
        self
    }

    pub fn failing_auth(mut self, msg: &str) -> Self {
        self.auth_failure = Some(msg.to_string());
        self
    }

    pub fn artist_calls(&self) -> usize {
        self.artist_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn acquire_credential(&self) -> Result<Credential, Error> {
        self.credential_calls.fetch_add(1, Ordering::SeqCst);
        match &self.auth_failure {
            Some(msg) => Err(Error::UpstreamAuth(msg.clone())),
            None => Ok(Credential::new("fake-token")),
        }
    }

    async fn fetch_now_playing(&self, _credential: &Credential) -> Result<RawResponse, Error> {
        self.now_playing.resolve()
    }

    async fn fetch_artist(
        &self,
        _credential: &Credential,
        artist_id: &str,
    ) -> Result<RawResponse, Error> {
        self.artist_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.artist_delays.get(artist_id) {
            tokio::time::sleep(*delay).await;
        }
        match self.artists.get(artist_id) {
            Some(outcome) => outcome.resolve(),
            None => Err(Error::UpstreamUnavailable(format!(
                "no canned answer for {}",
                artist_id
            ))),
        }
    }

    async fn fetch_top_tracks(&self, _credential: &Credential) -> Result<RawResponse, Error> {
        self.top_tracks.resolve()
    }
}

pub fn artist_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "external_urls": { "spotify": format!("https://open.spotify.com/artist/{}", id) }
    })
}

pub fn artist_detail(image: Option<&str>) -> Outcome {
    let images = match image {
        Some(url) => json!([{ "url": url, "width": 640, "height": 640 }]),
        None => json!([]),
    };
    Outcome::json(200, json!({ "images": images }))
}

/// A currently-playing payload for the given `(id, name)` artists.
pub fn playing_body(artists: &[(&str, &str)]) -> Value {
    json!({
        "is_playing": true,
        "item": {
            "name": "Bohemian Rhapsody",
            "type": "track",
            "artists": artists.iter().map(|(id, name)| artist_json(id, name)).collect::<Vec<_>>(),
            "album": {
                "name": "A Night at the Opera",
                "album_type": "album",
                "images": [
                    { "url": "https://i.scdn.co/image/large", "width": 640, "height": 640 },
                    { "url": "https://i.scdn.co/image/medium", "width": 300, "height": 300 }
                ],
                "release_date": "1975-11-21"
            },
            "external_urls": { "spotify": "https://open.spotify.com/track/bohemian" },
            "preview_url": "https://p.scdn.co/mp3-preview/bohemian"
        }
    })
}

pub fn test_spotify_config(api_url: &str, token_url: &str) -> SpotifyConfig {
    SpotifyConfig {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: "refresh-123".to_string(),
        api_url: api_url.to_string(),
        token_url: token_url.to_string(),
        timeout: Some(Duration::from_secs(5)),
    }
}

pub fn test_config() -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        service_name: "nowplaying-api".to_string(),
        spotify: test_spotify_config("http://127.0.0.1:1/v1", "http://127.0.0.1:1/api/token"),
        cors: CorsConfig::default(),
    }
}
