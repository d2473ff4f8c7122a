use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Album art dimension used when the upstream album has no images.
pub const DEFAULT_ALBUM_IMAGE_SIZE: u32 = 300;

/// Bearer token obtained through the refresh-token exchange.
///
/// The value is only readable inside the crate and is redacted from `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(access_token: impl Into<String>) -> Self {
        Credential(access_token.into())
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

// ---------------------------------------------------------------------------
// Upstream wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentlyPlayingResponse {
    pub item: Option<PlayingItem>,
    #[serde(default)]
    pub is_playing: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayingItem {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub album: PlayingAlbum,
    pub external_urls: ExternalUrls,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    /// Null for artists of local files.
    pub id: Option<String>,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayingAlbum {
    pub name: String,
    pub album_type: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResponse {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TopTrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTrackItem {
    pub name: String,
    pub artists: Vec<NamedArtist>,
    pub external_urls: ExternalUrls,
    pub album: TopTrackAlbum,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTrackAlbum {
    #[serde(default)]
    pub images: Vec<Image>,
}

// ---------------------------------------------------------------------------
// Outbound payloads
// ---------------------------------------------------------------------------

/// What the widget gets back from `/now-playing`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrackSnapshot {
    Idle(IdleSnapshot),
    Playing(PlayingSnapshot),
}

impl TrackSnapshot {
    pub fn idle(status: u16) -> Self {
        TrackSnapshot::Idle(IdleSnapshot {
            is_playing: false,
            current_playing: false,
            status,
        })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TrackSnapshot::Idle(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleSnapshot {
    pub is_playing: bool,
    pub current_playing: bool,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayingSnapshot {
    pub status: u16,
    pub title: String,
    pub album: String,
    pub is_album: bool,
    pub album_image_url: String,
    pub album_image_width: u32,
    pub album_image_height: u32,
    pub album_release_date: Option<String>,
    pub artists: Vec<ArtistRef>,
    pub is_playing: bool,
    pub song_url: String,
    pub song_preview_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTrack {
    pub artist: String,
    pub song_url: String,
    pub cover: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopTracks {
    pub tracks: Vec<TopTrack>,
}

#[derive(Tabled)]
pub struct TopTrackTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub title: String,
    pub artist: String,
    pub url: String,
}
