use reqwest::StatusCode;
use tracing::{debug, warn};

use super::ArtistEnricher;
use crate::{
    error::Error,
    spotify::{RawPlaybackResult, SpotifyApi},
    types::{CurrentlyPlayingResponse, PlayingItem, PlayingSnapshot, TrackSnapshot},
    utils,
};

/// How the currently-playing call was answered.
#[derive(Debug, Clone)]
pub enum Playback {
    /// 204, or a body without a track.
    Idle,
    /// Upstream answered with a status >= 400.
    UpstreamError(StatusCode),
    Playing {
        item: PlayingItem,
        is_playing: bool,
    },
}

/// Classifies a raw currently-playing response.
///
/// # Errors
///
/// [`Error::Pipeline`] when a non-empty success body cannot be decoded.
pub fn classify(raw: &RawPlaybackResult) -> Result<Playback, Error> {
    if raw.status == StatusCode::NO_CONTENT {
        return Ok(Playback::Idle);
    }
    if raw.status.is_client_error() || raw.status.is_server_error() {
        return Ok(Playback::UpstreamError(raw.status));
    }

    let song: CurrentlyPlayingResponse = raw.json()?;
    Ok(match song.item {
        Some(item) => Playback::Playing {
            item,
            is_playing: song.is_playing,
        },
        None => Playback::Idle,
    })
}

/// Builds the now-playing snapshot for the configured account.
pub struct NowPlayingManager<'a, A: SpotifyApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: SpotifyApi + ?Sized> NowPlayingManager<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Fetches, classifies, enriches and assembles the current track.
    ///
    /// Idle playback and upstream error statuses both produce the idle
    /// sentinel; artist enrichment only runs when a track is present.
    ///
    /// # Errors
    ///
    /// - [`Error::UpstreamAuth`] when the token exchange fails
    /// - [`Error::UpstreamUnavailable`] when the currently-playing call fails
    /// - [`Error::Pipeline`] when the track payload is malformed
    pub async fn current_track(&self) -> Result<TrackSnapshot, Error> {
        let credential = self.api.acquire_credential().await?;
        let raw = self.api.fetch_now_playing(&credential).await?;
        let status = raw.status.as_u16();

        let (item, is_playing) = match classify(&raw)? {
            Playback::Idle => {
                debug!(status, "nothing playing");
                return Ok(TrackSnapshot::idle(status));
            }
            Playback::UpstreamError(code) => {
                // Outages are reported to the widget as "not playing".
                warn!(status = code.as_u16(), body = %raw.body, "currently-playing call failed, reporting idle");
                return Ok(TrackSnapshot::idle(status));
            }
            Playback::Playing { item, is_playing } => (item, is_playing),
        };

        let artists = ArtistEnricher::new(self.api, &credential)
            .enrich(&item.artists)
            .await;

        let (album_image_url, album_image_width, album_image_height) =
            utils::album_art(&item.album.images);
        let is_album = item
            .album
            .album_type
            .as_deref()
            .or(item.kind.as_deref())
            .is_some_and(|kind| kind.eq_ignore_ascii_case("album"));

        Ok(TrackSnapshot::Playing(PlayingSnapshot {
            status,
            title: item.name,
            album: item.album.name,
            is_album,
            album_image_url,
            album_image_width,
            album_image_height,
            album_release_date: item.album.release_date,
            artists,
            is_playing,
            song_url: item.external_urls.spotify,
            song_preview_url: item.preview_url,
        }))
    }
}
