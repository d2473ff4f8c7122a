use reqwest::header::CACHE_CONTROL;

use super::{RawPlaybackResult, RawResponse, SpotifyClient};
use crate::{error::Error, types::Credential};

impl SpotifyClient {
    /// Calls `GET /me/player/currently-playing`.
    ///
    /// Spotify answers `204 No Content` when nothing is playing; the status is
    /// passed through untouched so the caller can classify it.
    pub(crate) async fn currently_playing(
        &self,
        credential: &Credential,
    ) -> Result<RawPlaybackResult, Error> {
        let response = self
            .http
            .get(self.endpoint("me/player/currently-playing"))
            .bearer_auth(credential.access_token())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        RawResponse::read(response).await
    }
}
