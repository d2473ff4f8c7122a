use super::{RawResponse, RawTopTracksResult, SpotifyClient};
use crate::{error::Error, types::Credential};

/// Number of long-term top tracks requested from Spotify.
pub const TOP_TRACKS_LIMIT: usize = 10;

impl SpotifyClient {
    /// Calls `GET /me/top/tracks` for the account's long-term favourites.
    pub(crate) async fn top_tracks(
        &self,
        credential: &Credential,
    ) -> Result<RawTopTracksResult, Error> {
        let limit = TOP_TRACKS_LIMIT.to_string();

        let response = self
            .http
            .get(self.endpoint("me/top/tracks"))
            .query(&[("limit", limit.as_str()), ("time_range", "long_term")])
            .bearer_auth(credential.access_token())
            .send()
            .await?;

        RawResponse::read(response).await
    }
}
