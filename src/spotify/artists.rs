use super::{RawArtistResult, RawResponse, SpotifyClient};
use crate::{error::Error, types::Credential};

impl SpotifyClient {
    /// Calls `GET /artists/{id}` for a single artist.
    pub(crate) async fn artist(
        &self,
        credential: &Credential,
        artist_id: &str,
    ) -> Result<RawArtistResult, Error> {
        let api_url = self.endpoint(&format!("artists/{id}", id = artist_id));

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(credential.access_token())
            .send()
            .await?;

        RawResponse::read(response).await
    }
}
