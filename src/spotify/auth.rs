use reqwest::header::AUTHORIZATION;
use tracing::debug;

use super::{RawResponse, SpotifyClient};
use crate::{
    error::Error,
    types::{Credential, TokenResponse},
    utils,
};

impl SpotifyClient {
    /// Exchanges the configured refresh token for a short-lived access token.
    ///
    /// Authenticates with HTTP Basic built from the client id/secret pair and
    /// posts a `refresh_token` grant to the token endpoint.
    ///
    /// # Errors
    ///
    /// - [`Error::UpstreamUnavailable`] when the endpoint cannot be reached
    /// - [`Error::UpstreamAuth`] on a non-success status or a body without
    ///   an `access_token`
    pub(crate) async fn exchange_refresh_token(&self) -> Result<Credential, Error> {
        let basic =
            utils::basic_credentials(&self.config.client_id, &self.config.client_secret);

        let response = self
            .http
            .post(&self.config.token_url)
            .header(AUTHORIZATION, format!("Basic {}", basic))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.config.refresh_token.as_str()),
            ])
            .send()
            .await?;

        let raw = RawResponse::read(response).await?;
        if !raw.status.is_success() {
            return Err(Error::UpstreamAuth(format!(
                "token endpoint returned {}",
                raw.status
            )));
        }

        let token: TokenResponse = serde_json::from_str(&raw.body)
            .map_err(|e| Error::UpstreamAuth(format!("unreadable token response: {}", e)))?;
        if token.access_token.is_empty() {
            return Err(Error::UpstreamAuth("empty access token".to_string()));
        }

        debug!("obtained spotify access token");
        Ok(Credential::new(token.access_token))
    }
}
