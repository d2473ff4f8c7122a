use futures::future::join_all;
use tracing::{debug, warn};

use crate::{
    error::EnrichError,
    spotify::SpotifyApi,
    types::{ArtistRef, ArtistResponse, Credential, TrackArtist},
    utils,
};

/// Resolves a display image for every artist of a track.
///
/// All lookups are started together and awaited as one group. Each lookup
/// settles on its own: a failure only blanks that artist's image. The output
/// has the same length and order as the input.
pub struct ArtistEnricher<'a, A: SpotifyApi + ?Sized> {
    api: &'a A,
    credential: &'a Credential,
}

impl<'a, A: SpotifyApi + ?Sized> ArtistEnricher<'a, A> {
    pub fn new(api: &'a A, credential: &'a Credential) -> Self {
        Self { api, credential }
    }

    pub async fn enrich(&self, artists: &[TrackArtist]) -> Vec<ArtistRef> {
        let lookups = artists.iter().map(|artist| async move {
            match artist.id.as_deref() {
                Some(id) => self.lookup_image(id).await,
                None => {
                    debug!(artist = %artist.name, "artist without id, skipping lookup");
                    Ok(None)
                }
            }
        });
        let images = join_all(lookups).await;

        artists
            .iter()
            .zip(images)
            .map(|(artist, image)| ArtistRef {
                id: artist.id.clone(),
                name: artist.name.clone(),
                url: artist.external_urls.spotify.clone(),
                image: match image {
                    Ok(image) => image,
                    Err(e) => {
                        warn!(artist = %artist.name, artist_id = ?artist.id, error = %e, "artist enrichment failed");
                        None
                    }
                },
            })
            .collect()
    }

    /// `Ok(None)` means the artist exists but has no images.
    pub async fn lookup_image(&self, artist_id: &str) -> Result<Option<String>, EnrichError> {
        let raw = self.api.fetch_artist(self.credential, artist_id).await?;
        if !raw.status.is_success() {
            return Err(EnrichError::Status(raw.status));
        }

        let artist: ArtistResponse = serde_json::from_str(&raw.body)?;
        let image = utils::first_image_url(&artist.images);
        if image.is_none() {
            debug!(artist_id, "artist has no images");
        }

        Ok(image)
    }
}
