use crate::{
    error::Error,
    spotify::{SpotifyApi, tracks::TOP_TRACKS_LIMIT},
    types::{TopTrack, TopTracksResponse},
    utils,
};

/// Loads the account's long-term top tracks in display shape.
///
/// Unlike now-playing, an upstream error status is a failure here.
pub async fn top_tracks<A: SpotifyApi + ?Sized>(api: &A) -> Result<Vec<TopTrack>, Error> {
    let credential = api.acquire_credential().await?;
    let raw = api.fetch_top_tracks(&credential).await?;
    if !raw.status.is_success() {
        return Err(Error::UpstreamStatus(raw.status));
    }

    let response: TopTracksResponse = raw.json()?;

    Ok(response
        .items
        .into_iter()
        .take(TOP_TRACKS_LIMIT)
        .map(|track| TopTrack {
            artist: utils::join_artist_names(&track.artists),
            song_url: track.external_urls.spotify,
            // the second image is the medium (300px) rendition
            cover: track.album.images.get(1).map(|image| image.url.clone()),
            title: track.name,
        })
        .collect())
}
