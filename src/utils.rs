use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::{DEFAULT_ALBUM_IMAGE_SIZE, Image, NamedArtist};

/// Base64 of `client_id:client_secret`, the payload of the HTTP Basic header
/// the token endpoint expects.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}

/// Representative album art: the first image, or an empty URL with the
/// default square size when the album has none.
pub fn album_art(images: &[Image]) -> (String, u32, u32) {
    match images.first() {
        Some(image) => (
            image.url.clone(),
            image.width.unwrap_or(DEFAULT_ALBUM_IMAGE_SIZE),
            image.height.unwrap_or(DEFAULT_ALBUM_IMAGE_SIZE),
        ),
        None => (
            String::new(),
            DEFAULT_ALBUM_IMAGE_SIZE,
            DEFAULT_ALBUM_IMAGE_SIZE,
        ),
    }
}

pub fn first_image_url(images: &[Image]) -> Option<String> {
    images.first().map(|image| image.url.clone())
}

pub fn join_artist_names(artists: &[NamedArtist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
