mod common;

use std::time::Duration;

use common::{FakeSpotify, Outcome, artist_detail};
use nowplaying_api::{
    error::EnrichError,
    management::ArtistEnricher,
    types::{Credential, TrackArtist},
};
use proptest::prelude::*;
use serde_json::json;

fn track_artists(ids: &[&str]) -> Vec<TrackArtist> {
    ids.iter()
        .map(|id| serde_json::from_value(common::artist_json(id, &id.to_uppercase())).unwrap())
        .collect()
}

#[tokio::test]
async fn test_order_follows_input_not_completion() {
    // the first artist answers last
    let api = FakeSpotify::new(Outcome::empty(204))
        .with_artist("slow", artist_detail(Some("https://img/slow")))
        .with_artist("mid", artist_detail(Some("https://img/mid")))
        .with_artist("fast", artist_detail(Some("https://img/fast")))
        .with_artist_delay("slow", Duration::from_millis(60))
        .with_artist_delay("mid", Duration::from_millis(30));
    let credential = Credential::new("token");

    let artists = ArtistEnricher::new(&api, &credential)
        .enrich(&track_artists(&["slow", "mid", "fast"]))
        .await;

    let ids: Vec<&str> = artists.iter().map(|a| a.id.as_deref().unwrap_or_default()).collect();
    assert_eq!(ids, vec!["slow", "mid", "fast"]);
    assert_eq!(artists[0].image.as_deref(), Some("https://img/slow"));
    assert_eq!(artists[2].image.as_deref(), Some("https://img/fast"));
}

#[tokio::test]
async fn test_lookups_run_concurrently() {
    let mut api = FakeSpotify::new(Outcome::empty(204));
    for id in ["a", "b", "c", "d"] {
        api = api
            .with_artist(id, artist_detail(None))
            .with_artist_delay(id, Duration::from_millis(100));
    }
    let credential = Credential::new("token");

    let started = tokio::time::Instant::now();
    let artists = ArtistEnricher::new(&api, &credential)
        .enrich(&track_artists(&["a", "b", "c", "d"]))
        .await;

    assert_eq!(artists.len(), 4);
    assert!(started.elapsed() < Duration::from_millis(350));
}

#[tokio::test]
async fn test_duplicates_are_kept() {
    let api = FakeSpotify::new(Outcome::empty(204))
        .with_artist("same", artist_detail(Some("https://img/same")));
    let credential = Credential::new("token");

    let artists = ArtistEnricher::new(&api, &credential)
        .enrich(&track_artists(&["same", "same"]))
        .await;

    assert_eq!(artists.len(), 2);
    assert_eq!(api.artist_calls(), 2);
}

#[tokio::test]
async fn test_empty_input() {
    let api = FakeSpotify::new(Outcome::empty(204));
    let credential = Credential::new("token");

    let artists = ArtistEnricher::new(&api, &credential).enrich(&[]).await;

    assert!(artists.is_empty());
    assert_eq!(api.artist_calls(), 0);
}

#[tokio::test]
async fn test_lookup_image_outcomes() {
    let api = FakeSpotify::new(Outcome::empty(204))
        .with_artist("pictured", artist_detail(Some("https://img/1")))
        .with_artist("bare", artist_detail(None))
        .with_artist("gone", Outcome::json(404, json!({ "error": "not found" })))
        .with_artist("garbled", Outcome::Respond(200, "<html>".to_string()))
        .with_artist("down", Outcome::Unavailable("timeout".to_string()));
    let credential = Credential::new("token");
    let enricher = ArtistEnricher::new(&api, &credential);

    assert_eq!(
        enricher.lookup_image("pictured").await.unwrap().as_deref(),
        Some("https://img/1")
    );
    assert_eq!(enricher.lookup_image("bare").await.unwrap(), None);
    assert!(matches!(
        enricher.lookup_image("gone").await,
        Err(EnrichError::Status(s)) if s.as_u16() == 404
    ));
    assert!(matches!(
        enricher.lookup_image("garbled").await,
        Err(EnrichError::Parse(_))
    ));
    assert!(matches!(
        enricher.lookup_image("down").await,
        Err(EnrichError::Upstream(_))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_failures_only_blank_their_own_entry(failures in proptest::collection::vec(any::<bool>(), 0..8)) {
        let ids: Vec<String> = (0..failures.len()).map(|i| format!("artist{}", i)).collect();

        let mut api = FakeSpotify::new(Outcome::empty(204));
        for (id, fails) in ids.iter().zip(&failures) {
            let outcome = if *fails {
                Outcome::Unavailable("boom".to_string())
            } else {
                artist_detail(Some(format!("https://img/{}", id).as_str()))
            };
            api = api.with_artist(id, outcome);
        }

        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let input = track_artists(&id_refs);
        let credential = Credential::new("token");

        let rt = tokio::runtime::Runtime::new().unwrap();
        let artists = rt.block_on(ArtistEnricher::new(&api, &credential).enrich(&input));

        prop_assert_eq!(artists.len(), failures.len());
        for ((artist, id), fails) in artists.iter().zip(&ids).zip(&failures) {
            prop_assert_eq!(artist.id.as_deref(), Some(id.as_str()));
            prop_assert_eq!(artist.image.is_none(), *fails);
        }
    }
}
