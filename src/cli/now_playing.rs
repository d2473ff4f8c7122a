use crate::{fatal, management::NowPlayingManager, types::TrackSnapshot, warning};

/// Runs the now-playing pipeline once and prints the snapshot.
pub async fn now_playing(compact: bool) {
    let config = super::load_config();
    let client = super::spotify_client(&config);

    let pb = super::spinner("Fetching currently playing track...");
    let result = NowPlayingManager::new(&client).current_track().await;
    pb.finish_and_clear();

    let snapshot = match result {
        Ok(snapshot) => snapshot,
        Err(e) => fatal!("Failed to fetch currently playing track. Err: {}", e),
    };

    if let TrackSnapshot::Playing(track) = &snapshot {
        let missing = track.artists.iter().filter(|a| a.image.is_none()).count();
        if missing > 0 {
            warning!("{} artist(s) without image", missing);
        }
    }

    let json = if compact {
        serde_json::to_string(&snapshot)
    } else {
        serde_json::to_string_pretty(&snapshot)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => fatal!("Cannot serialize snapshot. Err: {}", e),
    }
}
