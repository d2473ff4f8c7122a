use tabled::Table;

use crate::{fatal, management, types::TopTrackTableRow, warning};

pub async fn top_tracks() {
    let config = super::load_config();
    let client = super::spotify_client(&config);

    let pb = super::spinner("Fetching top tracks...");
    let result = management::top_tracks(&client).await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => fatal!("Failed to fetch top tracks. Err: {}", e),
    };

    if tracks.is_empty() {
        warning!("No top tracks yet.");
        return;
    }

    let rows: Vec<TopTrackTableRow> = tracks
        .into_iter()
        .enumerate()
        .map(|(i, t)| TopTrackTableRow {
            rank: i + 1,
            title: t.title,
            artist: t.artist,
            url: t.song_url,
        })
        .collect();

    println!("{}", Table::new(rows));
}
