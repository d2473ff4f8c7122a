mod artist;
mod now_playing;
mod top_tracks;

pub use artist::ArtistEnricher;
pub use now_playing::NowPlayingManager;
pub use now_playing::Playback;
pub use now_playing::classify;
pub use top_tracks::top_tracks;
