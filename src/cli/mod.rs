//! # CLI Module
//!
//! Operator-facing commands for the now-playing service. The HTTP server is
//! the main product; the remaining commands run the same pipeline once from a
//! terminal, which is handy when checking credentials or upstream behaviour
//! without a browser.
//!
//! ## Commands
//!
//! - [`serve`] - starts the HTTP server
//! - [`now_playing`] - prints the current track snapshot as JSON
//! - [`top_tracks`] - prints the long-term top tracks as a table
//!
//! ## Usage Patterns
//!
//! ```bash
//! nowplaying-api serve --addr 0.0.0.0:8080
//! nowplaying-api now-playing
//! nowplaying-api top-tracks
//! ```
//!
//! Every command reads its configuration once via
//! [`crate::config::Config::from_env`] and terminates with a readable message
//! when it is incomplete.

mod now_playing;
mod serve;
mod top_tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, fatal, spotify::SpotifyClient};

pub use now_playing::now_playing;
pub use serve::serve;
pub use top_tracks::top_tracks;

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => fatal!("Invalid configuration. Err: {}", e),
    }
}

fn spotify_client(config: &Config) -> SpotifyClient {
    match SpotifyClient::new(config.spotify.clone()) {
        Ok(client) => client,
        Err(e) => fatal!("Cannot create Spotify client. Err: {}", e),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
