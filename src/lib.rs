//! Now-Playing API Library
//!
//! This library serves a small set of read-only HTTP endpoints that proxy the
//! Spotify Web API for a single account and reshape the answers for direct use
//! by a front-end widget. Its core is the now-playing pipeline: fetch the
//! current track, resolve an image for every artist concurrently, and
//! normalise everything into a stable JSON shape that degrades to an idle
//! sentinel when Spotify is silent or failing.
//!
//! # Modules
//!
//! - `api` - axum handlers and shared application state
//! - `cli` - operator commands (serve, one-shot lookups)
//! - `config` - configuration built once from the environment
//! - `error` - error taxonomy for upstream and pipeline failures
//! - `management` - now-playing aggregation, artist enrichment, top tracks
//! - `response` - CORS decisions and HTTP status/header/body mapping
//! - `server` - router assembly and the HTTP listener
//! - `spotify` - Spotify Web API client
//! - `types` - upstream wire types and outbound payloads
//! - `utils` - small helpers
//!
//! # Example
//!
//! ```
//! use nowplaying_api::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> nowplaying_api::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod response;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed-error result used at the binary and CLI level.
///
/// Library code returns [`error::Error`]; this alias only collects whatever
/// bubbles up to a command.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a success line with a green checkmark.
///
/// # Example
///
/// ```
/// use nowplaying_api::success;
///
/// let addr = "127.0.0.1:3000";
/// success!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning line with a yellow exclamation mark. Execution continues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line with a red exclamation mark and exits with status 1.
///
/// Only for unrecoverable problems in the operator CLI; library code returns
/// errors instead.
#[macro_export]
macro_rules! fatal {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}
