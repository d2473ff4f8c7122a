//! Configuration management for the now-playing API.
//!
//! All settings are read once at start-up into a [`Config`] value which is then
//! shared with the Spotify client and the response shaper. Values come from the
//! process environment, optionally seeded from `.env` files:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`nowplaying-api/.env`)
//! 4. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf, time::Duration};

use reqwest::header::HeaderValue;

use crate::error::ConfigError;

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://mehmetyigityalim.com",
    "https://v2.mehmetyigityalim.com",
    "https://api.mehmetyigityalim.com",
    "http://localhost:3000",
];

/// Loads `.env` files into the process environment.
///
/// Both the working directory and the platform-specific local data directory
/// are consulted:
/// - Linux: `~/.local/share/nowplaying-api/.env`
/// - macOS: `~/Library/Application Support/nowplaying-api/.env`
/// - Windows: `%LOCALAPPDATA%/nowplaying-api/.env`
///
/// Missing files are skipped. Variables already present in the environment
/// are never overwritten.
///
/// # Errors
///
/// Returns an error string if an existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(mut path) = dirs::data_local_dir() {
        path.push("nowplaying-api/.env");
        candidates.push(path);
    }

    for path in candidates {
        if async_fs::metadata(&path).await.is_ok() {
            dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
        }
    }

    Ok(())
}

/// Everything the service needs, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub service_name: String,
    pub spotify: SpotifyConfig,
    pub cors: CorsConfig,
}

/// Credentials and endpoints for the Spotify Web API.
#[derive(Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub api_url: String,
    pub token_url: String,
    /// Client-side request timeout. `None` leaves hung calls to the host.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for SpotifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("refresh_token", &"***")
            .field("api_url", &self.api_url)
            .field("token_url", &self.token_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Closed allow-list of origins that get their own origin echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    allowed_origins: Vec<String>,
    default_origin: String,
}

impl CorsConfig {
    /// Builds an allow-list. Without an explicit default, the first entry is
    /// used for requests from unknown origins. An explicit default must itself
    /// be allow-listed.
    pub fn new(
        allowed_origins: Vec<String>,
        default_origin: Option<String>,
    ) -> Result<Self, ConfigError> {
        let allowed_origins: Vec<String> = allowed_origins
            .into_iter()
            .map(|o| o.trim().trim_end_matches('/').to_string())
            .filter(|o| !o.is_empty())
            .collect();

        for origin in &allowed_origins {
            validate_origin("ALLOWED_ORIGINS", origin)?;
        }

        let default_origin = match default_origin {
            Some(origin) => {
                let origin = origin.trim().trim_end_matches('/').to_string();
                validate_origin("DEFAULT_ORIGIN", &origin)?;
                if !allowed_origins.contains(&origin) {
                    return Err(ConfigError::Invalid {
                        name: "DEFAULT_ORIGIN",
                        reason: format!("{} is not in ALLOWED_ORIGINS", origin),
                    });
                }
                origin
            }
            None => allowed_origins
                .first()
                .cloned()
                .ok_or(ConfigError::Invalid {
                    name: "ALLOWED_ORIGINS",
                    reason: "at least one origin is required".to_string(),
                })?,
        };

        Ok(Self {
            allowed_origins,
            default_origin,
        })
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }

    pub fn default_origin(&self) -> &str {
        &self.default_origin
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            default_origin: DEFAULT_ALLOWED_ORIGINS[0].to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails if one of `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` or
    /// `SPOTIFY_REFRESH_TOKEN` is missing, or if an optional value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let spotify = SpotifyConfig {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            refresh_token: required("SPOTIFY_REFRESH_TOKEN")?,
            api_url: optional("SPOTIFY_API_URL")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()),
            token_url: optional("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_TOKEN_URL.to_string()),
            timeout: optional("UPSTREAM_TIMEOUT_SECS")
                .map(|secs| parse_timeout(&secs))
                .transpose()?,
        };

        let cors = match optional("ALLOWED_ORIGINS") {
            Some(list) => CorsConfig::new(
                list.split(',').map(str::to_string).collect(),
                optional("DEFAULT_ORIGIN"),
            )?,
            None => CorsConfig::new(
                DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
                optional("DEFAULT_ORIGIN"),
            )?,
        };

        Ok(Config {
            server_addr: optional("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            service_name: optional("SERVICE_NAME")
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string()),
            spotify,
            cors,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_timeout(secs: &str) -> Result<Duration, ConfigError> {
    match secs.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::Invalid {
            name: "UPSTREAM_TIMEOUT_SECS",
            reason: format!("expected a positive number of seconds, got {:?}", secs),
        }),
        Ok(n) => Ok(Duration::from_secs(n)),
    }
}

fn validate_origin(name: &'static str, origin: &str) -> Result<(), ConfigError> {
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            name,
            reason: format!("{} is not an http(s) origin", origin),
        });
    }
    HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
        name,
        reason: format!("{}: {}", origin, e),
    })?;
    Ok(())
}
