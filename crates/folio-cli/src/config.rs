//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the viewer runs against the public
//! demo API with zero configuration. Command-line flags override these.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use folio_shared::constants::{
    ALBUMS_PER_PAGE, DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_MS, POSTS_PER_PAGE,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the REST API.
    /// Env: `FOLIO_API_BASE_URL`
    /// Default: `https://jsonplaceholder.typicode.com`
    pub api_base_url: String,

    /// Per-request timeout.
    /// Env: `FOLIO_HTTP_TIMEOUT_MS`
    /// Default: `10000`
    pub http_timeout: Duration,

    /// SQLite file holding the like map.
    /// Env: `FOLIO_DB_PATH`
    /// Default: `None` (platform data directory).
    pub db_path: Option<PathBuf>,

    /// Env: `FOLIO_ALBUMS_PER_PAGE`
    /// Default: `10`
    pub albums_per_page: NonZeroUsize,

    /// Env: `FOLIO_POSTS_PER_PAGE`
    /// Default: `5`
    pub posts_per_page: NonZeroUsize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
            db_path: None,
            albums_per_page: NonZeroUsize::new(ALBUMS_PER_PAGE).unwrap_or(NonZeroUsize::MIN),
            posts_per_page: NonZeroUsize::new(POSTS_PER_PAGE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("FOLIO_API_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.api_base_url = url;
        }

        if let Some(val) = lookup("FOLIO_HTTP_TIMEOUT_MS") {
            match val.parse::<u64>() {
                Ok(ms) if ms > 0 => config.http_timeout = Duration::from_millis(ms),
                _ => tracing::warn!(value = %val, "Invalid FOLIO_HTTP_TIMEOUT_MS, using default"),
            }
        }

        if let Some(path) = lookup("FOLIO_DB_PATH").filter(|p| !p.is_empty()) {
            config.db_path = Some(PathBuf::from(path));
        }

        if let Some(val) = lookup("FOLIO_ALBUMS_PER_PAGE") {
            match parse_page_size(&val) {
                Some(n) => config.albums_per_page = n,
                None => tracing::warn!(value = %val, "Invalid FOLIO_ALBUMS_PER_PAGE, using default"),
            }
        }

        if let Some(val) = lookup("FOLIO_POSTS_PER_PAGE") {
            match parse_page_size(&val) {
                Some(n) => config.posts_per_page = n,
                None => tracing::warn!(value = %val, "Invalid FOLIO_POSTS_PER_PAGE, using default"),
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter.

        config
    }
}

fn parse_page_size(val: &str) -> Option<NonZeroUsize> {
    val.trim().parse::<NonZeroUsize>().ok()
}
