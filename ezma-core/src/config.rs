//! Centralized configuration for Ezma.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::{EzmaError, Result};

/// Central configuration for all Ezma components.
///
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct EzmaConfig {
    pub api: ApiConfig,
    pub server: ServerConfig,
    pub map: MapConfig,
}

/// Catalog API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the catalog API, without trailing slash
    pub base_url: String,
    /// Per-request timeout (None = wait for the transport)
    pub request_timeout: Option<Duration>,
    /// User agent for outbound requests
    pub user_agent: &'static str,
    /// Serve the built-in demo catalog instead of calling the API
    pub use_demo_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            request_timeout: None,
            user_agent: "ezma/0.1.0",
            use_demo_data: false,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/images` (None = images bundled with the web crate)
    pub assets_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            assets_dir: None,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` pair to bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Map widget settings.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Zoom of the map in the Location tab
    pub detail_zoom: u8,
    /// Zoom of the compact map in the side panel
    pub compact_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            detail_zoom: 13,
            compact_zoom: 15,
        }
    }
}

impl EzmaConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// # Errors
    /// - `EzmaError::Configuration` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("EZMA_API_URL") {
            config.api.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(seconds) = parse_env::<u64>("EZMA_API_TIMEOUT_SECS")? {
            config.api.request_timeout = Some(Duration::from_secs(seconds));
        }

        if let Some(demo) = parse_env::<bool>("EZMA_USE_DEMO_DATA")? {
            config.api.use_demo_data = demo;
        }

        if let Ok(host) = std::env::var("EZMA_HOST") {
            config.server.host = host;
        }

        if let Some(port) = parse_env::<u16>("EZMA_PORT")? {
            config.server.port = port;
        }

        if let Ok(dir) = std::env::var("EZMA_ASSETS_DIR") {
            config.server.assets_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Creates a configuration that serves the demo catalog.
    pub fn for_demo() -> Self {
        let mut config = Self::default();
        config.api.use_demo_data = true;
        config
    }
}

/// Reads and parses an optional environment variable.
fn parse_env<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| EzmaError::Configuration {
                reason: format!("{name}={value:?} is invalid: {e}"),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = EzmaConfig::default();

        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.api.request_timeout, None);
        assert!(!config.api.use_demo_data);
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.server.assets_dir, None);
        assert_eq!(config.map.compact_zoom, 15);
    }

    #[test]
    fn test_demo_preset() {
        assert!(EzmaConfig::for_demo().api.use_demo_data);
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("EZMA_API_URL", "https://catalog.example.uz/api/");
            std::env::set_var("EZMA_API_TIMEOUT_SECS", "5");
            std::env::set_var("EZMA_USE_DEMO_DATA", "true");
            std::env::set_var("EZMA_HOST", "0.0.0.0");
            std::env::set_var("EZMA_ASSETS_DIR", "/srv/ezma/images");
        }

        let config = EzmaConfig::from_env().unwrap();

        assert_eq!(config.api.base_url, "https://catalog.example.uz/api");
        assert_eq!(config.api.request_timeout, Some(Duration::from_secs(5)));
        assert!(config.api.use_demo_data);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.server.assets_dir,
            Some(PathBuf::from("/srv/ezma/images"))
        );

        // Malformed values are reported, not ignored
        unsafe {
            std::env::set_var("EZMA_PORT", "not-a-port");
        }
        let result = EzmaConfig::from_env();
        assert!(matches!(
            result,
            Err(EzmaError::Configuration { ref reason }) if reason.contains("EZMA_PORT")
        ));

        // Cleanup
        unsafe {
            std::env::remove_var("EZMA_API_URL");
            std::env::remove_var("EZMA_API_TIMEOUT_SECS");
            std::env::remove_var("EZMA_USE_DEMO_DATA");
            std::env::remove_var("EZMA_HOST");
            std::env::remove_var("EZMA_ASSETS_DIR");
            std::env::remove_var("EZMA_PORT");
        }
    }
}
