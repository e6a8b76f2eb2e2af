//! Application configuration.
//!
//! The dashboard talks to a single transactions API. The base address
//! defaults to the local development server and can be overridden with the
//! `PIXDASH_API_URL` environment variable (a `.env` file is honored via
//! `dotenvy` in `main`).

/// Default API base address used when no override is present.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Environment variable that overrides the API base address.
pub const API_URL_ENV: &str = "PIXDASH_API_URL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the transactions API, without a trailing slash.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let url = api_base_url.into();
        Self {
            api_base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build a config from the environment, falling back to the default
    /// address when the override is unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                tracing::info!("using API base URL from {}: {}", API_URL_ENV, url.trim());
                Self::new(url)
            }
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_api() {
        assert_eq!(Config::default().api_base_url, "http://localhost:3000");
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        assert_eq!(Config::new("http://api.example.com/").api_base_url, "http://api.example.com");
        assert_eq!(Config::new("http://api.example.com//").api_base_url, "http://api.example.com");
    }

    #[test]
    fn test_new_trims_whitespace() {
        assert_eq!(Config::new("  http://api.example.com  ").api_base_url, "http://api.example.com");
    }

    #[test]
    fn test_new_keeps_clean_url_unchanged() {
        assert_eq!(Config::new("https://pix.example.com:8443").api_base_url, "https://pix.example.com:8443");
    }
}
