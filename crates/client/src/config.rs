use std::{env, time::Duration};

use toggl_core::{reports, track, Credentials};

use crate::error::Result;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API token used for basic auth (default: empty)
    pub api_token: String,
    /// Reports API base URL (default: "https://toggl.com")
    pub reports_url: String,
    /// Track API base URL (default: "https://api.track.toggl.com")
    pub track_url: String,
    /// Transport timeout in seconds (default: 30)
    pub timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TOGGL_API_TOKEN` - API token (default: empty)
    /// - `TOGGL_REPORTS_URL` - Reports API base URL (default: "https://toggl.com")
    /// - `TOGGL_TRACK_URL` - Track API base URL (default: "https://api.track.toggl.com")
    /// - `TOGGL_TIMEOUT_SECONDS` - Transport timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_token: lookup("TOGGL_API_TOKEN").unwrap_or_default(),
            reports_url: lookup("TOGGL_REPORTS_URL")
                .unwrap_or_else(|| reports::DEFAULT_BASE_URL.to_string()),
            track_url: lookup("TOGGL_TRACK_URL")
                .unwrap_or_else(|| track::DEFAULT_BASE_URL.to_string()),
            timeout_seconds: lookup("TOGGL_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Get the transport timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::api_token(self.api_token.clone())
    }

    /// Build the HTTP transport honoring the configured timeout.
    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder().timeout(self.timeout()).build()?;
        Ok(client)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.api_token, "");
        assert_eq!(config.reports_url, "https://toggl.com");
        assert_eq!(config.track_url, "https://api.track.toggl.com");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOGGL_API_TOKEN", "token"),
            ("TOGGL_REPORTS_URL", "http://localhost:8080"),
            ("TOGGL_TRACK_URL", "http://localhost:8081"),
            ("TOGGL_TIMEOUT_SECONDS", "5"),
        ]));

        assert_eq!(config.credentials(), Credentials::api_token("token"));
        assert_eq!(config.reports_url, "http://localhost:8080");
        assert_eq!(config.track_url, "http://localhost:8081");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("TOGGL_TIMEOUT_SECONDS", "soon")]));
        assert_eq!(config.timeout_seconds, 30);
    }
}
