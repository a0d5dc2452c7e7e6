//! Build-time Configuration
//!
//! Values are baked in with `option_env!` so the static bundle needs no runtime config file.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the REST API, without a trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::resolve(option_env!("TASKBOARD_API_URL"), option_env!("TASKBOARD_LOG"))
    }

    fn resolve(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self { api_base_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::resolve(Some("https://api.example.com/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_falls_back() {
        let config = AppConfig::resolve(Some("  "), Some("chatty"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
