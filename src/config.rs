//! Board configuration.
//!
//! The board runs in the browser, so there is no environment to read at
//! runtime. `KANBAN_API_URL` and `KANBAN_LOG` are read when the wasm bundle is
//! built and fall back to the defaults below.

use std::time::Duration;

use reqwest::Url;

use crate::core::clock::DisplayZone;
use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001/tasks";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub api_base_url: String,
    pub log_level: String,
    pub refresh_period: Duration,
    pub toast_duration: Duration,
    /// New tasks must be due at least this far in the future.
    pub min_due_lead: chrono::Duration,
    pub display_zone: DisplayZone,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            refresh_period: Duration::from_secs(60),
            toast_duration: Duration::from_secs(5),
            min_due_lead: chrono::Duration::minutes(1),
            display_zone: DisplayZone::Local,
        }
    }
}

impl BoardConfig {
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("KANBAN_API_URL") {
            config.api_base_url = url.to_string();
        }
        if let Some(level) = option_env!("KANBAN_LOG") {
            config.log_level = level.to_string();
        }
        config
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_display_zone(mut self, zone: DisplayZone) -> Self {
        self.display_zone = zone;
        self
    }

    /// Checks the settings and normalizes the base URL (no trailing slash).
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        let url = Url::parse(&trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.api_base_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.refresh_period.is_zero() {
            return Err(ConfigError::ZeroRefreshPeriod);
        }
        self.api_base_url = trimmed;
        Ok(self)
    }
}
