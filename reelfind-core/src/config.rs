//! Configuration for reelfind

use crate::{ReelfindError, SearchMode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default configuration as TOML
pub const DEFAULT_CONFIG: &str = r#"# reelfind configuration

[service]
# Base URL of the recommendation service
base_url = "http://127.0.0.1:5000"
# Request timeout (e.g., "30s", "2m"); empty uses the HTTP client default
timeout = ""

[search]
# Mode selected at startup: title, rating, budget, country or language
default_mode = "title"
# Reject rating input that is not a number in [0, 10] instead of sending NaN
strict_rating = false
"#;

/// reelfind configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub timeout: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub default_mode: SearchMode,
    #[serde(default)]
    pub strict_rating: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: String::new(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_mode: SearchMode::default(),
            strict_rating: false,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse config from TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| ReelfindError::ConfigParse(e.to_string()))
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> crate::Result<Option<Duration>> {
        let raw = self.service.timeout.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        parse_duration(raw)
            .map(Some)
            .ok_or_else(|| ReelfindError::ConfigParse(format!("invalid timeout '{}'", raw)))
    }
}

/// Parse duration string (e.g., "30s", "5m", "1h", "1d")
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (unit_start, unit) = s.char_indices().next_back()?;
    let num: u64 = s[..unit_start].parse().ok()?;

    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };
    num.checked_mul(multiplier).map(Duration::from_secs)
}
