//! Runtime configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_DATA_DIR` - Directory for the file-backed store (default: in-memory only)
//! - `STOREFRONT_LOCALE` - Language used when none is saved, `th` or `en` (default: `th`)
//! - `STOREFRONT_DEFAULT_SORT` - Listing sort key (default: `featured`)
//! - `STOREFRONT_SEARCH_DEBOUNCE_MS` - Search quiescence window (default: 500)
//! - `STOREFRONT_SIMULATE_LATENCY` - Delay catalog calls like a network would (default: true)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::catalog::LatencyProfile;
use crate::debounce::DEFAULT_WINDOW;
use crate::domain::value_objects::Locale;
use crate::pipeline::SortKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Where to persist the cart and language; `None` keeps them in memory.
    pub data_dir: Option<PathBuf>,
    pub default_locale: Locale,
    pub default_sort: SortKey,
    pub search_debounce: Duration,
    pub simulate_latency: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_locale: Locale::PRIMARY,
            default_sort: SortKey::Featured,
            search_debounce: DEFAULT_WINDOW,
            simulate_latency: true,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Builds the config from any key lookup; unset or empty keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let invalid = |key: &str, reason: String| ConfigError::InvalidEnvVar(key.to_string(), reason);
        let defaults = Self::default();

        let default_locale = match get("STOREFRONT_LOCALE") {
            Some(v) => v.parse().map_err(|e: crate::domain::value_objects::UnknownLocale| invalid("STOREFRONT_LOCALE", e.to_string()))?,
            None => defaults.default_locale,
        };
        let default_sort = match get("STOREFRONT_DEFAULT_SORT") {
            Some(v) => match SortKey::parse(&v) {
                SortKey::Unsorted if v != "unsorted" => return Err(invalid("STOREFRONT_DEFAULT_SORT", format!("unknown sort key `{v}`"))),
                key => key,
            },
            None => defaults.default_sort,
        };
        let search_debounce = match get("STOREFRONT_SEARCH_DEBOUNCE_MS") {
            Some(v) => Duration::from_millis(v.parse().map_err(|e: std::num::ParseIntError| invalid("STOREFRONT_SEARCH_DEBOUNCE_MS", e.to_string()))?),
            None => defaults.search_debounce,
        };
        let simulate_latency = match get("STOREFRONT_SIMULATE_LATENCY").map(|v| v.to_ascii_lowercase()) {
            Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
            Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
            Some(v) => return Err(invalid("STOREFRONT_SIMULATE_LATENCY", format!("expected a boolean, got `{v}`"))),
            None => defaults.simulate_latency,
        };

        Ok(Self {
            data_dir: get("STOREFRONT_DATA_DIR").map(PathBuf::from),
            default_locale,
            default_sort,
            search_debounce,
            simulate_latency,
        })
    }

    pub fn latency(&self) -> LatencyProfile {
        if self.simulate_latency { LatencyProfile::default() } else { LatencyProfile::instant() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        StorefrontConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert!(cfg.data_dir.is_none());
        assert_eq!(cfg.default_locale, Locale::Th);
        assert_eq!(cfg.search_debounce, Duration::from_millis(500));
        assert_eq!(cfg.latency(), LatencyProfile::default());
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("STOREFRONT_DATA_DIR", "/var/lib/storefront"),
            ("STOREFRONT_LOCALE", "en"),
            ("STOREFRONT_DEFAULT_SORT", "price-low"),
            ("STOREFRONT_SEARCH_DEBOUNCE_MS", "250"),
            ("STOREFRONT_SIMULATE_LATENCY", "false"),
        ])
        .unwrap();
        assert_eq!(cfg.data_dir, Some(PathBuf::from("/var/lib/storefront")));
        assert_eq!(cfg.default_locale, Locale::En);
        assert_eq!(cfg.default_sort, SortKey::PriceLow);
        assert_eq!(cfg.search_debounce, Duration::from_millis(250));
        assert_eq!(cfg.latency(), LatencyProfile::instant());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(config(&[("STOREFRONT_LOCALE", "fr")]), Err(ConfigError::InvalidEnvVar(k, _)) if k == "STOREFRONT_LOCALE"));
        assert!(config(&[("STOREFRONT_SEARCH_DEBOUNCE_MS", "soon")]).is_err());
        assert!(config(&[("STOREFRONT_DEFAULT_SORT", "newest")]).is_err());
        assert!(config(&[("STOREFRONT_SIMULATE_LATENCY", "maybe")]).is_err());
    }
}
