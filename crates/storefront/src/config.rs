//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOP_CART_SEED_CART` - Start with the built-in seed cart (default: true)
//! - `SHOP_CART_FAVORITES_ONLY` - Start with the favorites-only filter on (default: false)
//!
//! Boolean values accept `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`.

use thiserror::Error;

/// Env var toggling the seed cart.
pub const SEED_CART_VAR: &str = "SHOP_CART_SEED_CART";
/// Env var setting the initial favorites-only filter.
pub const FAVORITES_ONLY_VAR: &str = "SHOP_CART_FAVORITES_ONLY";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Load the seed cart at session start
    pub seed_cart: bool,
    /// Initial state of the favorites-only filter
    pub favorites_only: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            seed_cart: true,
            favorites_only: false,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to something that is not a
    /// boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to something that is not a
    /// boolean.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            seed_cart: bool_var(&lookup, SEED_CART_VAR, defaults.seed_cart)?,
            favorites_only: bool_var(&lookup, FAVORITES_ONLY_VAR, defaults.favorites_only)?,
        })
    }
}

fn bool_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            format!("expected a boolean, got '{raw}'"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert!(config.seed_cart);
        assert!(!config.favorites_only);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (SEED_CART_VAR, "no"),
            (FAVORITES_ONLY_VAR, "ON"),
        ]))
        .unwrap();
        assert!(!config.seed_cart);
        assert!(config.favorites_only);
    }

    #[test]
    fn test_blank_uses_default() {
        let config = StorefrontConfig::from_lookup(lookup(&[(SEED_CART_VAR, "  ")])).unwrap();
        assert!(config.seed_cart);
    }

    #[test]
    fn test_invalid_boolean() {
        let result = StorefrontConfig::from_lookup(lookup(&[(FAVORITES_ONLY_VAR, "sometimes")]));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == FAVORITES_ONLY_VAR));
    }
}
