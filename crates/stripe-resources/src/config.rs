// Configuration for StripeClient

use stripe_client::{API_VERSION, DEFAULT_API_BASE, Result, StripeError};

pub const ENV_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
pub const ENV_API_BASE: &str = "STRIPE_API_BASE";
pub const ENV_API_VERSION: &str = "STRIPE_API_VERSION";

/// Configuration for the Stripe API client
#[derive(Clone)]
pub struct StripeClientConfig {
    /// Secret API key used for bearer authentication
    pub secret_key: String,
    /// API base URL (default: "https://api.stripe.com")
    pub api_base: String,
    /// Pinned `Stripe-Version`, `None` to use the account default
    pub api_version: Option<String>,
    /// Connection timeout in milliseconds (default: 30000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 80000)
    pub read_timeout_ms: u64,
}

impl std::fmt::Debug for StripeClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClientConfig")
            .field("secret_key", &"****")
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("read_timeout_ms", &self.read_timeout_ms)
            .finish()
    }
}

impl Default for StripeClientConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: Some(API_VERSION.to_string()),
            connect_timeout_ms: 30000,
            read_timeout_ms: 80000,
        }
    }
}

impl StripeClientConfig {
    pub fn new(secret_key: &str) -> Self {
        Self {
            secret_key: secret_key.to_string(),
            ..Default::default()
        }
    }

    /// Load from `STRIPE_SECRET_KEY`, `STRIPE_API_BASE` and `STRIPE_API_VERSION`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup(ENV_SECRET_KEY)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| StripeError::Config(format!("{} is not set", ENV_SECRET_KEY)))?;

        let mut config = Self::new(&secret_key);
        if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.is_empty()) {
            config.api_base = base;
        }
        if let Some(version) = lookup(ENV_API_VERSION).filter(|v| !v.is_empty()) {
            config.api_version = Some(version);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = StripeClientConfig::default();
        assert_eq!(config.api_base, "https://api.stripe.com");
        assert_eq!(config.api_version.as_deref(), Some("2019-02-19"));
        assert_eq!(config.connect_timeout_ms, 30000);
        assert_eq!(config.read_timeout_ms, 80000);
        assert!(config.secret_key.is_empty());
    }

    #[test]
    fn test_from_lookup() {
        let config = StripeClientConfig::from_lookup(lookup_from(&[
            ("STRIPE_SECRET_KEY", "sk_test_123"),
            ("STRIPE_API_BASE", "http://localhost:12111"),
        ]))
        .unwrap();
        assert_eq!(config.secret_key, "sk_test_123");
        assert_eq!(config.api_base, "http://localhost:12111");
        assert_eq!(config.api_version.as_deref(), Some(API_VERSION));

        let config = StripeClientConfig::from_lookup(lookup_from(&[
            ("STRIPE_SECRET_KEY", "sk_test_123"),
            ("STRIPE_API_VERSION", "2020-08-27"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.api_version.as_deref(), Some("2020-08-27"));
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let err = StripeClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, StripeError::Config(_)));

        let err =
            StripeClientConfig::from_lookup(lookup_from(&[("STRIPE_SECRET_KEY", "")])).unwrap_err();
        assert!(err.to_string().contains("STRIPE_SECRET_KEY"));
    }

    #[test]
    fn test_debug_hides_secret_key() {
        let config = StripeClientConfig::new("sk_test_secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk_test_secret"));
    }
}
