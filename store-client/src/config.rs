//! Store configuration

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the hosted table store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project base URL (e.g., "https://xyz.supabase.co")
    pub base_url: String,

    /// Access key sent as `apikey` and bearer token
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Create a configuration with the default timeout
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Fallbacks |
    /// |----------|-----------|
    /// | SUPABASE_URL | NEXT_PUBLIC_SUPABASE_URL |
    /// | SUPABASE_SERVICE_ROLE_KEY | SUPABASE_ANON_KEY, NEXT_PUBLIC_SUPABASE_ANON_KEY |
    /// | STORE_TIMEOUT_SECS | 30 |
    ///
    /// Returns `None` when the URL or key is missing or empty.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(name))
                .find(|value| !value.trim().is_empty())
        };

        let base_url = first(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"])?;
        let api_key = first(&[
            "SUPABASE_SERVICE_ROLE_KEY",
            "SUPABASE_ANON_KEY",
            "NEXT_PUBLIC_SUPABASE_ANON_KEY",
        ])?;
        let timeout_secs = lookup("STORE_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Some(Self::new(base_url.trim(), api_key.trim()).with_timeout(timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_url_is_none() {
        assert!(StoreConfig::from_lookup(lookup(&[("SUPABASE_ANON_KEY", "k")])).is_none());
    }

    #[test]
    fn test_missing_key_is_none() {
        assert!(StoreConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://x.co")])).is_none());
    }

    #[test]
    fn test_empty_values_are_missing() {
        let cfg = StoreConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", ""),
            ("SUPABASE_ANON_KEY", "k"),
        ]));
        assert!(cfg.is_none());
    }

    #[test]
    fn test_fallbacks_and_precedence() {
        let cfg = StoreConfig::from_lookup(lookup(&[
            ("NEXT_PUBLIC_SUPABASE_URL", "https://public.supabase.co/"),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service"),
            ("STORE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "https://public.supabase.co");
        assert_eq!(cfg.api_key, "service");
        assert_eq!(cfg.timeout_secs, 5);
    }
}
