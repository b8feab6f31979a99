use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Site settings read from the environment (and `.env` via dotenvy)
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Artificial latency added to content server functions
    pub content_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_delay: Duration::ZERO,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("CONTENT_DELAY_MS") {
            let ms = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "CONTENT_DELAY_MS",
                expected: "a whole number of milliseconds",
                value: raw.clone(),
            })?;
            config.content_delay = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(SiteConfig::from_lookup(lookup(&[])).unwrap(), SiteConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("CONTENT_DELAY_MS", "800"),
        ]))
        .unwrap();
        assert_eq!(config.content_delay, Duration::from_millis(800));
    }

    #[test]
    fn ignores_unrelated_variables() {
        let config = SiteConfig::from_lookup(lookup(&[("SITE_NAME", "Acme"), ("RUST_LOG", "debug")])).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn rejects_bad_delay() {
        let err = SiteConfig::from_lookup(lookup(&[("CONTENT_DELAY_MS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("CONTENT_DELAY_MS"));
    }
}
