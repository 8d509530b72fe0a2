// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct SiteConfig {
    base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_base_url() -> String {
    "https://fundopshq.com".into()
}

impl SiteConfig {
    /// Build configuration from environment variables, defaulting the base
    /// URL when unset. Allows dotenv files to populate env vars when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let base_url = env::var("SITE_BASE_URL").unwrap_or_else(|_| default_base_url());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "SITE_BASE_URL must start with http:// or https://".into(),
            ));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = SiteConfig::new("https://example.com/").unwrap();
        assert_eq!(config.base_url(), "https://example.com");
    }

    #[test]
    fn scheme_is_required() {
        assert!(SiteConfig::new("example.com").is_err());
    }
}
