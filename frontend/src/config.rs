use tracing::Level;

use crate::error::ConfigError;

const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";
const DEFAULT_LOG_LEVEL: &str = "info";
const ACCESS_TOKEN_KEY: &str = "access_token";

/// Connection settings for the managed backend, baked in at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub log_level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            url: DEFAULT_BACKEND_URL.to_string(),
            anon_key: String::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BackendConfig {
    pub fn from_build_env() -> Self {
        let defaults = BackendConfig::default();
        BackendConfig {
            url: option_env!("SUPABASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.url),
            anon_key: option_env!("SUPABASE_ANON_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.anon_key),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Base url of the REST interface, without a trailing slash.
    pub fn rest_base(&self) -> String {
        format!("{}/rest/v1", self.url.trim().trim_end_matches('/'))
    }
}

/// Session token left in local storage by the application shell.
pub fn load_access_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = BackendConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.level(), Ok(Level::INFO));
    }

    #[test]
    fn rejects_bad_urls() {
        let mut config = BackendConfig {
            url: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MissingUrl));

        config.url = "ftp://example.org".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidUrl("ftp://example.org".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_log_level() {
        let config = BackendConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn rest_base_strips_trailing_slash() {
        let config = BackendConfig {
            url: "https://clinic.supabase.co/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.rest_base(), "https://clinic.supabase.co/rest/v1");
    }
}
