use crate::error::CardPostError;
use crate::result::CardPostResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.trello.com/1";
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub trello: TrelloConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Credentials and target list for the create-card endpoint.
///
/// Values are opaque strings; empty ones are sent as-is and rejected by the
/// remote API at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrelloConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default)]
    pub list_id: String,
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub notification_ttl_ms: Option<u64>,
}

/// Values supplied by flags or environment; any `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub api_token: Option<String>,
    pub list_id: Option<String>,
    pub api_base_url: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/cardpost/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("cardpost/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("cardpost\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the config file at `path`, or the platform default location.
    ///
    /// A missing file yields the default config. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> CardPostResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| CardPostError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(api_key) = overrides.api_key {
            self.trello.api_key = api_key;
        }
        if let Some(api_token) = overrides.api_token {
            self.trello.api_token = api_token;
        }
        if let Some(list_id) = overrides.list_id {
            self.trello.list_id = list_id;
        }
        if let Some(api_base_url) = overrides.api_base_url {
            self.trello.api_base_url = Some(api_base_url);
        }
        self
    }
}

impl TrelloConfig {
    pub fn new(
        api_key: impl Into<String>,
        api_token: impl Into<String>,
        list_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_token: api_token.into(),
            list_id: list_id.into(),
            api_base_url: None,
            timeout_secs: None,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn effective_api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
    }

    /// `None` leaves the transport default in place.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Names of credential fields that are empty.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.trim().is_empty() {
            missing.push("api_key");
        }
        if self.api_token.trim().is_empty() {
            missing.push("api_token");
        }
        if self.list_id.trim().is_empty() {
            missing.push("list_id");
        }
        missing
    }
}

impl UiConfig {
    pub fn effective_notification_ttl(&self) -> Duration {
        Duration::from_millis(
            self.notification_ttl_ms
                .unwrap_or(DEFAULT_NOTIFICATION_TTL_MS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.trello, TrelloConfig::default());
        assert_eq!(
            config.ui.effective_notification_ttl(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[trello]
api_key = "k"
api_token = "t"
list_id = "l"
api_base_url = "http://localhost:9000/1/"
timeout_secs = 5

[ui]
notification_ttl_ms = 1500
"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.trello.api_key, "k");
        assert_eq!(config.trello.api_token, "t");
        assert_eq!(config.trello.list_id, "l");
        assert_eq!(
            config.trello.effective_api_base_url(),
            "http://localhost:9000/1"
        );
        assert_eq!(config.trello.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(
            config.ui.effective_notification_ttl(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[trello\napi_key = ").unwrap();

        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, CardPostError::Config(_)));
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = AppConfig {
            trello: TrelloConfig::new("file-key", "file-token", "file-list"),
            ui: UiConfig::default(),
        }
        .with_overrides(ConfigOverrides {
            api_key: Some("env-key".to_string()),
            api_token: None,
            list_id: Some("env-list".to_string()),
            api_base_url: None,
        });

        assert_eq!(config.trello.api_key, "env-key");
        assert_eq!(config.trello.api_token, "file-token");
        assert_eq!(config.trello.list_id, "env-list");
        assert_eq!(config.trello.effective_api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_missing_credentials() {
        let config = TrelloConfig::new("key", " ", "");
        assert_eq!(config.missing_credentials(), vec!["api_token", "list_id"]);
        assert!(TrelloConfig::new("k", "t", "l").missing_credentials().is_empty());
    }

    #[test]
    fn test_default_timeout_is_transport_default() {
        assert_eq!(TrelloConfig::default().timeout(), None);
    }
}
