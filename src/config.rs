//! Application configuration, loaded once at startup.

use crate::error::{AppError, Result};
use dockdockgo_search::ClientConfig;
use dockdockgo_search::config::resolve_base_url;
use dockdockgo_search::types::{DEFAULT_LIMIT, MAX_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search service connection settings.
    pub api: ApiConfig,
    /// Search behaviour settings.
    pub search: SearchSettings,
}

/// Where the search service lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the search service. `DOCKDOCKGO_API_BASE` takes precedence;
    /// when both are unset the compiled-in default is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Custom User-Agent header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Search behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Results per page for new searches.
    pub page_size: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_LIMIT,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load `path` if given, else the default config file if it exists,
    /// else the built-in defaults. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing, any file is
    /// malformed, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/dockdockgo/config.toml`.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("dockdockgo")
            .join("config.toml")
    }

    /// Checks field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `search.page_size` is outside `1..=100`.
    pub fn validate(&self) -> Result<()> {
        if self.search.page_size == 0 || self.search.page_size > MAX_LIMIT {
            return Err(AppError::Config(format!(
                "search.page_size must be between 1 and {MAX_LIMIT}"
            )));
        }
        Ok(())
    }

    /// Build the search client config.
    ///
    /// `env_base_url` is the value of `DOCKDOCKGO_API_BASE`, passed in so the
    /// environment is read exactly once, at startup.
    pub fn client_config(&self, env_base_url: Option<&str>) -> ClientConfig {
        let mut client = ClientConfig::new(resolve_base_url(
            env_base_url,
            self.api.base_url.as_deref(),
        ));
        client.user_agent = self.api.user_agent.clone();
        client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockdockgo_search::config::DEFAULT_BASE_URL;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert!(config.api.base_url.is_none());
        assert_eq!(config.search.page_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://search.example.com"
            "#,
        )
        .expect("parse");
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://search.example.com")
        );
        assert_eq!(config.search.page_size, 10);
    }

    #[test]
    fn zero_page_size_rejected() {
        let config = AppConfig {
            search: SearchSettings { page_size: 0 },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn oversized_page_size_rejected() {
        let config = AppConfig {
            search: SearchSettings { page_size: 101 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn client_config_precedence() {
        let config = AppConfig {
            api: ApiConfig {
                base_url: Some("https://file.example".into()),
                user_agent: Some("Probe/1.0".into()),
            },
            ..Default::default()
        };

        let from_env = config.client_config(Some("https://env.example"));
        assert_eq!(from_env.base_url, "https://env.example");
        assert_eq!(from_env.user_agent.as_deref(), Some("Probe/1.0"));

        let from_file = config.client_config(None);
        assert_eq!(from_file.base_url, "https://file.example");

        let fallback = AppConfig::default().client_config(None);
        assert_eq!(fallback.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            api: ApiConfig {
                base_url: Some("http://localhost:9000".into()),
                user_agent: None,
            },
            search: SearchSettings { page_size: 25 },
        };
        config.save_to_file(&path).expect("save");
        let loaded = AppConfig::load(Some(&path)).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = AppConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");
        let result = AppConfig::from_file(&path);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn load_validates_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\npage_size = 0\n").expect("write");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = AppConfig::default_config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.ends_with("config.toml"));
        assert!(path_str.contains("dockdockgo"));
    }
}
