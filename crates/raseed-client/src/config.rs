use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::view::{DEFAULT_PAGE_SIZE, PagePolicy, ViewSettings};
use crate::{ClientError, ClientResult};

pub const HOME_ENV: &str = "RASEED_HOME";
pub const PAGE_SIZE_ENV: &str = "RASEED_PAGE_SIZE";
pub const DEFAULT_CURRENCY_LABEL: &str = "ر.س";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RaseedConfig {
    pub page_size: usize,
    pub page_policy: PagePolicy,
    pub reset_page_on_change: bool,
    pub currency_label: String,
    /// Default transaction file; relative paths resolve against the home dir.
    pub source: Option<PathBuf>,
}

impl Default for RaseedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_policy: PagePolicy::default(),
            reset_page_on_change: false,
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
            source: None,
        }
    }
}

impl RaseedConfig {
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            page_size: self.page_size,
            page_policy: self.page_policy,
            reset_page_on_change: self.reset_page_on_change,
        }
    }

    fn validate(&self, path: &Path) -> ClientResult<()> {
        if self.page_size == 0 {
            return Err(ClientError::config_invalid(
                path,
                "page_size must be at least 1",
            ));
        }
        Ok(())
    }
}

pub fn resolve_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    match home_override {
        Some(path) => Ok(path.to_path_buf()),
        None => {
            if let Some(override_path) = std::env::var_os(HOME_ENV) {
                Ok(PathBuf::from(override_path))
            } else if let Some(home_path) = home::home_dir() {
                Ok(home_path.join(".raseed"))
            } else {
                Err(ClientError::config_read_failed(
                    Path::new("."),
                    "Could not resolve a home directory for configuration.",
                ))
            }
        }
    }
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join("config.json")
}

/// Loads `config.json` from the resolved home and applies env overrides.
pub fn load_config(home_override: Option<&Path>) -> ClientResult<RaseedConfig> {
    let home = resolve_home(home_override)?;
    let path = config_path(&home);
    let mut config = load_config_file(&path)?;

    if let Some(source) = config.source.take() {
        config.source = Some(if source.is_absolute() {
            source
        } else {
            home.join(source)
        });
    }

    let page_size_override = std::env::var(PAGE_SIZE_ENV).ok();
    apply_page_size_override(&mut config, page_size_override.as_deref(), &path)?;
    config.validate(&path)?;
    Ok(config)
}

/// A missing file yields defaults; any other read failure is an error.
pub fn load_config_file(path: &Path) -> ClientResult<RaseedConfig> {
    let body = match fs::read_to_string(path) {
        Ok(body) => body,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(RaseedConfig::default());
        }
        Err(error) => return Err(ClientError::config_read_failed(path, &error.to_string())),
    };

    let config = serde_json::from_str::<RaseedConfig>(&body)
        .map_err(|error| ClientError::config_invalid(path, &error.to_string()))?;
    config.validate(path)?;
    info!(path = %path.display(), page_size = config.page_size, "loaded config");
    Ok(config)
}

fn apply_page_size_override(
    config: &mut RaseedConfig,
    value: Option<&str>,
    path: &Path,
) -> ClientResult<()> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(());
    };

    let page_size = raw.parse::<usize>().map_err(|_| {
        ClientError::config_invalid(
            path,
            &format!("{PAGE_SIZE_ENV} must be a positive integer, got `{raw}`"),
        )
    })?;
    config.page_size = page_size;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::{RaseedConfig, apply_page_size_override, config_path, load_config_file};
    use crate::view::PagePolicy;

    #[test]
    fn missing_file_yields_defaults() {
        let loaded = load_config_file(Path::new("/nonexistent/raseed/config.json"));
        assert!(loaded.is_ok());
        if let Ok(config) = loaded {
            assert_eq!(config, RaseedConfig::default());
        }
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = TempDir::new();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = config_path(dir.path());
            let write = fs::write(&path, r#"{ "page_size": 3, "page_policy": "unbounded" }"#);
            assert!(write.is_ok());

            let loaded = load_config_file(&path);
            assert!(loaded.is_ok());
            if let Ok(config) = loaded {
                assert_eq!(config.page_size, 3);
                assert_eq!(config.page_policy, PagePolicy::Unbounded);
                assert!(!config.reset_page_on_change);
                assert_eq!(config.currency_label, "ر.س");
            }
        }
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let dir = TempDir::new();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = config_path(dir.path());
            let write = fs::write(&path, r#"{ "page_size": 0 }"#);
            assert!(write.is_ok());

            let loaded = load_config_file(&path);
            assert!(loaded.is_err());
            if let Err(error) = loaded {
                assert_eq!(error.code, "config_invalid");
            }
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = config_path(dir.path());
            let write = fs::write(&path, r#"{ "pagesize": 4 }"#);
            assert!(write.is_ok());
            assert!(load_config_file(&path).is_err());
        }
    }

    #[test]
    fn page_size_override_parses_integers() {
        let mut config = RaseedConfig::default();
        let path = Path::new("config.json");

        assert!(apply_page_size_override(&mut config, Some(" 8 "), path).is_ok());
        assert_eq!(config.page_size, 8);

        assert!(apply_page_size_override(&mut config, Some(""), path).is_ok());
        assert_eq!(config.page_size, 8);

        let bad = apply_page_size_override(&mut config, Some("many"), path);
        assert!(bad.is_err());
    }
}
