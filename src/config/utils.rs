//! Configuration utilities - locating, loading and saving
//!
//! There is no global configuration: callers load a `Config` value once and
//! pass it to the components that need it.
use std::path::{Path, PathBuf};

use super::schemas::Config;

use crate::errors::{RegistryError, RegistryResult};
use crate::logger::{self, LogTag};
use crate::paths::get_default_config_path;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "assets.toml";

/// Decide which configuration file to read
///
/// Order: explicit path, `./assets.toml`, the platform default location.
/// Returns `None` when nothing exists, meaning built-in defaults apply.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    let fallback = get_default_config_path();
    if fallback.is_file() {
        return Some(fallback);
    }

    None
}

/// Load configuration from a specific TOML file
///
/// An explicitly given file must exist; parse failures name the file.
pub fn load_config_from_path(path: &Path) -> RegistryResult<Config> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        RegistryError::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config = toml::from_str::<Config>(&contents).map_err(|e| {
        RegistryError::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    logger::debug(
        LogTag::Config,
        &format!("Loaded configuration from {}", path.display()),
    );

    Ok(config)
}

/// Load configuration, falling back to defaults when no file is found
pub fn load_config(explicit: Option<&Path>) -> RegistryResult<Config> {
    match resolve_config_path(explicit) {
        Some(path) => load_config_from_path(&path),
        None => {
            logger::warning(
                LogTag::Config,
                &format!("No {} found, using default values", CONFIG_FILE_NAME),
            );
            Ok(Config::default())
        }
    }
}

/// Write a configuration to disk as pretty TOML
pub fn save_config(config: &Config, path: &Path) -> RegistryResult<()> {
    let config_str = toml::to_string_pretty(config)
        .map_err(|e| RegistryError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RegistryError::storage(parent, e))?;
    }

    std::fs::write(path, config_str).map_err(|e| RegistryError::storage(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UrlsConfig;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.registry.root_dir, "blockchains");
        assert_eq!(config.http.timeout_secs, 0);
        assert!(config.remote.supported_chains.contains(&60));
        assert!(config.remote.feeds.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets.toml");
        std::fs::write(
            &path,
            r#"
[urls]
assets_app = "https://cdn.example.com"

[[remote.feeds]]
chain_id = 60
url = "https://feed.example.com/ethereum.json"
"#,
        )
        .unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.urls.assets_app, "https://cdn.example.com");
        assert_eq!(config.urls.logo, UrlsConfig::default().logo);
        assert_eq!(config.registry.root_dir, "blockchains");
        assert_eq!(config.remote.feeds.len(), 1);
        assert_eq!(config.remote.feeds[0].chain_id, 60);
    }

    #[test]
    fn test_invalid_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "registry = [").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.registry.root_dir = "/srv/assets/blockchains".to_string();
        save_config(&config, &path).unwrap();

        assert_eq!(load_config_from_path(&path).unwrap(), config);
    }
}
