//! Path resolution for the assets manager
//!
//! Two families of paths live here:
//!
//! - **Application paths** (logs, default config) under the platform data
//!   directory:
//!   - **macOS**: `~/Library/Application Support/AssetsManager/`
//!   - **Windows**: `%LOCALAPPDATA%\AssetsManager\`
//!   - **Linux**: `$XDG_DATA_HOME/AssetsManager/` (fallback `~/.local/share/AssetsManager/`)
//!
//! - **Registry paths**, derived from a registry root directory:
//!
//! ```text
//! <root>/
//! └── <chain-handle>/
//!     ├── tokenlist.json
//!     ├── tokenlist-extended.json
//!     └── assets/
//!         └── <address>/
//!             ├── info.json
//!             └── logo.png
//! ```

use once_cell::sync::Lazy;
use std::path::PathBuf;

use crate::registry::TokenListVariant;

// =============================================================================
// APPLICATION DIRECTORIES
// =============================================================================

static BASE_DIRECTORY: Lazy<PathBuf> = Lazy::new(resolve_base_directory);

fn resolve_base_directory() -> PathBuf {
    const APP_DIR: &str = "AssetsManager";

    if let Some(dir) = dirs::data_local_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(dir) = dirs::data_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(APP_DIR);
    }

    PathBuf::from(APP_DIR)
}

/// Returns the logs directory path
pub fn get_logs_directory() -> PathBuf {
    BASE_DIRECTORY.join("logs")
}

/// Returns the fallback configuration file path, used when `assets.toml` is
/// not present in the working directory
pub fn get_default_config_path() -> PathBuf {
    BASE_DIRECTORY.join("config.toml")
}

// =============================================================================
// REGISTRY PATHS
// =============================================================================

pub const ASSET_INFO_FILE: &str = "info.json";
pub const ASSET_LOGO_FILE: &str = "logo.png";

/// Path derivation for one registry root
#[derive(Debug, Clone)]
pub struct RegistryPaths {
    root: PathBuf,
}

impl RegistryPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn chain_dir(&self, chain_handle: &str) -> PathBuf {
        self.root.join(chain_handle)
    }

    pub fn asset_dir(&self, chain_handle: &str, token_id: &str) -> PathBuf {
        self.chain_dir(chain_handle).join("assets").join(token_id)
    }

    pub fn asset_info_path(&self, chain_handle: &str, token_id: &str) -> PathBuf {
        self.asset_dir(chain_handle, token_id).join(ASSET_INFO_FILE)
    }

    pub fn asset_logo_path(&self, chain_handle: &str, token_id: &str) -> PathBuf {
        self.asset_dir(chain_handle, token_id).join(ASSET_LOGO_FILE)
    }

    pub fn token_list_path(&self, chain_handle: &str, variant: TokenListVariant) -> PathBuf {
        self.chain_dir(chain_handle).join(variant.file_name())
    }
}

/// Public URL of an asset logo as served by the assets app
///
/// Pure function of its inputs; nothing about the URL is stored on disk.
pub fn asset_logo_url(assets_app: &str, chain_handle: &str, token_id: &str) -> String {
    format!(
        "{}/blockchains/{}/assets/{}/{}",
        assets_app.trim_end_matches('/'),
        chain_handle,
        token_id,
        ASSET_LOGO_FILE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_directory_is_subdir() {
        let config_dir = get_default_config_path().parent().unwrap().to_path_buf();
        assert!(get_logs_directory().starts_with(config_dir));
    }

    #[test]
    fn test_asset_paths() {
        let paths = RegistryPaths::new("/tmp/blockchains");
        assert_eq!(
            paths.asset_info_path("ethereum", "0xABC"),
            PathBuf::from("/tmp/blockchains/ethereum/assets/0xABC/info.json")
        );
        assert_eq!(
            paths.asset_logo_path("ethereum", "0xABC"),
            PathBuf::from("/tmp/blockchains/ethereum/assets/0xABC/logo.png")
        );
    }

    #[test]
    fn test_token_list_paths() {
        let paths = RegistryPaths::new("root");
        assert_eq!(
            paths.token_list_path("smartchain", TokenListVariant::Default),
            PathBuf::from("root/smartchain/tokenlist.json")
        );
        assert_eq!(
            paths.token_list_path("smartchain", TokenListVariant::Extended),
            PathBuf::from("root/smartchain/tokenlist-extended.json")
        );
    }

    #[test]
    fn test_logo_url_trims_trailing_slash() {
        assert_eq!(
            asset_logo_url("https://assets.example.com/", "ethereum", "0xABC"),
            "https://assets.example.com/blockchains/ethereum/assets/0xABC/logo.png"
        );
    }
}
