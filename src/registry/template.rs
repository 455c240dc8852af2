/// Manual path: write a blank asset info record for curation
use std::path::PathBuf;

use super::asset_id::parse_asset_id;
use super::asset_info::AssetInfoStore;
use super::types::AssetInfo;
use crate::config::Config;
use crate::errors::RegistryResult;
use crate::logger::{self, LogTag};
use crate::paths::RegistryPaths;

pub struct TemplateCreator {
    assets: AssetInfoStore,
}

impl TemplateCreator {
    pub fn new(config: &Config) -> Self {
        Self {
            assets: AssetInfoStore::new(RegistryPaths::new(&config.registry.root_dir)),
        }
    }

    /// Create `info.json` for the asset named by `asset_id`
    ///
    /// Every field except `id` is a placeholder. An existing file is never
    /// replaced. Returns the path written.
    pub fn create_template(&self, asset_id: &str) -> RegistryResult<PathBuf> {
        let parsed = parse_asset_id(asset_id)?;
        let token = parsed.require_token()?;

        self.assets.create(&parsed.chain, &AssetInfo::template(token))?;

        let path = self
            .assets
            .paths()
            .asset_info_path(parsed.chain.handle, token);
        logger::info(
            LogTag::Registry,
            &format!("Created template for {} at {}", parsed, path.display()),
        );
        Ok(path)
    }
}
