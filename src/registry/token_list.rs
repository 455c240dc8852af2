/// Token list persistence (`tokenlist.json` / `tokenlist-extended.json`)
use std::path::PathBuf;

use super::json_file::{read_json_file, write_json_file};
use super::types::{TokenList, TokenListVariant};
use crate::chains::Chain;
use crate::errors::{RegistryError, RegistryResult};
use crate::logger::{self, LogTag};
use crate::paths::RegistryPaths;

#[derive(Debug, Clone)]
pub struct TokenListStore {
    paths: RegistryPaths,
}

impl TokenListStore {
    pub fn new(paths: RegistryPaths) -> Self {
        Self { paths }
    }

    pub fn path(&self, chain: &Chain, variant: TokenListVariant) -> PathBuf {
        self.paths.token_list_path(chain.handle, variant)
    }

    /// Read a chain's list; a missing or malformed file is a storage failure
    pub fn read(&self, chain: &Chain, variant: TokenListVariant) -> RegistryResult<TokenList> {
        let path = self.path(chain, variant);
        read_json_file(&path).map_err(|e| RegistryError::storage(path, e))
    }

    /// Replace a chain's list with `list`
    pub fn write(
        &self,
        chain: &Chain,
        variant: TokenListVariant,
        list: &TokenList,
    ) -> RegistryResult<()> {
        let path = self.path(chain, variant);
        write_json_file(&path, list)?;

        logger::debug(
            LogTag::TokenList,
            &format!(
                "Wrote {} ({} tokens, version {})",
                path.display(),
                list.tokens.len(),
                list.version.major
            ),
        );
        Ok(())
    }
}
