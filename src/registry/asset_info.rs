/// Asset info persistence (`<root>/<chain>/assets/<address>/info.json`)
use super::asset_id::validate_token_id;
use super::json_file::{create_json_file, read_json_file};
use super::types::AssetInfo;
use crate::chains::Chain;
use crate::errors::{RegistryError, RegistryResult};
use crate::logger::{self, LogTag};
use crate::paths::RegistryPaths;

/// Reads and creates asset info records. Existing records are never updated.
#[derive(Debug, Clone)]
pub struct AssetInfoStore {
    paths: RegistryPaths,
}

impl AssetInfoStore {
    pub fn new(paths: RegistryPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &RegistryPaths {
        &self.paths
    }

    /// Whether an info file is present for (chain, address)
    pub fn exists(&self, chain: &Chain, address: &str) -> RegistryResult<bool> {
        validate_token_id(address)?;
        Ok(self.paths.asset_info_path(chain.handle, address).is_file())
    }

    pub fn read(&self, chain: &Chain, address: &str) -> RegistryResult<AssetInfo> {
        validate_token_id(address)?;
        let path = self.paths.asset_info_path(chain.handle, address);
        read_json_file(&path).map_err(|source| RegistryError::MissingAssetInfo {
            address: address.to_string(),
            path,
            source,
        })
    }

    /// Persist a new record; fails with `FileExists` when one is already there
    pub fn create(&self, chain: &Chain, info: &AssetInfo) -> RegistryResult<()> {
        validate_token_id(&info.id)?;

        let path = self.paths.asset_info_path(chain.handle, &info.id);
        create_json_file(&path, info)?;

        logger::debug(
            LogTag::Registry,
            &format!("Created {} for {}", path.display(), info.id),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{get_chain, ETHEREUM};
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> AssetInfoStore {
        AssetInfoStore::new(RegistryPaths::new(dir.path()))
    }

    #[test]
    fn test_create_then_read() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let eth = get_chain(ETHEREUM).unwrap();

        assert!(!store.exists(&eth, "0xABC").unwrap());
        let mut info = AssetInfo::template("0xABC");
        info.name = "Foo".to_string();
        store.create(&eth, &info).unwrap();

        assert!(store.exists(&eth, "0xABC").unwrap());
        assert_eq!(store.read(&eth, "0xABC").unwrap(), info);
    }

    #[test]
    fn test_create_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let eth = get_chain(ETHEREUM).unwrap();

        store.create(&eth, &AssetInfo::template("0xABC")).unwrap();
        let mut changed = AssetInfo::template("0xABC");
        changed.name = "Other".to_string();

        let err = store.create(&eth, &changed).unwrap_err();
        assert!(matches!(err, RegistryError::FileExists { .. }));
        assert_eq!(store.read(&eth, "0xABC").unwrap().name, "");
    }

    #[test]
    fn test_read_missing_names_address() {
        let dir = TempDir::new().unwrap();
        let eth = get_chain(ETHEREUM).unwrap();

        let err = store(&dir).read(&eth, "0xMISSING").unwrap_err();
        match err {
            RegistryError::MissingAssetInfo { address, path, .. } => {
                assert_eq!(address, "0xMISSING");
                assert!(path.ends_with("ethereum/assets/0xMISSING/info.json"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_read_malformed_is_missing_info() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let eth = get_chain(ETHEREUM).unwrap();
        let path = store.paths().asset_info_path(eth.handle, "0xBAD");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"name": "no id"}"#).unwrap();

        assert!(matches!(
            store.read(&eth, "0xBAD"),
            Err(RegistryError::MissingAssetInfo { .. })
        ));
    }

    #[test]
    fn test_ids_escaping_the_chain_dir_rejected() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("registry");
        let store = AssetInfoStore::new(RegistryPaths::new(&root));
        let eth = get_chain(ETHEREUM).unwrap();
        let absolute = dir.path().join("abs_target").to_string_lossy().to_string();

        for id in ["", "../../../escaped", absolute.as_str()] {
            let err = store.create(&eth, &AssetInfo::template(id)).unwrap_err();
            assert!(matches!(err, RegistryError::Parse(_)), "accepted {:?}", id);
            assert!(matches!(store.exists(&eth, id), Err(RegistryError::Parse(_))));
            assert!(matches!(store.read(&eth, id), Err(RegistryError::Parse(_))));
        }

        assert!(!dir.path().join("escaped").exists());
        assert!(!dir.path().join("abs_target").exists());
        assert!(!root.exists());
    }
}
