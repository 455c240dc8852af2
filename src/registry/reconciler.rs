/// Token list reconciliation: add an existing asset to one of a chain's lists
///
/// Not safe for concurrent use on the same chain. Two processes appending to
/// the same list can lose an entry; callers must run one writer at a time.
use chrono::Utc;
use std::fmt::Write;
use std::io;

use super::asset_id::validate_token_id;
use super::asset_info::AssetInfoStore;
use super::token_list::TokenListStore;
use super::types::{AssetInfo, TokenList, TokenListEntry, TokenListVariant, Version};
use crate::chains::Chain;
use crate::config::{Config, RegistryConfig, UrlsConfig};
use crate::errors::{RegistryError, RegistryResult};
use crate::logger::{self, LogTag};
use crate::paths::{asset_logo_url, RegistryPaths};

pub struct Reconciler {
    assets: AssetInfoStore,
    lists: TokenListStore,
    registry: RegistryConfig,
    urls: UrlsConfig,
}

impl Reconciler {
    pub fn new(config: &Config) -> Self {
        let paths = RegistryPaths::new(&config.registry.root_dir);
        Self {
            assets: AssetInfoStore::new(paths.clone()),
            lists: TokenListStore::new(paths),
            registry: config.registry.clone(),
            urls: config.urls.clone(),
        }
    }

    /// Append `asset_id` to the `target` list of `chain` and bump its version
    ///
    /// Every list of the chain is checked first; an asset already present in
    /// any of them fails with `DuplicateAsset` and nothing is written. The
    /// entry is derived from the asset info stored for `token_address`.
    /// Returns the list as written.
    pub fn add_token_to_list(
        &self,
        chain: &Chain,
        asset_id: &str,
        token_address: &str,
        target: TokenListVariant,
    ) -> RegistryResult<TokenList> {
        validate_token_id(token_address)?;

        let mut target_list = None;
        for variant in TokenListVariant::ALL {
            let list = self.lists.read(chain, variant)?;
            if list.contains_asset(asset_id) {
                return Err(RegistryError::DuplicateAsset {
                    asset: asset_id.to_string(),
                    variant,
                    path: self.lists.path(chain, variant),
                });
            }
            if variant == target {
                target_list = Some(list);
            }
        }
        let current = match target_list {
            Some(list) => list,
            None => self.lists.read(chain, target)?,
        };
        let next_major = current.version.major.checked_add(1).ok_or_else(|| {
            RegistryError::storage(
                self.lists.path(chain, target),
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("version.major {} cannot be incremented", current.version.major),
                ),
            )
        })?;

        let info = self.assets.read(chain, token_address)?;
        let entry = derive_entry(&self.urls, chain, asset_id, token_address, &info);

        let pending = info.placeholder_fields();
        if !pending.is_empty() {
            logger::warning(
                LogTag::TokenList,
                &format!(
                    "{} is added with placeholder fields: {}",
                    asset_id,
                    pending.join(", ")
                ),
            );
        }

        let mut tokens = current.tokens;
        tokens.push(entry);

        let updated = TokenList {
            name: format!("{}: {}", self.registry.list_name_prefix, chain.name),
            logo_uri: self.urls.logo.clone(),
            timestamp: self.timestamp()?,
            tokens,
            version: Version {
                major: next_major,
            },
        };

        self.lists.write(chain, target, &updated)?;

        logger::info(
            LogTag::TokenList,
            &format!(
                "Added {} to {} {} list (version {} -> {})",
                asset_id,
                chain.handle,
                target,
                current.version.major,
                updated.version.major
            ),
        );

        Ok(updated)
    }

    fn timestamp(&self) -> RegistryResult<String> {
        let mut out = String::new();
        write!(out, "{}", Utc::now().format(&self.registry.time_format)).map_err(|_| {
            RegistryError::Config(format!(
                "Invalid time format '{}'",
                self.registry.time_format
            ))
        })?;
        Ok(out)
    }
}

/// Project asset info into a token list entry
pub fn derive_entry(
    urls: &UrlsConfig,
    chain: &Chain,
    asset_id: &str,
    token_address: &str,
    info: &AssetInfo,
) -> TokenListEntry {
    TokenListEntry {
        asset: asset_id.to_string(),
        token_type: info.asset_type.clone(),
        address: info.id.clone(),
        name: info.name.clone(),
        symbol: info.symbol.clone(),
        decimals: info.decimals,
        logo_uri: asset_logo_url(&urls.assets_app, chain.handle, token_address),
        pairs: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{get_chain, ETHEREUM};
    use crate::registry::types::Pair;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        config: Config,
        paths: RegistryPaths,
        chain: Chain,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let mut config = Config::default();
            config.registry.root_dir = dir.path().to_string_lossy().to_string();
            config.urls.assets_app = "https://assets.example.com".to_string();
            let paths = RegistryPaths::new(dir.path());
            Self {
                _dir: dir,
                config,
                paths,
                chain: get_chain(ETHEREUM).unwrap(),
            }
        }

        fn lists(&self) -> TokenListStore {
            TokenListStore::new(self.paths.clone())
        }

        fn write_list(&self, variant: TokenListVariant, major: u64, assets: &[&str]) {
            let list = TokenList {
                name: "Trust Wallet: Ethereum".to_string(),
                logo_uri: "https://example.com/logo.png".to_string(),
                timestamp: "2024-01-01T00:00:00.000000".to_string(),
                tokens: assets.iter().map(|a| entry(a)).collect(),
                version: Version { major },
            };
            self.lists().write(&self.chain, variant, &list).unwrap();
        }

        fn write_info(&self, address: &str, name: &str, symbol: &str) {
            let info = AssetInfo {
                name: name.to_string(),
                asset_type: "coin".to_string(),
                symbol: symbol.to_string(),
                decimals: 18,
                ..AssetInfo::template(address)
            };
            AssetInfoStore::new(self.paths.clone())
                .create(&self.chain, &info)
                .unwrap();
        }

        fn read(&self, variant: TokenListVariant) -> TokenList {
            self.lists().read(&self.chain, variant).unwrap()
        }
    }

    fn entry(asset: &str) -> TokenListEntry {
        TokenListEntry {
            asset: asset.to_string(),
            token_type: "ERC20".to_string(),
            address: asset.to_string(),
            name: "Existing".to_string(),
            symbol: "EX".to_string(),
            decimals: 8,
            logo_uri: String::new(),
            pairs: Vec::new(),
        }
    }

    #[test]
    fn test_append_bumps_version() {
        let fx = Fixture::new();
        fx.write_list(TokenListVariant::Default, 3, &["c60_t0x1"]);
        fx.write_list(TokenListVariant::Extended, 9, &[]);
        fx.write_info("0xDEAD", "Dead", "DEAD");

        let written = Reconciler::new(&fx.config)
            .add_token_to_list(&fx.chain, "ethereum_0xDEAD", "0xDEAD", TokenListVariant::Default)
            .unwrap();

        let on_disk = fx.read(TokenListVariant::Default);
        assert_eq!(on_disk, written);
        assert_eq!(on_disk.version.major, 4);
        assert_eq!(on_disk.tokens.len(), 2);
        assert_eq!(on_disk.tokens[0].asset, "c60_t0x1");
        assert_eq!(on_disk.tokens[1].asset, "ethereum_0xDEAD");
        assert_eq!(on_disk.name, "Trust Wallet: Ethereum");
        assert_eq!(on_disk.logo_uri, fx.config.urls.logo);
        assert_ne!(on_disk.timestamp, "2024-01-01T00:00:00.000000");

        // Sibling list untouched
        assert_eq!(fx.read(TokenListVariant::Extended).version.major, 9);
    }

    #[test]
    fn test_duplicate_in_sibling_list_writes_nothing() {
        let fx = Fixture::new();
        fx.write_list(TokenListVariant::Default, 3, &[]);
        fx.write_list(TokenListVariant::Extended, 5, &["c60_t0xDEAD"]);
        fx.write_info("0xDEAD", "Dead", "DEAD");
        let default_before = fx.read(TokenListVariant::Default);

        let err = Reconciler::new(&fx.config)
            .add_token_to_list(&fx.chain, "c60_t0xDEAD", "0xDEAD", TokenListVariant::Default)
            .unwrap_err();

        match err {
            RegistryError::DuplicateAsset { variant, path, .. } => {
                assert_eq!(variant, TokenListVariant::Extended);
                assert!(path.ends_with("ethereum/tokenlist-extended.json"));
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(fx.read(TokenListVariant::Default), default_before);
        assert_eq!(fx.read(TokenListVariant::Extended).version.major, 5);
    }

    #[test]
    fn test_duplicate_in_target_list() {
        let fx = Fixture::new();
        fx.write_list(TokenListVariant::Default, 1, &["c60_t0xDEAD"]);
        fx.write_list(TokenListVariant::Extended, 1, &[]);

        let err = Reconciler::new(&fx.config)
            .add_token_to_list(&fx.chain, "c60_t0xDEAD", "0xDEAD", TokenListVariant::Default)
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateAsset {
                variant: TokenListVariant::Default,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_asset_info_writes_nothing() {
        let fx = Fixture::new();
        fx.write_list(TokenListVariant::Default, 2, &[]);
        fx.write_list(TokenListVariant::Extended, 2, &[]);

        let err = Reconciler::new(&fx.config)
            .add_token_to_list(&fx.chain, "c60_t0xBEEF", "0xBEEF", TokenListVariant::Extended)
            .unwrap_err();

        assert!(matches!(err, RegistryError::MissingAssetInfo { .. }));
        assert_eq!(fx.read(TokenListVariant::Extended).version.major, 2);
    }

    #[test]
    fn test_missing_sibling_list_is_storage_failure() {
        let fx = Fixture::new();
        fx.write_list(TokenListVariant::Default, 2, &[]);
        fx.write_info("0xDEAD", "Dead", "DEAD");

        let err = Reconciler::new(&fx.config)
            .add_token_to_list(&fx.chain, "c60_t0xDEAD", "0xDEAD", TokenListVariant::Default)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Storage { .. }));
        assert_eq!(fx.read(TokenListVariant::Default).version.major, 2);
    }

    #[test]
    fn test_existing_pairs_survive_rewrite() {
        let fx = Fixture::new();
        let mut with_pairs = entry("c60_t0x1");
        with_pairs.pairs = vec![Pair {
            base: "c60".to_string(),
            lot_size: "1".to_string(),
            tick_size: String::new(),
        }];
        let list = TokenList {
            tokens: vec![with_pairs.clone()],
            version: Version { major: 1 },
            ..TokenList::default()
        };
        fx.lists()
            .write(&fx.chain, TokenListVariant::Default, &list)
            .unwrap();
        fx.write_list(TokenListVariant::Extended, 1, &[]);
        fx.write_info("0xDEAD", "Dead", "DEAD");

        Reconciler::new(&fx.config)
            .add_token_to_list(&fx.chain, "c60_t0xDEAD", "0xDEAD", TokenListVariant::Default)
            .unwrap();

        assert_eq!(fx.read(TokenListVariant::Default).tokens[0], with_pairs);
    }

    #[test]
    fn test_invalid_time_format_is_config_error() {
        let mut fx = Fixture::new();
        fx.config.registry.time_format = "%Q".to_string();
        fx.write_list(TokenListVariant::Default, 1, &[]);
        fx.write_list(TokenListVariant::Extended, 1, &[]);
        fx.write_info("0xDEAD", "Dead", "DEAD");

        let err = Reconciler::new(&fx.config)
            .add_token_to_list(&fx.chain, "c60_t0xDEAD", "0xDEAD", TokenListVariant::Default)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Config(_)));
        assert_eq!(fx.read(TokenListVariant::Default).version.major, 1);
    }

    #[test]
    fn test_derive_entry() {
        let urls = UrlsConfig::default();
        let chain = get_chain(ETHEREUM).unwrap();
        let info = AssetInfo {
            name: "Foo".to_string(),
            asset_type: "coin".to_string(),
            symbol: "FOO".to_string(),
            decimals: 18,
            ..AssetInfo::template("0xABC")
        };

        let entry = derive_entry(&urls, &chain, "c60_t0xABC", "0xABC", &info);
        assert_eq!(entry.address, "0xABC");
        assert_eq!(entry.decimals, 18);
        assert_eq!(entry.token_type, "coin");
        assert!(entry.logo_uri.contains("0xABC"));
        assert!(entry.logo_uri.starts_with(&urls.assets_app));
    }

    #[test]
    fn test_exhausted_version_writes_nothing() {
        let fx = Fixture::new();
        fx.write_list(TokenListVariant::Default, u64::MAX, &["c60_t0x1"]);
        fx.write_list(TokenListVariant::Extended, 1, &[]);
        fx.write_info("0xDEAD", "Dead", "DEAD");
        let before = fx.read(TokenListVariant::Default);

        let err = Reconciler::new(&fx.config)
            .add_token_to_list(&fx.chain, "c60_t0xDEAD", "0xDEAD", TokenListVariant::Default)
            .unwrap_err();

        match err {
            RegistryError::Storage { path, .. } => {
                assert!(path.ends_with("ethereum/tokenlist.json"))
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(fx.read(TokenListVariant::Default), before);
    }

    #[test]
    fn test_path_like_address_rejected() {
        let fx = Fixture::new();
        fx.write_list(TokenListVariant::Default, 1, &[]);
        fx.write_list(TokenListVariant::Extended, 1, &[]);
        let reconciler = Reconciler::new(&fx.config);

        for address in ["../../../outside", "/tmp/outside"] {
            let err = reconciler
                .add_token_to_list(&fx.chain, "c60_t0xDEAD", address, TokenListVariant::Default)
                .unwrap_err();
            assert!(matches!(err, RegistryError::Parse(_)), "accepted {}", address);
        }
        assert_eq!(fx.read(TokenListVariant::Default).version.major, 1);
    }
}
