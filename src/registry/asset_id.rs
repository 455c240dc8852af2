//! Composite asset identifiers
//!
//! Canonical form is `c<coinId>_t<token>` (for example `c60_t0xABC`); a bare
//! `c<coinId>` names the chain's native coin. The handle form
//! `<chain-handle>_<token>` (for example `ethereum_0xABC`) is accepted too.

use std::fmt;
use std::path::{Component, Path};

use crate::chains::{self, Chain};
use crate::errors::{RegistryError, RegistryResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetId {
    pub chain: Chain,
    pub token_id: Option<String>,
}

impl AssetId {
    pub fn new(chain: Chain, token_id: impl Into<String>) -> Self {
        Self {
            chain,
            token_id: Some(token_id.into()),
        }
    }

    /// Token part, or a parse error naming the identifier when absent
    pub fn require_token(&self) -> RegistryResult<&str> {
        self.token_id
            .as_deref()
            .ok_or_else(|| RegistryError::Parse(format!("asset id '{}' has no token part", self)))
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token_id {
            Some(token) => write!(f, "c{}_t{}", self.chain.id, token),
            None => write!(f, "c{}", self.chain.id),
        }
    }
}

/// Check that a token id is usable as one directory name under a chain
///
/// Rejects empty ids, path separators, `.`/`..` and absolute paths.
pub fn validate_token_id(token: &str) -> RegistryResult<()> {
    let invalid = |why: &str| RegistryError::Parse(format!("invalid token id '{}': {}", token, why));

    if token.trim().is_empty() {
        return Err(invalid("empty"));
    }
    if token.contains('/') || token.contains('\\') {
        return Err(invalid("contains a path separator"));
    }
    if Path::new(token).is_absolute() {
        return Err(invalid("absolute path"));
    }

    let mut components = Path::new(token).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("not a single path component")),
    }
}

/// Parse an asset identifier in either accepted form
pub fn parse_asset_id(raw: &str) -> RegistryResult<AssetId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RegistryError::Parse("empty asset id".to_string()));
    }

    let (head, rest) = match raw.split_once('_') {
        Some((head, rest)) => (head, Some(rest)),
        None => (raw, None),
    };

    let coin = head
        .strip_prefix('c')
        .filter(|c| !c.is_empty() && c.bytes().all(|b| b.is_ascii_digit()));

    if let Some(coin) = coin {
        let coin_id: u32 = coin
            .parse()
            .map_err(|_| RegistryError::Parse(format!("bad coin id in asset id '{}'", raw)))?;
        let chain = chains::get_chain(coin_id).ok_or_else(|| {
            RegistryError::Parse(format!("unknown chain {} in asset id '{}'", coin_id, raw))
        })?;

        let token_id = match rest {
            None => None,
            Some(part) => match part.strip_prefix('t') {
                Some(token) if !token.is_empty() => {
                    validate_token_id(token)?;
                    Some(token.to_string())
                }
                _ => {
                    return Err(RegistryError::Parse(format!(
                        "bad token part in asset id '{}'",
                        raw
                    )))
                }
            },
        };

        return Ok(AssetId { chain, token_id });
    }

    let chain = chains::get_chain_by_handle(head).ok_or_else(|| {
        RegistryError::Parse(format!("unknown chain '{}' in asset id '{}'", head, raw))
    })?;

    match rest {
        Some(token) if !token.is_empty() => {
            validate_token_id(token)?;
            Ok(AssetId::new(chain, token))
        }
        Some(_) => Err(RegistryError::Parse(format!("bad token part in asset id '{}'", raw))),
        None => Ok(AssetId {
            chain,
            token_id: None,
        }),
    }
}
