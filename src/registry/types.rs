/// Registry record types: asset info, token lists, remote candidates
///
/// Placeholder convention: an empty string (or `0` for decimals) means the
/// field is awaiting manual curation. Keys are always serialized, and missing
/// keys decode as placeholders, so a read-write cycle is lossless.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default classification for assets created from a remote feed
pub const DEFAULT_ASSET_TYPE: &str = "coin";

// ============================================================================
// ASSET INFO
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// Per-asset metadata record (`info.json`)
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub asset_type: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub explorer: String,
    #[serde(default)]
    pub status: String,
    /// On-chain address; the only required key
    pub id: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AssetInfo {
    /// Fully-placeholder record for manual curation
    pub fn template(id: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            asset_type: String::new(),
            symbol: String::new(),
            decimals: 0,
            website: String::new(),
            explorer: String::new(),
            status: String::new(),
            id: id.into(),
            links: vec![Link::default()],
            tags: vec![String::new()],
        }
    }

    /// Names of scalar fields still holding placeholders
    pub fn placeholder_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("type", &self.asset_type),
            ("symbol", &self.symbol),
            ("website", &self.website),
            ("explorer", &self.explorer),
            ("status", &self.status),
        ] {
            if value.trim().is_empty() {
                fields.push(field);
            }
        }
        if self.decimals == 0 {
            fields.push("decimals");
        }
        fields
    }
}

// ============================================================================
// TOKEN LISTS
// ============================================================================

/// Curation tier of a chain's token list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenListVariant {
    Default,
    Extended,
}

impl TokenListVariant {
    /// Every variant, in duplicate-scan order
    pub const ALL: [TokenListVariant; 2] = [TokenListVariant::Default, TokenListVariant::Extended];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenListVariant::Default => "default",
            TokenListVariant::Extended => "extended",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            TokenListVariant::Default => "tokenlist.json",
            TokenListVariant::Extended => "tokenlist-extended.json",
        }
    }
}

impl fmt::Display for TokenListVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TokenListVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(TokenListVariant::Default),
            "extended" => Ok(TokenListVariant::Extended),
            other => Err(format!(
                "unknown token list '{}', expected 'default' or 'extended'",
                other
            )),
        }
    }
}

/// Trading pair attached to a token list entry, preserved verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub base: String,
    #[serde(rename = "lotSize", default, skip_serializing_if = "String::is_empty")]
    pub lot_size: String,
    #[serde(rename = "tickSize", default, skip_serializing_if = "String::is_empty")]
    pub tick_size: String,
}

/// One token in a token list, projected from its asset info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenListEntry {
    pub asset: String,
    #[serde(rename = "type", default)]
    pub token_type: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub decimals: u32,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<Pair>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    #[serde(default)]
    pub major: u64,
}

/// A chain's token list (`tokenlist.json` / `tokenlist-extended.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenList {
    pub name: String,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    pub timestamp: String,
    pub tokens: Vec<TokenListEntry>,
    pub version: Version,
}

impl TokenList {
    pub fn contains_asset(&self, asset: &str) -> bool {
        self.tokens.iter().any(|t| t.asset == asset)
    }
}

// ============================================================================
// REMOTE FEED
// ============================================================================

/// A token offered by a remote feed, awaiting ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAsset {
    #[serde(rename = "chainId", default)]
    pub chain_id: u64,
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub decimals: u32,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: String,
    #[serde(rename = "originLogoURI", default, skip_serializing_if = "Option::is_none")]
    pub origin_logo_uri: Option<String>,
}

impl RemoteAsset {
    /// Logo source to download: the override when present and non-empty,
    /// otherwise the primary URL
    pub fn logo_source(&self) -> Option<&str> {
        self.origin_logo_uri
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .or_else(|| Some(self.logo_uri.trim()).filter(|url| !url.is_empty()))
    }

    /// Template asset info for a token seen for the first time
    pub fn to_asset_info(&self) -> AssetInfo {
        AssetInfo {
            name: self.name.clone(),
            asset_type: DEFAULT_ASSET_TYPE.to_string(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
            ..AssetInfo::template(self.address.clone())
        }
    }
}
