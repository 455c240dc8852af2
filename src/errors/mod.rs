/// Error handling for registry operations
///
/// Every variant names the address, URL or file path it concerns, so a
/// surfaced message is always attributable.
use std::path::PathBuf;
use thiserror::Error;

use crate::registry::TokenListVariant;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// Malformed asset identifier or unknown chain
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Duplicate asset {asset}, already exists in {} ({variant})", path.display())]
    DuplicateAsset {
        asset: String,
        variant: TokenListVariant,
        path: PathBuf,
    },

    #[error("Missing asset info for {address} at {}: {source}", path.display())]
    MissingAssetInfo {
        address: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File already exists: {}", path.display())]
    FileExists { path: PathBuf },

    /// Read/write/flush fault at a specific file. JSON decode faults land
    /// here too, converted through `std::io::Error`.
    #[error("Storage failure at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Remote fetch failed for {url}: {reason}")]
    RemoteFetch { url: String, reason: String },

    /// Scoped to one candidate of a batch ingestion
    #[error("Failed to ingest {address}: {reason}")]
    ItemFailure { address: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// Whether retrying the same call could succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RegistryError::Storage { .. } | RegistryError::RemoteFetch { .. }
        )
    }

    pub fn storage(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        RegistryError::Storage {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn remote_fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        RegistryError::RemoteFetch {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn item_failure(address: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        RegistryError::ItemFailure {
            address: address.into(),
            reason: reason.to_string(),
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;
