//! Assets manager: maintains a file-based registry of blockchain asset
//! metadata and per-chain token lists.
//!
//! Entry points:
//! - [`registry::TemplateCreator`] writes a blank `info.json` for curation
//! - [`registry::Reconciler`] appends a curated asset to a chain token list
//! - [`ingest::RemoteIngestionPipeline`] pulls new assets from a remote feed
//!
//! # Single writer
//!
//! Operations read, modify and rewrite whole files without locking. Only one
//! process may operate on a registry root at a time; running two writers
//! against the same chain can silently drop token list entries.

pub mod apis;
pub mod arguments;
pub mod chains;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod logger;
pub mod paths;
pub mod registry;

pub use errors::{RegistryError, RegistryResult};
