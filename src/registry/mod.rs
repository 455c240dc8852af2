//! On-disk asset registry
//!
//! Stores (`AssetInfoStore`, `TokenListStore`, `LogoIngester`) own one file
//! kind each. `Reconciler` and `TemplateCreator` build on them.
//!
//! All writers assume a single process per registry root. Files are
//! replaced through temp-then-rename, which prevents torn files but does not
//! serialize concurrent writers.

pub mod asset_id;
pub mod asset_info;
pub mod json_file;
pub mod logo;
pub mod reconciler;
pub mod template;
pub mod token_list;
pub mod types;

pub use asset_id::{parse_asset_id, AssetId};
pub use asset_info::AssetInfoStore;
pub use json_file::format_json_file;
pub use logo::{LogoFetcher, LogoIngester};
pub use reconciler::{derive_entry, Reconciler};
pub use template::TemplateCreator;
pub use token_list::TokenListStore;
pub use types::{
    AssetInfo, Link, Pair, RemoteAsset, TokenList, TokenListEntry, TokenListVariant, Version,
};
