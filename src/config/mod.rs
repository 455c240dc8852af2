//! Configuration: schemas with embedded defaults, loaded from TOML

pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{Config, FeedConfig, HttpConfig, RegistryConfig, RemoteConfig, UrlsConfig};
pub use utils::{load_config, load_config_from_path, resolve_config_path, save_config};
