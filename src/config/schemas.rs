/// Configuration schemas - all config structures defined once with defaults
///
/// Every section is optional in the TOML file; missing keys fall back to the
/// defaults declared here.
use crate::config_struct;

// ============================================================================
// REGISTRY
// ============================================================================

config_struct! {
    /// On-disk registry layout and token list rendering
    pub struct RegistryConfig {
        /// Directory holding one sub-directory per chain handle
        root_dir: String = "blockchains".to_string(),

        /// chrono format string for token list timestamps
        time_format: String = "%Y-%m-%dT%H:%M:%S%.6f".to_string(),

        /// Token list names are rendered as "<prefix>: <chain name>"
        list_name_prefix: String = "Trust Wallet".to_string(),
    }
}

// ============================================================================
// URLS
// ============================================================================

config_struct! {
    /// Public URLs used when deriving token list content
    pub struct UrlsConfig {
        /// Base URL of the assets app serving logos
        assets_app: String = "https://assets-cdn.trustwallet.com".to_string(),

        /// Branding logo written into every token list
        logo: String = "https://trustwallet.com/assets/images/favicon.png".to_string(),
    }
}

// ============================================================================
// HTTP
// ============================================================================

config_struct! {
    /// HTTP client settings for feed and logo downloads
    pub struct HttpConfig {
        /// Request timeout in seconds; 0 disables the timeout
        timeout_secs: u64 = 0,

        user_agent: String = concat!("assets-manager/", env!("CARGO_PKG_VERSION")).to_string(),
    }
}

// ============================================================================
// REMOTE INGESTION
// ============================================================================

config_struct! {
    /// One remote token feed
    pub struct FeedConfig {
        /// Chain coin id the feed's tokens belong to
        chain_id: u32 = 0,
        url: String = String::new(),
    }
}

config_struct! {
    /// Remote ingestion settings
    pub struct RemoteConfig {
        /// Coin ids allowed on the remote ingestion path
        /// (Ethereum, Polygon, BNB Beacon Chain, Aurora)
        supported_chains: Vec<u32> = vec![60, 966, 714, 1323161554],

        /// Feeds processed by `ingest-all`, in order
        feeds: Vec<FeedConfig> = Vec::new(),
    }
}

// ============================================================================
// ROOT
// ============================================================================

config_struct! {
    /// Root configuration
    pub struct Config {
        registry: RegistryConfig = RegistryConfig::default(),
        urls: UrlsConfig = UrlsConfig::default(),
        http: HttpConfig = HttpConfig::default(),
        remote: RemoteConfig = RemoteConfig::default(),
    }
}
