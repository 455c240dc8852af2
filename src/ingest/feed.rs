/// Remote asset feeds
use crate::apis::client::HttpClient;
use crate::errors::RegistryResult;
use crate::registry::RemoteAsset;

/// Source of candidate assets for one chain
pub trait AssetFeed {
    /// Fetch the whole batch at `url`; any transport or decode fault fails
    /// the batch
    fn fetch_assets(&self, url: &str) -> RegistryResult<Vec<RemoteAsset>>;
}

/// Feeds are plain JSON arrays served over HTTP
impl AssetFeed for HttpClient {
    fn fetch_assets(&self, url: &str) -> RegistryResult<Vec<RemoteAsset>> {
        self.get_json::<Vec<RemoteAsset>>(url)
    }
}
