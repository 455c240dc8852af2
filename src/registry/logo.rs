/// Logo materialization (`<root>/<chain>/assets/<address>/logo.png`)
///
/// Only PNG sources are accepted; the downloaded bytes are stored unchanged
/// once their signature checks out.
use std::path::Path;

use super::json_file::write_atomic;
use crate::apis::client::HttpClient;
use crate::errors::{RegistryError, RegistryResult};
use crate::logger::{self, LogTag};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Source of logo image bytes
pub trait LogoFetcher {
    fn fetch(&self, url: &str) -> RegistryResult<Vec<u8>>;
}

impl LogoFetcher for HttpClient {
    fn fetch(&self, url: &str) -> RegistryResult<Vec<u8>> {
        self.get_bytes(url)
    }
}

pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(PNG_SIGNATURE)
}

pub struct LogoIngester<'a> {
    fetcher: &'a dyn LogoFetcher,
}

impl<'a> LogoIngester<'a> {
    pub fn new(fetcher: &'a dyn LogoFetcher) -> Self {
        Self { fetcher }
    }

    /// Download `source_url` and store it at `target`, creating directories.
    /// Returns the number of bytes written.
    pub fn create(&self, target: &Path, source_url: &str) -> RegistryResult<usize> {
        let bytes = self.fetcher.fetch(source_url)?;

        if bytes.is_empty() {
            return Err(RegistryError::remote_fetch(source_url, "empty logo body"));
        }
        if !is_png(&bytes) {
            return Err(RegistryError::remote_fetch(
                source_url,
                "logo is not a PNG image",
            ));
        }

        write_atomic(target, &bytes, true)?;

        logger::debug(
            LogTag::Logo,
            &format!(
                "Stored {} bytes from {} at {}",
                bytes.len(),
                source_url,
                target.display()
            ),
        );
        Ok(bytes.len())
    }
}
