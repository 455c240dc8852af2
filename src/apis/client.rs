/// Base HTTP client for feed and logo downloads
///
/// Blocking: every call holds the calling thread until the response body is
/// read. No retries.
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::config::HttpConfig;
use crate::errors::{RegistryError, RegistryResult};
use crate::logger::{self, LogTag};

/// Request counters for one client
#[derive(Debug, Default)]
pub struct RequestStats {
    succeeded: AtomicU64,
    failed: AtomicU64,
    total_ms: AtomicU64,
}

impl RequestStats {
    fn record(&self, success: bool, elapsed: Duration) {
        if success {
            self.succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
        self.total_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn succeeded(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn average_ms(&self) -> f64 {
        let total = self.succeeded() + self.failed();
        if total == 0 {
            return 0.0;
        }
        self.total_ms.load(Ordering::Relaxed) as f64 / total as f64
    }
}

/// HTTP client wrapper with optional timeout
pub struct HttpClient {
    client: Client,
    timeout: Option<Duration>,
    stats: RequestStats,
}

impl HttpClient {
    /// Build a client from configuration; `timeout_secs == 0` means no timeout
    pub fn new(config: &HttpConfig) -> RegistryResult<Self> {
        let timeout = match config.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let mut builder = Client::builder().timeout(timeout);
        if !config.user_agent.is_empty() {
            builder = builder.user_agent(config.user_agent.clone());
        }

        let client = builder
            .build()
            .map_err(|e| RegistryError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout,
            stats: RequestStats::default(),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn stats(&self) -> &RequestStats {
        &self.stats
    }

    fn execute(&self, url: &str) -> RegistryResult<Response> {
        logger::debug(LogTag::Api, &format!("GET {}", url));

        let start = Instant::now();
        let result = self.client.get(url).send();
        let elapsed = start.elapsed();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.stats.record(false, elapsed);
                return Err(RegistryError::remote_fetch(
                    url,
                    format!("Request failed: {}", e),
                ));
            }
        };

        let status = response.status();
        if !status.is_success() {
            self.stats.record(false, elapsed);
            let body = response.text().unwrap_or_default();
            let body = body.trim();
            let reason = if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, truncate(body, 200))
            };
            return Err(RegistryError::remote_fetch(url, reason));
        }

        self.stats.record(true, elapsed);
        logger::verbose(
            LogTag::Api,
            &format!("GET {} -> {} in {}ms", url, status, elapsed.as_millis()),
        );
        Ok(response)
    }

    /// GET a URL and decode its JSON body
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> RegistryResult<T> {
        let response = self.execute(url)?;
        response
            .json::<T>()
            .map_err(|e| RegistryError::remote_fetch(url, format!("Failed to parse JSON: {}", e)))
    }

    /// GET a URL and return its raw body
    pub fn get_bytes(&self, url: &str) -> RegistryResult<Vec<u8>> {
        let response = self.execute(url)?;
        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| RegistryError::remote_fetch(url, format!("Failed to read body: {}", e)))
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_means_none() {
        let client = HttpClient::new(&HttpConfig::default()).unwrap();
        assert_eq!(client.timeout(), None);

        let config = HttpConfig {
            timeout_secs: 15,
            ..HttpConfig::default()
        };
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_stats_average() {
        let stats = RequestStats::default();
        assert_eq!(stats.average_ms(), 0.0);
        stats.record(true, Duration::from_millis(100));
        stats.record(false, Duration::from_millis(300));
        assert_eq!(stats.succeeded(), 1);
        assert_eq!(stats.failed(), 1);
        assert_eq!(stats.average_ms(), 200.0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
