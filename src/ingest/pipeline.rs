/// Batch ingestion of remote assets into the registry
///
/// A run is idempotent: assets that already have an `info.json` are reported
/// and skipped, so rerunning a feed writes nothing new.
use super::feed::AssetFeed;
use super::report::{IngestOutcome, IngestionReport};
use crate::chains::{self, Chain};
use crate::config::{Config, FeedConfig, RemoteConfig};
use crate::errors::{RegistryError, RegistryResult};
use crate::logger::{self, LogTag};
use crate::paths::RegistryPaths;
use crate::registry::{AssetInfoStore, LogoFetcher, LogoIngester, RemoteAsset};

/// Result of one configured feed in `ingest_all`
#[derive(Debug)]
pub struct FeedRun {
    pub feed: FeedConfig,
    pub result: RegistryResult<IngestionReport>,
}

pub struct RemoteIngestionPipeline<'a> {
    assets: AssetInfoStore,
    feed: &'a dyn AssetFeed,
    logos: LogoIngester<'a>,
    remote: RemoteConfig,
}

impl<'a> RemoteIngestionPipeline<'a> {
    pub fn new(config: &Config, feed: &'a dyn AssetFeed, logos: &'a dyn LogoFetcher) -> Self {
        Self {
            assets: AssetInfoStore::new(RegistryPaths::new(&config.registry.root_dir)),
            feed,
            logos: LogoIngester::new(logos),
            remote: config.remote.clone(),
        }
    }

    /// Fails with a parse error when `chain` is not enabled for remote ingestion
    pub fn ensure_supported(&self, chain: &Chain) -> RegistryResult<()> {
        if self.remote.supported_chains.contains(&chain.id) {
            return Ok(());
        }
        Err(RegistryError::Parse(format!(
            "remote ingestion is not enabled for chain {} ({})",
            chain.handle, chain.id
        )))
    }

    /// Ingest every candidate served at `source_url` for `chain`
    ///
    /// Only a failed fetch aborts the run. Faults for a single candidate are
    /// recorded against its address and the next candidate is processed.
    pub fn ingest_from_remote(
        &self,
        chain: &Chain,
        source_url: &str,
    ) -> RegistryResult<IngestionReport> {
        self.ensure_supported(chain)?;

        logger::info(
            LogTag::Ingest,
            &format!("Fetching {} assets from {}", chain.handle, source_url),
        );
        let candidates = self.feed.fetch_assets(source_url)?;
        logger::debug(
            LogTag::Ingest,
            &format!("{} candidates received", candidates.len()),
        );

        let mut report = IngestionReport::new(*chain, source_url);
        for candidate in &candidates {
            let outcome = match self.ingest_candidate(chain, candidate) {
                Ok(outcome) => outcome,
                Err(e) => {
                    let failure = RegistryError::item_failure(&candidate.address, &e);
                    logger::warning(LogTag::Ingest, &failure.to_string());
                    IngestOutcome::Failed(e.to_string())
                }
            };
            report.push(candidate.address.clone(), outcome);
        }

        logger::info(LogTag::Ingest, &report.summary());
        Ok(report)
    }

    fn ingest_candidate(
        &self,
        chain: &Chain,
        candidate: &RemoteAsset,
    ) -> RegistryResult<IngestOutcome> {
        if self.assets.exists(chain, &candidate.address)? {
            logger::debug(
                LogTag::Ingest,
                &format!("{} already known", candidate.address),
            );
            return Ok(IngestOutcome::AlreadyKnown);
        }

        self.assets.create(chain, &candidate.to_asset_info())?;

        let source = candidate
            .logo_source()
            .ok_or_else(|| RegistryError::Parse(format!("no logo URL for {}", candidate.address)))?;
        let target = self
            .assets
            .paths()
            .asset_logo_path(chain.handle, &candidate.address);
        self.logos.create(&target, source)?;

        logger::info(
            LogTag::Ingest,
            &format!("Created {} {} ({})", chain.handle, candidate.address, candidate.symbol),
        );
        Ok(IngestOutcome::Created)
    }

    /// Run every configured feed in order
    ///
    /// A failing feed is logged and recorded; later feeds still run.
    pub fn ingest_all(&self) -> Vec<FeedRun> {
        self.remote
            .feeds
            .iter()
            .map(|feed| {
                let result = match chains::get_chain(feed.chain_id) {
                    Some(chain) => self.ingest_from_remote(&chain, &feed.url),
                    None => Err(RegistryError::Config(format!(
                        "feed {} names unknown chain {}",
                        feed.url, feed.chain_id
                    ))),
                };
                if let Err(e) = &result {
                    logger::error(LogTag::Ingest, &format!("Feed {} failed: {}", feed.url, e));
                }
                FeedRun {
                    feed: feed.clone(),
                    result,
                }
            })
            .collect()
    }
}
