//! Remote ingestion: fetch candidate assets from a feed and add the ones the
//! registry does not know yet

pub mod feed;
pub mod pipeline;
pub mod report;

pub use feed::AssetFeed;
pub use pipeline::{FeedRun, RemoteIngestionPipeline};
pub use report::{IngestEntry, IngestOutcome, IngestionReport};
