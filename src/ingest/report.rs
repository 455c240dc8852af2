/// Per-address outcomes of an ingestion run
use std::fmt;

use crate::chains::Chain;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// `info.json` and `logo.png` were written
    Created,
    /// An asset info record already existed; nothing was written
    AlreadyKnown,
    /// Processing stopped for this address; earlier writes for it are kept
    Failed(String),
}

impl fmt::Display for IngestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestOutcome::Created => write!(f, "created"),
            IngestOutcome::AlreadyKnown => write!(f, "already known"),
            IngestOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestEntry {
    pub address: String,
    pub outcome: IngestOutcome,
}

#[derive(Debug, Clone)]
pub struct IngestionReport {
    pub chain: Chain,
    pub source: String,
    pub entries: Vec<IngestEntry>,
}

impl IngestionReport {
    pub fn new(chain: Chain, source: impl Into<String>) -> Self {
        Self {
            chain,
            source: source.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, address: impl Into<String>, outcome: IngestOutcome) {
        self.entries.push(IngestEntry {
            address: address.into(),
            outcome,
        });
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, IngestOutcome::Created))
    }

    pub fn already_known(&self) -> usize {
        self.count(|o| matches!(o, IngestOutcome::AlreadyKnown))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, IngestOutcome::Failed(_)))
    }

    pub fn outcome_for(&self, address: &str) -> Option<&IngestOutcome> {
        self.entries
            .iter()
            .find(|e| e.address == address)
            .map(|e| &e.outcome)
    }

    fn count(&self, pred: impl Fn(&IngestOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} processed, {} created, {} already known, {} failed",
            self.chain.handle,
            self.total(),
            self.created(),
            self.already_known(),
            self.failed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{get_chain, ETHEREUM};

    #[test]
    fn test_counts_and_summary() {
        let mut report = IngestionReport::new(get_chain(ETHEREUM).unwrap(), "https://feed");
        report.push("0x1", IngestOutcome::Created);
        report.push("0x2", IngestOutcome::AlreadyKnown);
        report.push("0x3", IngestOutcome::Failed("HTTP 404".to_string()));
        report.push("0x4", IngestOutcome::Created);

        assert_eq!(report.total(), 4);
        assert_eq!(report.created(), 2);
        assert_eq!(report.already_known(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(
            report.summary(),
            "ethereum: 4 processed, 2 created, 1 already known, 1 failed"
        );
        assert_eq!(report.outcome_for("0x3").unwrap().to_string(), "failed: HTTP 404");
    }
}
