//! Curated source discovery
//!
//! Stands in for topic search against news or academic indexes: every request
//! is pointed at the same established fact-checking organisations, scored by
//! the source-credibility table.

use async_trait::async_trait;
use std::time::Duration;

use super::{ProviderError, SourceDiscovery};
use crate::credibility;
use crate::models::Source;

/// A fact-checking organisation offered to every caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedSource {
    /// Short display name (used by GET /sources)
    pub name: &'static str,
    /// Full title shown alongside a verdict
    pub title: &'static str,
    pub url: &'static str,
}

pub const CURATED_SOURCES: &[CuratedSource] = &[
    CuratedSource {
        name: "Reuters Fact Check",
        title: "Reuters Fact Check",
        url: "https://www.reuters.com/fact-check/",
    },
    CuratedSource {
        name: "AP Fact Check",
        title: "Associated Press Fact Check",
        url: "https://apnews.com/hub/ap-fact-check",
    },
    CuratedSource {
        name: "Snopes",
        title: "Snopes",
        url: "https://www.snopes.com/",
    },
    CuratedSource {
        name: "PolitiFact",
        title: "PolitiFact",
        url: "https://www.politifact.com/",
    },
    CuratedSource {
        name: "FactCheck.org",
        title: "FactCheck.org",
        url: "https://www.factcheck.org/",
    },
];

impl CuratedSource {
    fn to_source(self) -> Source {
        Source {
            title: self.title.to_string(),
            url: self.url.to_string(),
            credibility_score: Some(credibility::assess(self.url).credibility),
        }
    }
}

pub struct CuratedSourceDiscovery {
    timeout: Duration,
}

impl CuratedSourceDiscovery {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl SourceDiscovery for CuratedSourceDiscovery {
    fn name(&self) -> &'static str {
        "Curated"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn discover(&self, _text: &str, limit: usize) -> Result<Vec<Source>, ProviderError> {
        Ok(CURATED_SOURCES
            .iter()
            .take(limit)
            .map(|source| source.to_source())
            .collect())
    }
}
