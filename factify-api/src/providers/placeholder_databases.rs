//! Fact-check databases without a public API
//!
//! Snopes and PolitiFact publish no search API. The adapters exist so the
//! fan-out already has a slot for them; every call fails with
//! `not implemented` and contributes no signal.

use async_trait::async_trait;
use std::time::Duration;

use super::{FactCheckProvider, FactCheckReport, ProviderError};

pub struct SnopesDatabase {
    timeout: Duration,
}

impl SnopesDatabase {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl FactCheckProvider for SnopesDatabase {
    fn name(&self) -> &'static str {
        "Snopes"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn search(&self, _text: &str) -> Result<FactCheckReport, ProviderError> {
        Err(ProviderError::NotImplemented)
    }
}

pub struct PolitiFactDatabase {
    timeout: Duration,
}

impl PolitiFactDatabase {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl FactCheckProvider for PolitiFactDatabase {
    fn name(&self) -> &'static str {
        "PolitiFact"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn search(&self, _text: &str) -> Result<FactCheckReport, ProviderError> {
        Err(ProviderError::NotImplemented)
    }
}
