//! Anthropic analysis adapter (placeholder)
//!
//! Registered so the provider can be selected by configuration; until a
//! client exists every configured call fails with `not implemented`.

use async_trait::async_trait;
use factify_common::Settings;
use std::time::Duration;

use super::{AiAssessment, AnalysisProvider, ProviderError};

pub struct AnthropicAnalyzer {
    api_key: Option<String>,
    timeout: Duration,
}

impl AnthropicAnalyzer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            api_key: settings.credentials.anthropic().map(str::to_string),
            timeout: settings.ai.timeout(),
        }
    }
}

#[async_trait]
impl AnalysisProvider for AnthropicAnalyzer {
    fn name(&self) -> &'static str {
        "Anthropic"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn analyze(&self, _text: &str, _context: Option<&str>) -> Result<AiAssessment, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::NotConfigured);
        }
        Err(ProviderError::NotImplemented)
    }
}
