//! Google AI (Gemini) analysis adapter (placeholder)

use async_trait::async_trait;
use factify_common::Settings;
use std::time::Duration;

use super::{AiAssessment, AnalysisProvider, ProviderError};

pub struct GeminiAnalyzer {
    api_key: Option<String>,
    timeout: Duration,
}

impl GeminiAnalyzer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            api_key: settings.credentials.google_ai().map(str::to_string),
            timeout: settings.ai.timeout(),
        }
    }
}

#[async_trait]
impl AnalysisProvider for GeminiAnalyzer {
    fn name(&self) -> &'static str {
        "GoogleAI"
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
