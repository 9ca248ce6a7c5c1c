//! Incoming fact-check requests and their validation

use factify_common::config::TextLimits;
use serde::Deserialize;
use thiserror::Error;

/// POST /fact-check body as it arrives on the wire
///
/// `text` is optional here so a missing field is reported as a validation
/// failure rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactCheckPayload {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

/// Validated, immutable fact-check request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    text: String,
    url: Option<String>,
    context: Option<String>,
}

/// Why a payload was refused before any provider was contacted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("Text is too long (max {max} characters)")]
    TooLong { max: usize },
}

impl CheckRequest {
    /// Validate a payload against configured length bounds
    ///
    /// The lower bound applies to the trimmed text, the upper bound to the
    /// text as submitted. Lengths are counted in characters. Blank text is
    /// refused even when the configured minimum is zero.
    pub fn validate(payload: FactCheckPayload, limits: &TextLimits) -> Result<Self, ValidationError> {
        let text = payload.text.unwrap_or_default();

        let min = limits.min_text_length.max(1);
        if text.trim().chars().count() < min {
            return Err(ValidationError::TooShort { min });
        }

        if text.chars().count() > limits.max_text_length {
            return Err(ValidationError::TooLong {
                max: limits.max_text_length,
            });
        }

        Ok(Self {
            text,
            url: non_blank(payload.url),
            context: non_blank(payload.context),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
