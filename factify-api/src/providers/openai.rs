//! OpenAI chat-completion analysis adapter
//!
//! Sends a system + user message pair asking for a JSON object and validates
//! the returned structure before handing it to the aggregator.

use async_trait::async_trait;
use factify_common::Settings;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

use super::{http_client, AiAssessment, AnalysisProvider, ProviderError};
use crate::models::VerdictStatus;

/// Fields the model must return for the assessment to be usable
pub const REQUIRED_FIELDS: [&str; 3] = ["status", "confidence", "assessment"];

const SYSTEM_PROMPT: &str = r#"You are a professional fact-checker with expertise in identifying misinformation, verifying claims, and assessing source credibility.

Your task is to analyze the given text and provide a structured fact-check assessment.

Return your analysis as a JSON object with these fields:
{
  "status": "verified|questionable|false|mixed",
  "confidence": 0.0-1.0,
  "key_claims": ["claim1", "claim2"],
  "assessment": "detailed analysis of factual accuracy",
  "red_flags": ["flag1", "flag2"] or [],
  "verification_suggestions": ["suggestion1", "suggestion2"],
  "reasoning": "explanation of your assessment"
}

Guidelines:
- "verified": Strong evidence supports the claims
- "questionable": Insufficient evidence or requires more verification
- "false": Evidence contradicts the claims
- "mixed": Some claims accurate, others not

Be thorough but concise. Focus on factual accuracy, not opinions."#;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiAnalyzer {
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenAiAnalyzer {
    pub fn from_settings(settings: &Settings) -> reqwest::Result<Self> {
        let ai = &settings.ai;
        Ok(Self {
            api_key: settings.credentials.openai().map(str::to_string),
            base_url: ai.base_url.trim_end_matches('/').to_string(),
            model: ai.model.clone(),
            max_tokens: ai.max_tokens,
            temperature: ai.temperature,
            timeout: ai.timeout(),
            client: http_client(ai.timeout())?,
        })
    }

    /// System + user messages for one request
    pub fn build_messages(text: &str, context: Option<&str>) -> Vec<ChatMessage> {
        let mut user_content = format!("Please fact-check this text: {}", text);
        if let Some(context) = context {
            user_content.push_str("\n\nAdditional context: ");
            user_content.push_str(context);
        }

        vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: user_content,
            },
        ]
    }
}

#[async_trait]
impl AnalysisProvider for OpenAiAnalyzer {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn analyze(&self, text: &str, context: Option<&str>) -> Result<AiAssessment, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;

        let request = ChatRequest {
            model: &self.model,
            messages: Self::build_messages(text, context),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: ResponseFormat { kind: "json_object" },
        };

        debug!(model = %self.model, text_chars = text.chars().count(), "OpenAI chat request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| {
                ProviderError::invalid(format!("chat response: {}", e.without_url()))
            })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ProviderError::invalid("empty response from AI"))?;

        parse_assessment(&content)
    }
}

/// Validate the model's JSON content into an [`AiAssessment`]
///
/// Requires `status`, `confidence` and `assessment`. Unknown statuses become
/// `questionable`; confidence is clamped to 0.0-1.0 and may be a numeric string.
pub fn parse_assessment(content: &str) -> Result<AiAssessment, ProviderError> {
    let value: Value = serde_json::from_str(strip_code_fence(content))
        .map_err(|e| ProviderError::invalid(format!("not JSON: {}", e)))?;

    let fields = value
        .as_object()
        .ok_or_else(|| ProviderError::invalid("expected a JSON object"))?;

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
        return Err(ProviderError::invalid(format!("missing required field: {}", missing)));
    }

    let status = fields
        .get("status")
        .and_then(Value::as_str)
        .map(VerdictStatus::from_label)
        .unwrap_or_default();

    let confidence = parse_confidence(&fields["confidence"])?;

    let assessment = match &fields["assessment"] {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    Ok(AiAssessment {
        status,
        confidence,
        assessment,
        key_claims: string_list(fields, "key_claims"),
        red_flags: string_list(fields, "red_flags"),
        verification_suggestions: string_list(fields, "verification_suggestions"),
        reasoning: fields
            .get("reasoning")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn parse_confidence(value: &Value) -> Result<f64, ProviderError> {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match raw {
        Some(c) if c.is_finite() => Ok(c.clamp(0.0, 1.0)),
        _ => Err(ProviderError::invalid(format!("confidence is not a number: {}", value))),
    }
}

fn string_list(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Models occasionally wrap JSON in a markdown fence despite `json_object` mode
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
