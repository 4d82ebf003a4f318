//! Gemini `generateContent` client

use crate::config::AnalysisConfig;
use crate::{AnalysisError, AnalysisRequest, AnalysisResult, AnalysisService};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

/// Asks a Gemini model for a structured analysis of the position.
#[derive(Debug, Clone)]
pub struct GeminiService {
    client: reqwest::Client,
    config: AnalysisConfig,
    api_key: Option<String>,
}

impl GeminiService {
    /// Build the client. A missing API key is not an error here; each
    /// request then fails with [`AnalysisError::MissingCredential`].
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        let api_key = config.api_key();
        if api_key.is_none() {
            info!(var = %config.api_key_env, "no API key configured, analysis will be unavailable");
        }
        Self::with_key(config, api_key)
    }

    pub fn with_key(config: AnalysisConfig, api_key: Option<String>) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }
}

#[async_trait]
impl AnalysisService for GeminiService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AnalysisError::MissingCredential(self.config.api_key_env.clone()))?;

        debug!(model = %self.config.model, fen = %request.fen, "requesting analysis");

        let response = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", key)
            .json(&request_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateContentResponse = response.json().await?;
        parse_reply(reply)
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

pub fn build_prompt(request: &AnalysisRequest) -> String {
    format!(
        "Analyze this chess position (FEN: {}).\n\
         The move history is: {}.\n\
         Provide a professional analysis in JSON format as if you were a \
         Grandmaster-turned-Data-Analyst.\n\
         The analysis should include an evaluation (e.g., +1.2), the best next move, \
         a brief commentary on the strategic implications, and a suggested follow-up \
         line of 3 moves.",
        request.fen,
        request.history.join(", ")
    )
}

/// Request body asking for JSON constrained to the four result fields.
pub fn request_body(request: &AnalysisRequest) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": build_prompt(request) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "evaluation": { "type": "STRING" },
                    "bestMove": { "type": "STRING" },
                    "commentary": { "type": "STRING" },
                    "suggestedLine": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    }
                },
                "required": ["evaluation", "bestMove", "commentary", "suggestedLine"]
            }
        }
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// Decode the model's JSON text into a result.
///
/// A reply without text is treated as `{}`, which fails as malformed.
pub fn parse_reply(reply: GenerateContentResponse) -> Result<AnalysisResult, AnalysisError> {
    let text = reply.text().unwrap_or("{}").trim();
    if text.is_empty() {
        return Err(AnalysisError::EmptyReply);
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
