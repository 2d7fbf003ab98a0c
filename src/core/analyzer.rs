//! Analysis gateway client
//!
//! Sends a transcript to a hosted model through an OpenAI-compatible chat
//! completions gateway and parses the score object out of the reply text.

use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use tracing::{debug, error, info};

use crate::config::{Config, ANALYSIS_TEMPERATURE};
use crate::types::{AnalysisError, ScoreSnapshot};

lazy_static! {
    // Greedy: first '{' through last '}', across newlines
    static ref RE_JSON_OBJECT: Regex = Regex::new(r"\{[\s\S]*\}").unwrap();
}

/// Instructions for the scoring model
pub const SYSTEM_PROMPT: &str = r#"You are an expert conversation analyst. Analyze the given conversation transcript between a user and GPT, and provide detailed scores.

Score each aspect from 0-100:

UserIQ (Overall prompt quality):
- Clarity: How clear and well-structured are the user's prompts?
- Depth: How thoughtful and detailed are the questions?
- Creativity: How original and innovative are the prompts?

GPTIQ (Overall response quality):
- Clarity: How clear and understandable are GPT's responses?
- Depth: How comprehensive and detailed are the answers?
- Flow: How well does GPT maintain context and conversation flow?

ConversationIQ (Overall interaction quality):
- Flow: How natural is the conversation progression?
- Synergy: How well do user and GPT complement each other?

Also provide a brief justification (2-3 sentences) explaining the scores.

Return ONLY a valid JSON object with this exact structure:
{
  "user_iq": number,
  "user_clarity": number,
  "user_depth": number,
  "user_creativity": number,
  "gpt_iq": number,
  "gpt_clarity": number,
  "gpt_depth": number,
  "gpt_flow": number,
  "conversation_iq": number,
  "conversation_flow": number,
  "conversation_synergy": number,
  "justification": "string"
}"#;

/// Client for the scoring gateway
#[derive(Clone, Debug)]
pub struct GatewayClient {
    endpoint: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl GatewayClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            endpoint: config.gateway_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client,
        }
    }

    /// True when an API key is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Score one transcript
    pub async fn analyze(&self, transcript: &str) -> Result<ScoreSnapshot, AnalysisError> {
        if transcript.trim().is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }
        let api_key = self.api_key.as_deref().ok_or(AnalysisError::MissingApiKey)?;

        let digest = transcript_digest(transcript);
        info!(transcript = %&digest[..12], model = %self.model, "calling analysis gateway");

        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": transcript}
            ],
            "temperature": ANALYSIS_TEMPERATURE,
        });

        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %text, "analysis gateway error");
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => AnalysisError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => AnalysisError::PaymentRequired,
                other => AnalysisError::Gateway {
                    status: other.as_u16(),
                },
            });
        }

        let data: Value = res.json().await?;
        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .filter(|c| !c.trim().is_empty())
            .ok_or(AnalysisError::EmptyResponse)?;
        debug!(transcript = %&digest[..12], content, "analysis gateway reply");

        extract_scores(content)
    }
}

/// Parse the score object embedded in free model output
pub fn extract_scores(content: &str) -> Result<ScoreSnapshot, AnalysisError> {
    let object = RE_JSON_OBJECT
        .find(content)
        .ok_or(AnalysisError::InvalidJson)?;
    serde_json::from_str(object.as_str()).map_err(|_| AnalysisError::InvalidJson)
}

/// Hex SHA-256 of a transcript, logged in place of the transcript text
pub fn transcript_digest(transcript: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(transcript.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
