//! Analysis gateway errors

use thiserror::Error;

/// Failure while scoring a transcript
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Transcript is empty")]
    EmptyTranscript,

    /// Request body was not valid JSON or lacked a required field
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("GPTIQX_API_KEY is not configured")]
    MissingApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Payment required. Please add credits to your workspace.")]
    PaymentRequired,

    #[error("AI gateway error: {status}")]
    Gateway { status: u16 },

    #[error("No response from AI")]
    EmptyResponse,

    #[error("Invalid JSON response from AI")]
    InvalidJson,

    #[error("AI gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AnalysisError {
    /// HTTP status reported to API callers
    pub fn status_code(&self) -> u16 {
        match self {
            AnalysisError::EmptyTranscript | AnalysisError::InvalidRequest(_) => 400,
            AnalysisError::RateLimited => 429,
            AnalysisError::PaymentRequired => 402,
            _ => 500,
        }
    }
}
