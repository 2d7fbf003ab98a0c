//! Score snapshots and conversation records
//!
//! Field names follow the analysis gateway's JSON object. The model output is
//! free text parsed into JSON, so every number is accepted as an integer, a
//! float (rounded), a numeric string or `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Scores for one analyzed conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    /// Overall prompt quality
    #[serde(default, deserialize_with = "de_score")]
    pub user_iq: i32,
    /// Overall response quality
    #[serde(default, deserialize_with = "de_score")]
    pub gpt_iq: i32,
    /// Overall interaction quality
    #[serde(default, deserialize_with = "de_score")]
    pub conversation_iq: i32,

    #[serde(
        default,
        deserialize_with = "de_option_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_clarity: Option<i32>,
    #[serde(
        default,
        deserialize_with = "de_option_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_depth: Option<i32>,
    #[serde(
        default,
        deserialize_with = "de_option_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_creativity: Option<i32>,

    #[serde(
        default,
        deserialize_with = "de_option_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub gpt_clarity: Option<i32>,
    #[serde(
        default,
        deserialize_with = "de_option_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub gpt_depth: Option<i32>,
    #[serde(
        default,
        deserialize_with = "de_option_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub gpt_flow: Option<i32>,

    #[serde(
        default,
        deserialize_with = "de_option_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub conversation_flow: Option<i32>,
    #[serde(
        default,
        deserialize_with = "de_option_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub conversation_synergy: Option<i32>,

    /// Free-text explanation from the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl ScoreSnapshot {
    /// Snapshot with only the three composite scores
    pub fn composites(user_iq: i32, gpt_iq: i32, conversation_iq: i32) -> Self {
        Self {
            user_iq,
            gpt_iq,
            conversation_iq,
            ..Self::default()
        }
    }

    /// Mean of the three composite scores
    pub fn composite_average(&self) -> f64 {
        (self.user_iq as f64 + self.gpt_iq as f64 + self.conversation_iq as f64) / 3.0
    }

    /// Sum of the three composite scores, widened so extreme inputs can't overflow
    pub fn composite_total(&self) -> i64 {
        i64::from(self.user_iq) + i64::from(self.gpt_iq) + i64::from(self.conversation_iq)
    }

    /// Value of one composite metric
    pub fn metric(&self, metric: Metric) -> i32 {
        match metric {
            Metric::UserIq => self.user_iq,
            Metric::GptIq => self.gpt_iq,
            Metric::ConversationIq => self.conversation_iq,
        }
    }
}

/// The three composite scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    UserIq,
    GptIq,
    ConversationIq,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::UserIq, Metric::GptIq, Metric::ConversationIq];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::UserIq => "UserIQ",
            Metric::GptIq => "GPTIQ",
            Metric::ConversationIq => "ConversationIQ",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One stored, analyzed conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub scores: ScoreSnapshot,
}

impl ConversationRecord {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>, scores: ScoreSnapshot) -> Self {
        Self {
            id: id.into(),
            title: String::from("New Analysis"),
            created_at,
            scores,
        }
    }
}

fn de_score<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_option_score(deserializer)?.unwrap_or(0))
}

fn de_option_score<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let opt = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(v) = opt else { return Ok(None) };
    let val = match v {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom("invalid numeric score"))?,
        serde_json::Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid score '{}'", s)))?
        }
        other => {
            return Err(D::Error::custom(format!(
                "expected a numeric score, got {}",
                other
            )))
        }
    };
    let rounded = val.round();
    if !rounded.is_finite() {
        return Err(D::Error::custom("non-finite score"));
    }
    Ok(Some(rounded as i32))
}
