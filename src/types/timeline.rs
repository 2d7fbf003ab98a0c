//! Learning timeline entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Factors compared between consecutive conversations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TakeawayFactor {
    Clarity,
    Depth,
    Creativity,
    Flow,
    Synergy,
}

impl TakeawayFactor {
    pub const ALL: [TakeawayFactor; 5] = [
        TakeawayFactor::Clarity,
        TakeawayFactor::Depth,
        TakeawayFactor::Creativity,
        TakeawayFactor::Flow,
        TakeawayFactor::Synergy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TakeawayFactor::Clarity => "clarity",
            TakeawayFactor::Depth => "depth",
            TakeawayFactor::Creativity => "creativity",
            TakeawayFactor::Flow => "flow",
            TakeawayFactor::Synergy => "synergy",
        }
    }
}

/// One row of the learning timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub user_iq: i32,
    pub gpt_iq: i32,
    pub conversation_iq: i32,
    pub takeaway: String,
}
