//! Long-run profile statistics over a user's whole history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prompting skill tracked across the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillArea {
    Clarity,
    Depth,
    Creativity,
}

impl SkillArea {
    pub const ALL: [SkillArea; 3] = [SkillArea::Clarity, SkillArea::Depth, SkillArea::Creativity];

    pub fn name(&self) -> &'static str {
        match self {
            SkillArea::Clarity => "clarity",
            SkillArea::Depth => "depth",
            SkillArea::Creativity => "creativity",
        }
    }

    /// Phrase used when this is the strongest skill
    pub fn strength_phrase(&self) -> &'static str {
        match self {
            SkillArea::Clarity => "clear and well-structured prompts",
            SkillArea::Depth => "thoughtful and detailed questions",
            SkillArea::Creativity => "creative and original thinking",
        }
    }

    /// Phrase used when this is the weakest skill
    pub fn growth_phrase(&self) -> &'static str {
        match self {
            SkillArea::Clarity => "prompt clarity",
            SkillArea::Depth => "question depth",
            SkillArea::Creativity => "creative exploration",
        }
    }
}

impl std::fmt::Display for SkillArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A conversation worth pointing at, with its ConversationIQ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub score: i32,
}

/// Early vs recent ConversationIQ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Rounded mean of the first sessions
    pub initial_avg_iq: i32,
    /// Rounded mean of the latest sessions
    pub current_avg_iq: i32,
    pub improvement: i32,
    /// One-paragraph learning summary
    pub summary: String,
}

/// Profile statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total: u32,
    pub avg_user_iq: i32,
    pub avg_gpt_iq: i32,
    pub avg_conversation_iq: i32,
    pub last_active: DateTime<Utc>,
    pub first_conversation: Milestone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_above_80: Option<Milestone>,
    pub best_conversation: Milestone,
    pub strongest_area: SkillArea,
    pub weakest_area: SkillArea,
    /// Only once there are enough conversations to compare
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
}
