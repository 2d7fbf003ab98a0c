//! Improvement focus areas

use serde::{Deserialize, Serialize};

/// Factors the improvement focus chooses between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusFactor {
    PromptClarity,
    QuestionDepth,
    CreativeFraming,
    ConversationFlow,
    SynergyBuilding,
}

impl FocusFactor {
    /// Tie-break order
    pub const ALL: [FocusFactor; 5] = [
        FocusFactor::PromptClarity,
        FocusFactor::QuestionDepth,
        FocusFactor::CreativeFraming,
        FocusFactor::ConversationFlow,
        FocusFactor::SynergyBuilding,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FocusFactor::PromptClarity => "Prompt Clarity",
            FocusFactor::QuestionDepth => "Question Depth",
            FocusFactor::CreativeFraming => "Creative Framing",
            FocusFactor::ConversationFlow => "Conversation Flow",
            FocusFactor::SynergyBuilding => "Synergy Building",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FocusFactor::PromptClarity => {
                "Clear, well-structured prompts help AI understand your intent precisely."
            }
            FocusFactor::QuestionDepth => {
                "Deeper questions unlock more comprehensive and valuable responses."
            }
            FocusFactor::CreativeFraming => {
                "Unique perspectives lead to more insightful and novel answers."
            }
            FocusFactor::ConversationFlow => "Building on previous responses creates richer dialogue.",
            FocusFactor::SynergyBuilding => {
                "Strong back-and-forth creates compounding value in conversations."
            }
        }
    }

    /// Estimated ConversationIQ gain in points
    pub fn impact_range(&self) -> &'static str {
        match self {
            FocusFactor::PromptClarity => "8–12",
            FocusFactor::QuestionDepth => "6–10",
            FocusFactor::CreativeFraming => "5–8",
            FocusFactor::ConversationFlow => "7–11",
            FocusFactor::SynergyBuilding => "8–14",
        }
    }
}

/// Where the user should focus next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub name: String,
    pub description: String,
    pub impact_range: String,
    /// 1 is most urgent
    pub priority: u8,
}
