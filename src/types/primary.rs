//! Primary insight: the single best next improvement

use serde::{Deserialize, Serialize};

/// How unambiguous the weakest-factor signal is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Moderate,
    Low,
}

impl Confidence {
    /// Confidence from the gap between the weakest and second weakest factor
    pub fn from_gap(gap: i64) -> Self {
        if gap >= i64::from(crate::HIGH_CONFIDENCE_GAP) {
            Confidence::High
        } else if gap >= i64::from(crate::MODERATE_CONFIDENCE_GAP) {
            Confidence::Moderate
        } else {
            Confidence::Low
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Confidence::High => "high",
            Confidence::Moderate => "moderate",
            Confidence::Low => "low",
        };
        write!(f, "{}", name)
    }
}

/// Factor a primary insight is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Clarity,
    Depth,
    Creativity,
    Synergy,
    Flow,
    /// No weakness: every factor is strong
    General,
}

impl InsightCategory {
    /// Factors considered for the primary insight, in tie-break order
    pub const FACTORS: [InsightCategory; 5] = [
        InsightCategory::Clarity,
        InsightCategory::Depth,
        InsightCategory::Creativity,
        InsightCategory::Synergy,
        InsightCategory::Flow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InsightCategory::Clarity => "clarity",
            InsightCategory::Depth => "depth",
            InsightCategory::Creativity => "creativity",
            InsightCategory::Synergy => "synergy",
            InsightCategory::Flow => "flow",
            InsightCategory::General => "general",
        }
    }
}

impl std::fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Problem / reason / action recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryInsight {
    pub problem: String,
    pub reason: String,
    pub action: String,
    pub category: InsightCategory,
    pub confidence: Confidence,
}

/// Extra panel shown next to the primary insight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProPanel {
    /// Upsell for users without a subscription
    Teaser { message: String },
    /// Cross-session notes for subscribers
    Insights {
        pattern: String,
        improvement_potential: String,
    },
}
