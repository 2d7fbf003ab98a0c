//! GPTIQX: conversation quality insights
//!
//! Scores (UserIQ, GPTIQ, ConversationIQ and their sub-scores) come from a
//! hosted model behind an analysis gateway. This crate turns those scores
//! into ranked insights, a primary recommendation, a status summary, an
//! improvement focus and learning-timeline takeaways.

pub mod config;
pub mod core;
pub mod types;

// =============================================================================
// INSIGHT ENGINE THRESHOLDS
// =============================================================================

/// Maximum number of insights returned by the insight engine
pub const MAX_INSIGHTS: usize = 3;

/// Week-over-week change (points) that counts as a surge or decline
pub const TREND_SWING_POINTS: i32 = 10;

/// Clarity/depth gap above which one of the two is called out
pub const CLARITY_DEPTH_GAP: i32 = 20;

/// Synergy below this triggers the low synergy warning
pub const LOW_SYNERGY_BELOW: i32 = 60;

/// GPT flow above this is called out as excellent context retention
pub const CONTEXT_RETENTION_ABOVE: i32 = 85;

/// Conversations needed before trends are meaningful
pub const BASELINE_CONVERSATIONS: u32 = 5;

/// Composite average at which interactions count as expert-level
pub const EXPERT_AVERAGE: f64 = 85.0;

// =============================================================================
// FACTOR THRESHOLDS
// =============================================================================

/// Weakest factor at or above this means there is no real weakness
pub const STRONG_FACTOR_FLOOR: i32 = 80;

/// Gap to the second weakest factor for high confidence
pub const HIGH_CONFIDENCE_GAP: i32 = 15;

/// Gap to the second weakest factor for moderate confidence
pub const MODERATE_CONFIDENCE_GAP: i32 = 5;

/// Per-factor change (points) the timeline treats as movement
pub const TAKEAWAY_DELTA_POINTS: i32 = 5;

/// Conversations needed before the pro panel is shown
pub const PRO_PANEL_MIN_CONVERSATIONS: u32 = 3;

// =============================================================================
// PROFILE
// =============================================================================

/// ConversationIQ that marks the "first conversation above 80" milestone
pub const MILESTONE_CONVERSATION_IQ: i32 = 80;

/// Sessions averaged at each end of the history for early-vs-recent progress
pub const PROGRESS_SAMPLE_SIZE: usize = 3;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
