//! One-line intelligence status summary

use crate::types::{FactorList, ScoreSnapshot};

/// Score assumed for a missing sub-score.
///
/// Differs from the primary insight and focus selectors (100). Kept as-is:
/// unifying the two would change the summary for records without sub-scores.
pub const STATUS_MISSING_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusFactor {
    PromptClarity,
    QuestionDepth,
    Creativity,
    ResponseQuality,
    ConversationFlow,
    Synergy,
}

impl StatusFactor {
    const ALL: [StatusFactor; 6] = [
        StatusFactor::PromptClarity,
        StatusFactor::QuestionDepth,
        StatusFactor::Creativity,
        StatusFactor::ResponseQuality,
        StatusFactor::ConversationFlow,
        StatusFactor::Synergy,
    ];

    fn name(&self) -> &'static str {
        match self {
            StatusFactor::PromptClarity => "prompt clarity",
            StatusFactor::QuestionDepth => "question depth",
            StatusFactor::Creativity => "creativity",
            StatusFactor::ResponseQuality => "response quality",
            StatusFactor::ConversationFlow => "conversation flow",
            StatusFactor::Synergy => "synergy",
        }
    }

    fn score(&self, snapshot: &ScoreSnapshot) -> Option<i32> {
        match self {
            StatusFactor::PromptClarity => snapshot.user_clarity,
            StatusFactor::QuestionDepth => snapshot.user_depth,
            StatusFactor::Creativity => snapshot.user_creativity,
            StatusFactor::ResponseQuality => snapshot.gpt_clarity,
            StatusFactor::ConversationFlow => snapshot.conversation_flow,
            StatusFactor::Synergy => snapshot.conversation_synergy,
        }
    }
}

/// Summarize overall standing, naming the weakest or strongest factor
pub fn summarize_status(snapshot: &ScoreSnapshot) -> String {
    let average = snapshot.composite_average();
    let factors = FactorList::resolve(StatusFactor::ALL, |factor| {
        factor.score(snapshot).unwrap_or(STATUS_MISSING_SCORE)
    });
    let weakest = factors.weakest();
    let strongest = factors.strongest();

    if average >= 85.0 {
        format!(
            "Excellent conversation quality. Your {} is particularly strong.",
            strongest.key.name()
        )
    } else if average >= 70.0 {
        if weakest.value < 65 {
            format!(
                "Good overall performance, but {} is limiting further improvement.",
                weakest.key.name()
            )
        } else {
            format!(
                "Solid conversation quality with room to grow in {}.",
                weakest.key.name()
            )
        }
    } else if average >= 55.0 {
        format!(
            "Average performance. Focus on improving {} for the biggest impact.",
            weakest.key.name()
        )
    } else {
        format!(
            "Your {} needs attention. Small improvements here will raise all scores.",
            weakest.key.name()
        )
    }
}
