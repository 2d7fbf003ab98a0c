//! Improvement focus selection

use crate::types::{FactorList, FocusArea, FocusFactor, ScoreSnapshot};
use crate::STRONG_FACTOR_FLOOR;

/// Score assumed for a missing sub-score
pub const FOCUS_MISSING_SCORE: i32 = 100;

/// Pick the factor to work on next.
///
/// Once every factor is strong the answer is always synergy, which has the
/// largest upside on top of solid fundamentals.
pub fn select_focus_area(snapshot: &ScoreSnapshot) -> FocusArea {
    let factors = FactorList::resolve(FocusFactor::ALL, |factor| {
        focus_score(snapshot, factor).unwrap_or(FOCUS_MISSING_SCORE)
    });
    let weakest = factors.weakest();

    if weakest.value >= STRONG_FACTOR_FLOOR {
        let synergy = FocusFactor::SynergyBuilding;
        return FocusArea {
            name: synergy.name().to_string(),
            description: "Your fundamentals are strong. Push synergy for peak performance."
                .to_string(),
            impact_range: synergy.impact_range().to_string(),
            priority: 1,
        };
    }

    let priority = if weakest.value < 50 {
        1
    } else if weakest.value < 70 {
        2
    } else {
        3
    };

    FocusArea {
        name: weakest.key.name().to_string(),
        description: weakest.key.description().to_string(),
        impact_range: weakest.key.impact_range().to_string(),
        priority,
    }
}

fn focus_score(snapshot: &ScoreSnapshot, factor: FocusFactor) -> Option<i32> {
    match factor {
        FocusFactor::PromptClarity => snapshot.user_clarity,
        FocusFactor::QuestionDepth => snapshot.user_depth,
        FocusFactor::CreativeFraming => snapshot.user_creativity,
        FocusFactor::ConversationFlow => snapshot.conversation_flow,
        FocusFactor::SynergyBuilding => snapshot.conversation_synergy,
    }
}
