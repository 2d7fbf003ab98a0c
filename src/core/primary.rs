//! Primary insight: the one thing to improve next
//!
//! Argmin over five factors, keyed into a fixed template per category.

use crate::types::{
    Confidence, FactorList, InsightCategory, PrimaryInsight, ProPanel, ScoreSnapshot,
};
use crate::{PRO_PANEL_MIN_CONVERSATIONS, STRONG_FACTOR_FLOOR};

/// Score assumed for a missing sub-score. A gap in the data is treated as
/// "not a weakness".
pub const PRIMARY_MISSING_SCORE: i32 = 100;

struct Template {
    problem: &'static str,
    reason_tail: &'static str,
    action: &'static str,
}

/// Pick the weakest factor and return its recommendation
pub fn select_primary_insight(snapshot: &ScoreSnapshot) -> PrimaryInsight {
    let factors = FactorList::resolve(InsightCategory::FACTORS, |category| {
        category_score(snapshot, category).unwrap_or(PRIMARY_MISSING_SCORE)
    });

    let weakest = factors.weakest();
    let second = factors.second_weakest();
    let confidence = Confidence::from_gap(i64::from(second.value) - i64::from(weakest.value));

    if weakest.value >= STRONG_FACTOR_FLOOR {
        return PrimaryInsight {
            problem: "You're doing great!".to_string(),
            reason: format!(
                "All your scores are above {}. Your conversation quality is excellent.",
                STRONG_FACTOR_FLOOR
            ),
            action: "Keep experimenting with complex topics. Try multi-step reasoning or creative challenges to push further.".to_string(),
            category: InsightCategory::General,
            confidence: Confidence::High,
        };
    }

    let template = template(weakest.key);
    PrimaryInsight {
        problem: template.problem.to_string(),
        reason: format!(
            "Your {} score is {}. {}",
            weakest.key, weakest.value, template.reason_tail
        ),
        action: template.action.to_string(),
        category: weakest.key,
        confidence,
    }
}

/// Panel shown under the primary insight.
///
/// `is_pro` is supplied by whoever knows the subscription state.
pub fn pro_panel(
    category: InsightCategory,
    conversation_count: u32,
    is_pro: bool,
) -> Option<ProPanel> {
    if conversation_count < PRO_PANEL_MIN_CONVERSATIONS {
        return None;
    }
    if !is_pro {
        return Some(ProPanel::Teaser {
            message: "Pro: See patterns across sessions, improvement predictions, and personalized roadmaps".to_string(),
        });
    }
    let pattern = match category {
        InsightCategory::Clarity => "Clarity issues appeared in 3 of your last 5 sessions.",
        InsightCategory::Depth => "Shallow questions are a recurring theme in your conversations.",
        InsightCategory::Creativity => "Your prompts follow similar patterns across sessions.",
        InsightCategory::Synergy => "Conversation momentum drops mid-session repeatedly.",
        InsightCategory::Flow => "Flow issues persist across multiple conversations.",
        InsightCategory::General => "Your strong performance is consistent across sessions.",
    };
    Some(ProPanel::Insights {
        pattern: pattern.to_string(),
        improvement_potential: "Fixing this issue could raise your average score by ~8-12 points based on similar user patterns.".to_string(),
    })
}

fn category_score(snapshot: &ScoreSnapshot, category: InsightCategory) -> Option<i32> {
    match category {
        InsightCategory::Clarity => snapshot.user_clarity,
        InsightCategory::Depth => snapshot.user_depth,
        InsightCategory::Creativity => snapshot.user_creativity,
        InsightCategory::Synergy => snapshot.conversation_synergy,
        InsightCategory::Flow => snapshot.conversation_flow,
        InsightCategory::General => None,
    }
}

fn template(category: InsightCategory) -> Template {
    match category {
        InsightCategory::Clarity | InsightCategory::General => Template {
            problem: "Your prompts could be clearer",
            reason_tail: "The AI may struggle to understand exactly what you're asking for.",
            action: "Start with your main question first, then add context. Be specific about what format you want the answer in.",
        },
        InsightCategory::Depth => Template {
            problem: "Your questions lack depth",
            reason_tail: "Simple questions often get surface-level answers.",
            action: "Add 'why' or 'how' to your questions. Ask the AI to explain its reasoning or consider alternatives.",
        },
        InsightCategory::Creativity => Template {
            problem: "Your prompts are too predictable",
            reason_tail: "Standard questions get standard answers.",
            action: "Try asking from a different angle. Use 'what if' scenarios or ask the AI to challenge assumptions.",
        },
        InsightCategory::Synergy => Template {
            problem: "The conversation isn't building momentum",
            reason_tail: "Each exchange feels disconnected from the previous one.",
            action: "Reference what the AI said in your follow-ups. Build on previous answers instead of starting fresh.",
        },
        InsightCategory::Flow => Template {
            problem: "The conversation flow is choppy",
            reason_tail: "The dialogue doesn't progress naturally.",
            action: "Guide the conversation step by step. After each response, ask a logical follow-up question.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(
        clarity: i32,
        depth: i32,
        creativity: i32,
        synergy: i32,
        flow: i32,
    ) -> ScoreSnapshot {
        ScoreSnapshot {
            user_clarity: Some(clarity),
            user_depth: Some(depth),
            user_creativity: Some(creativity),
            conversation_synergy: Some(synergy),
            conversation_flow: Some(flow),
            ..ScoreSnapshot::composites(70, 70, 70)
        }
    }

    #[test]
    fn test_weakest_clarity_high_confidence() {
        let insight = select_primary_insight(&snapshot(40, 90, 90, 90, 90));
        assert_eq!(insight.category, InsightCategory::Clarity);
        assert_eq!(insight.confidence, Confidence::High);
        assert_eq!(insight.problem, "Your prompts could be clearer");
        assert!(insight.reason.starts_with("Your clarity score is 40."));
    }

    #[test]
    fn test_extreme_gap_is_high_confidence() {
        let insight = select_primary_insight(&snapshot(i32::MIN, i32::MAX, i32::MAX, 90, 90));
        assert_eq!(insight.category, InsightCategory::Clarity);
        assert_eq!(insight.confidence, Confidence::High);
        assert!(insight.reason.starts_with("Your clarity score is -2147483648."));
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(
            select_primary_insight(&snapshot(70, 60, 75, 90, 90)).confidence,
            Confidence::Moderate
        );
        assert_eq!(
            select_primary_insight(&snapshot(70, 68, 75, 90, 90)).confidence,
            Confidence::Low
        );
    }

    #[test]
    fn test_weakest_depth_uses_real_second_weakest() {
        let insight = select_primary_insight(&snapshot(90, 30, 88, 95, 92));
        assert_eq!(insight.category, InsightCategory::Depth);
        assert_eq!(insight.confidence, Confidence::High);
    }

    #[test]
    fn test_tie_resolves_to_first_factor() {
        let insight = select_primary_insight(&snapshot(75, 90, 90, 60, 60));
        assert_eq!(insight.category, InsightCategory::Synergy);
        assert_eq!(insight.confidence, Confidence::Low);
    }

    #[test]
    fn test_all_strong_is_general() {
        let insight = select_primary_insight(&snapshot(85, 85, 85, 85, 85));
        assert_eq!(insight.category, InsightCategory::General);
        assert_eq!(insight.confidence, Confidence::High);
        assert_eq!(insight.problem, "You're doing great!");
    }

    #[test]
    fn test_missing_sub_scores_are_not_weaknesses() {
        let mut snap = ScoreSnapshot::composites(50, 50, 50);
        assert_eq!(select_primary_insight(&snap).category, InsightCategory::General);

        snap.conversation_flow = Some(79);
        let insight = select_primary_insight(&snap);
        assert_eq!(insight.category, InsightCategory::Flow);
        assert_eq!(insight.confidence, Confidence::High);
    }

    #[test]
    fn test_pro_panel_gating() {
        assert_eq!(pro_panel(InsightCategory::Depth, 2, true), None);
        assert!(matches!(
            pro_panel(InsightCategory::Depth, 3, false),
            Some(ProPanel::Teaser { .. })
        ));
        match pro_panel(InsightCategory::Synergy, 7, true) {
            Some(ProPanel::Insights { pattern, .. }) => {
                assert!(pattern.contains("momentum"))
            }
            other => panic!("expected pro insights, got {:?}", other),
        }
    }
}
