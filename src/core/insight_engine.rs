//! Insight engine: ranked list of short observations
//!
//! Independent rules each contribute at most one insight. The list is then
//! stably sorted by priority and cut to `MAX_INSIGHTS`.

use crate::types::{Insight, InsightKind, ScoreSnapshot, TrendDelta};
use crate::{
    BASELINE_CONVERSATIONS, CLARITY_DEPTH_GAP, CONTEXT_RETENTION_ABOVE, EXPERT_AVERAGE,
    LOW_SYNERGY_BELOW, MAX_INSIGHTS, TREND_SWING_POINTS,
};

/// Select at most `MAX_INSIGHTS` insights for the latest snapshot.
///
/// Without a snapshot the only insight is an invitation to run a first
/// analysis. Trend rules never look at `diff` unless the trend has a
/// prior-week baseline.
pub fn select_insights(
    snapshot: Option<&ScoreSnapshot>,
    user_trend: &TrendDelta,
    gpt_trend: &TrendDelta,
    conv_trend: &TrendDelta,
    conversation_count: u32,
) -> Vec<Insight> {
    let Some(scores) = snapshot else {
        return vec![get_started()];
    };

    let mut insights = Vec::new();

    // Trend-based
    if let Some(diff) = user_trend.change() {
        if diff >= TREND_SWING_POINTS {
            insights.push(
                Insight::new(
                    InsightKind::Positive,
                    "UserIQ Surge Detected",
                    format!(
                        "Your prompt quality improved by {} points this week. Your questions are becoming more focused and effective.",
                        diff
                    ),
                    1,
                )
                .with_recommendation(
                    "Keep refining your prompting style — specificity and context are paying off.",
                ),
            );
        } else if diff <= -TREND_SWING_POINTS {
            insights.push(
                Insight::new(
                    InsightKind::Warning,
                    "UserIQ Decline Noticed",
                    format!(
                        "Your prompt quality dropped {} points compared to last week.",
                        diff.unsigned_abs()
                    ),
                    1,
                )
                .with_recommendation(
                    "Try adding more context to your prompts and be specific about desired outcomes.",
                ),
            );
        }
    }

    if let Some(diff) = gpt_trend.change().filter(|d| *d <= -TREND_SWING_POINTS) {
        insights.push(
            Insight::new(
                InsightKind::Negative,
                "AI Response Quality Dip",
                format!("GPT responses declined {} points this week.", diff.unsigned_abs()),
                2,
            )
            .with_recommendation(
                "Consider breaking complex questions into smaller, focused prompts for better AI responses.",
            ),
        );
    }

    if let Some(diff) = conv_trend.change().filter(|d| *d >= TREND_SWING_POINTS) {
        insights.push(Insight::new(
            InsightKind::Positive,
            "Conversation Synergy Improving",
            format!(
                "Your overall dialogue quality is up {} points — conversations are flowing more naturally.",
                diff
            ),
            2,
        ));
    }

    // Score-based
    if let (Some(clarity), Some(depth)) = (scores.user_clarity, scores.user_depth) {
        if clarity.abs_diff(depth) > CLARITY_DEPTH_GAP.unsigned_abs() {
            insights.push(if clarity > depth {
                Insight::new(
                    InsightKind::Info,
                    "Depth Opportunity",
                    "Your prompts are clear but could go deeper. Adding 'why' and 'how' questions can unlock richer responses.",
                    3,
                )
                .with_recommendation(
                    "Try layered questions: start broad, then drill into specifics.",
                )
            } else {
                Insight::new(
                    InsightKind::Info,
                    "Clarity Enhancement Needed",
                    "Your questions are deep but could be clearer. Simplifying structure will help AI understand your intent.",
                    3,
                )
                .with_recommendation(
                    "Lead with your main question, then add context and constraints.",
                )
            });
        }
    }

    if scores
        .conversation_synergy
        .is_some_and(|synergy| synergy < LOW_SYNERGY_BELOW)
    {
        insights.push(
            Insight::new(
                InsightKind::Warning,
                "Low Synergy Alert",
                "The back-and-forth isn't building momentum. Responses may not be connecting well with prompts.",
                2,
            )
            .with_recommendation(
                "Reference AI's previous points in follow-ups to create more cohesive dialogue.",
            ),
        );
    }

    if scores
        .gpt_flow
        .is_some_and(|flow| flow > CONTEXT_RETENTION_ABOVE)
    {
        insights.push(Insight::new(
            InsightKind::Positive,
            "Excellent Context Retention",
            "The AI is maintaining context exceptionally well across your conversation threads.",
            4,
        ));
    }

    if conversation_count < BASELINE_CONVERSATIONS {
        insights.push(Insight::new(
            InsightKind::Neutral,
            "Building Your Baseline",
            format!(
                "{} more conversations needed for meaningful trend analysis.",
                BASELINE_CONVERSATIONS - conversation_count
            ),
            5,
        ));
    }

    if scores.composite_average() >= EXPERT_AVERAGE {
        insights.push(Insight::new(
            InsightKind::Positive,
            "Expert-Level Interactions",
            "You're in the top tier of conversation quality. Your prompting skills demonstrate mastery.",
            1,
        ));
    }

    // sort_by_key is stable: equal priorities keep rule order
    insights.sort_by_key(|insight| insight.priority);
    insights.truncate(MAX_INSIGHTS);
    insights
}

fn get_started() -> Insight {
    Insight::new(
        InsightKind::Info,
        "Get Started",
        "Analyze your first conversation to receive personalized insights and recommendations.",
        1,
    )
}
