//! Integration tests for the insight selectors
//!
//! Covers the observable guarantees of the five selectors:
//! - empty history invites a first analysis
//! - at most three insights, ordered by priority
//! - trend rules only fire with a baseline
//! - weakest-factor selection, confidence and "all strong" overrides
//! - takeaways compare against the previous conversation
//! - every selector is deterministic

use gptiqx::core::{
    generate_takeaway, select_focus_area, select_insights, select_primary_insight,
    summarize_status,
};
use gptiqx::types::{Confidence, InsightCategory, InsightKind, ScoreSnapshot, TrendDelta};
use pretty_assertions::assert_eq;

fn flat() -> TrendDelta {
    TrendDelta::new(70.0, 70.0)
}

fn rich_snapshot() -> ScoreSnapshot {
    ScoreSnapshot {
        user_clarity: Some(92),
        user_depth: Some(55),
        user_creativity: Some(70),
        gpt_clarity: Some(88),
        gpt_depth: Some(84),
        gpt_flow: Some(91),
        conversation_flow: Some(74),
        conversation_synergy: Some(52),
        justification: Some("Clear but shallow prompts.".to_string()),
        ..ScoreSnapshot::composites(90, 88, 86)
    }
}

#[test]
fn test_no_snapshot_ignores_other_arguments() {
    let wild = TrendDelta::new(100.0, 0.0);
    for count in [0, 3, 50] {
        let insights = select_insights(None, &wild, &wild, &wild, count);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Info);
    }
}

#[test]
fn test_at_most_three_sorted_by_priority() {
    let snap = rich_snapshot();
    let up = TrendDelta::new(90.0, 70.0);
    let down = TrendDelta::new(50.0, 70.0);
    for (user, gpt, conv, count) in [
        (up, down, up, 0),
        (down, flat(), flat(), 2),
        (flat(), flat(), up, 9),
        (TrendDelta::without_baseline(80.0), down, up, 4),
    ] {
        let insights = select_insights(Some(&snap), &user, &gpt, &conv, count);
        assert!(insights.len() <= 3);
        assert!(insights.windows(2).all(|w| w[0].priority <= w[1].priority));
    }
}

#[test]
fn test_surge_requires_baseline_and_threshold() {
    let snap = ScoreSnapshot::composites(70, 70, 70);

    let surge = TrendDelta {
        current: 80.0,
        previous: 65.0,
        diff: 15,
        has_previous: true,
    };
    let insights = select_insights(Some(&snap), &surge, &flat(), &flat(), 10);
    assert_eq!(insights.len(), 1);
    assert!(insights[0].title.contains("UserIQ"));
    assert!(insights[0].title.contains("Surge"));

    let no_baseline = TrendDelta {
        has_previous: false,
        ..surge
    };
    assert!(select_insights(Some(&snap), &no_baseline, &flat(), &flat(), 10).is_empty());

    let nine = TrendDelta { diff: 9, ..surge };
    assert!(select_insights(Some(&snap), &nine, &flat(), &flat(), 10).is_empty());
}

#[test]
fn test_primary_insight_weakest_clarity() {
    let snap = ScoreSnapshot {
        user_clarity: Some(40),
        user_depth: Some(90),
        user_creativity: Some(90),
        conversation_synergy: Some(90),
        conversation_flow: Some(90),
        ..ScoreSnapshot::default()
    };
    let insight = select_primary_insight(&snap);
    assert_eq!(insight.category, InsightCategory::Clarity);
    assert_eq!(insight.confidence, Confidence::High);
    assert!(insight.reason.contains("40"));
}

#[test]
fn test_primary_insight_all_strong() {
    let snap = ScoreSnapshot {
        user_clarity: Some(85),
        user_depth: Some(85),
        user_creativity: Some(85),
        conversation_synergy: Some(85),
        conversation_flow: Some(85),
        ..ScoreSnapshot::composites(85, 85, 85)
    };
    let insight = select_primary_insight(&snap);
    assert_eq!(insight.problem, "You're doing great!");
    assert_eq!(insight.category, InsightCategory::General);
    assert_eq!(insight.confidence, Confidence::High);
}

#[test]
fn test_focus_always_synergy_when_fundamentals_strong() {
    for (clarity, depth, creativity, flow, synergy) in [
        (80, 80, 80, 80, 80),
        (95, 81, 90, 88, 100),
        (82, 99, 85, 80, 97),
    ] {
        let snap = ScoreSnapshot {
            user_clarity: Some(clarity),
            user_depth: Some(depth),
            user_creativity: Some(creativity),
            conversation_flow: Some(flow),
            conversation_synergy: Some(synergy),
            ..ScoreSnapshot::default()
        };
        let focus = select_focus_area(&snap);
        assert_eq!(focus.name, "Synergy Building");
        assert_eq!(focus.priority, 1);
    }
}

#[test]
fn test_takeaway_names_improved_clarity_only() {
    let previous = ScoreSnapshot {
        user_clarity: Some(50),
        user_depth: Some(70),
        user_creativity: Some(65),
        conversation_flow: Some(72),
        conversation_synergy: Some(68),
        ..ScoreSnapshot::composites(60, 70, 65)
    };
    let current = ScoreSnapshot {
        user_clarity: Some(60),
        ..previous.clone()
    };
    let takeaway = generate_takeaway(&current, Some(&previous));
    assert!(takeaway.contains("clarity"));
    assert!(takeaway.contains("improvement"));
    assert!(!takeaway.contains("dropped"));
    assert!(!takeaway.contains("needs attention"));
}

#[test]
fn test_missing_defaults_differ_per_selector() {
    // Only clarity known: primary/focus treat the rest as 100, status/timeline as 0
    let snap = ScoreSnapshot {
        user_clarity: Some(75),
        ..ScoreSnapshot::composites(72, 72, 72)
    };
    assert_eq!(select_primary_insight(&snap).category, InsightCategory::Clarity);
    assert_eq!(select_focus_area(&snap).name, "Prompt Clarity");
    assert_eq!(
        summarize_status(&snap),
        "Good overall performance, but question depth is limiting further improvement."
    );
    assert_eq!(generate_takeaway(&snap, None), "Focus needed on depth");
}

#[test]
fn test_selectors_are_idempotent() {
    let snap = rich_snapshot();
    let copy = snap.clone();
    let up = TrendDelta::new(90.0, 70.0);

    assert_eq!(
        select_insights(Some(&snap), &up, &flat(), &up, 3),
        select_insights(Some(&copy), &up, &flat(), &up, 3)
    );
    assert_eq!(select_primary_insight(&snap), select_primary_insight(&snap));
    assert_eq!(select_primary_insight(&snap), select_primary_insight(&copy));
    assert_eq!(summarize_status(&snap), summarize_status(&copy));
    assert_eq!(select_focus_area(&snap), select_focus_area(&copy));
    assert_eq!(
        generate_takeaway(&snap, Some(&copy)),
        generate_takeaway(&copy, Some(&snap))
    );
}
