//! Learning timeline: one-line takeaways per conversation

use crate::types::{ConversationRecord, FactorList, ScoreSnapshot, TakeawayFactor, TimelineEntry};
use crate::TAKEAWAY_DELTA_POINTS;

/// Score assumed for a missing sub-score (see `STATUS_MISSING_SCORE`)
pub const TAKEAWAY_MISSING_SCORE: i32 = 0;

/// Number of conversations shown on the timeline
pub const TIMELINE_LENGTH: usize = 3;

/// Describe a conversation, relative to the previous one when given
pub fn generate_takeaway(conversation: &ScoreSnapshot, previous: Option<&ScoreSnapshot>) -> String {
    let factors = takeaway_factors(conversation);

    if let Some(prev) = previous {
        let before = takeaway_factors(prev);
        let pairs = || factors.iter().zip(before.iter());
        let improved = pairs()
            .find(|(now, then)| now.value.saturating_sub(then.value) > TAKEAWAY_DELTA_POINTS)
            .map(|(now, _)| now.key);
        let declined = pairs()
            .find(|(now, then)| then.value.saturating_sub(now.value) > TAKEAWAY_DELTA_POINTS)
            .map(|(now, _)| now.key);

        match (improved, declined) {
            (Some(up), Some(down)) => {
                return format!("{} improved, {} dropped", up.name(), down.name())
            }
            (Some(up), None) => return format!("Notable {} improvement", up.name()),
            (None, Some(down)) => return format!("{} needs attention", down.name()),
            (None, None) => {}
        }
    }

    let strongest = factors.strongest();
    let weakest = factors.weakest();

    if strongest.value >= 80 && weakest.value >= 70 {
        "Well-balanced conversation".to_string()
    } else if strongest.value >= 85 {
        format!(
            "Strong {}, work on {}",
            strongest.key.name(),
            weakest.key.name()
        )
    } else if weakest.value < 50 {
        format!("Focus needed on {}", weakest.key.name())
    } else {
        format!(
            "Good {}, improve {}",
            strongest.key.name(),
            weakest.key.name()
        )
    }
}

/// Most recent conversations first, each compared with the one before it.
///
/// `conversations` must be ordered oldest first.
pub fn build_timeline(conversations: &[ConversationRecord]) -> Vec<TimelineEntry> {
    let newest_first: Vec<&ConversationRecord> = conversations.iter().rev().collect();

    newest_first
        .iter()
        .take(TIMELINE_LENGTH)
        .enumerate()
        .map(|(i, conv)| {
            let previous = newest_first.get(i + 1).map(|prev| &prev.scores);
            TimelineEntry {
                id: conv.id.clone(),
                title: conv.title.clone(),
                created_at: conv.created_at,
                user_iq: conv.scores.user_iq,
                gpt_iq: conv.scores.gpt_iq,
                conversation_iq: conv.scores.conversation_iq,
                takeaway: generate_takeaway(&conv.scores, previous),
            }
        })
        .collect()
}

fn takeaway_factors(snapshot: &ScoreSnapshot) -> FactorList<TakeawayFactor, 5> {
    FactorList::resolve(TakeawayFactor::ALL, |factor| {
        let score = match factor {
            TakeawayFactor::Clarity => snapshot.user_clarity,
            TakeawayFactor::Depth => snapshot.user_depth,
            TakeawayFactor::Creativity => snapshot.user_creativity,
            TakeawayFactor::Flow => snapshot.conversation_flow,
            TakeawayFactor::Synergy => snapshot.conversation_synergy,
        };
        score.unwrap_or(TAKEAWAY_MISSING_SCORE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn snap(clarity: i32, depth: i32, creativity: i32, flow: i32, synergy: i32) -> ScoreSnapshot {
        ScoreSnapshot {
            user_clarity: Some(clarity),
            user_depth: Some(depth),
            user_creativity: Some(creativity),
            conversation_flow: Some(flow),
            conversation_synergy: Some(synergy),
            ..ScoreSnapshot::composites(70, 70, 70)
        }
    }

    #[test]
    fn test_improved_only() {
        let prev = snap(50, 70, 70, 70, 70);
        let now = snap(60, 70, 70, 70, 70);
        assert_eq!(generate_takeaway(&now, Some(&prev)), "Notable clarity improvement");
    }

    #[test]
    fn test_improved_and_declined() {
        let prev = snap(50, 80, 70, 70, 70);
        let now = snap(60, 70, 70, 70, 70);
        assert_eq!(
            generate_takeaway(&now, Some(&prev)),
            "clarity improved, depth dropped"
        );
    }

    #[test]
    fn test_declined_only_first_in_order() {
        let prev = snap(70, 70, 90, 70, 90);
        let now = snap(70, 70, 70, 70, 70);
        assert_eq!(generate_takeaway(&now, Some(&prev)), "creativity needs attention");
    }

    #[test]
    fn test_exactly_five_is_not_movement() {
        let prev = snap(70, 70, 70, 70, 70);
        let now = snap(75, 65, 70, 70, 70);
        assert_eq!(generate_takeaway(&now, Some(&prev)), "Good clarity, improve depth");
    }

    #[test]
    fn test_extreme_scores_do_not_overflow() {
        let parsed: ScoreSnapshot = serde_json::from_str(r#"{"user_clarity": 1e12}"#).unwrap();
        assert_eq!(parsed.user_clarity, Some(i32::MAX));
        let prev = snap(i32::MIN, 70, 70, 70, 70);
        let now = ScoreSnapshot {
            user_depth: Some(70),
            user_creativity: Some(70),
            conversation_flow: Some(70),
            conversation_synergy: Some(70),
            ..parsed
        };
        assert_eq!(generate_takeaway(&now, Some(&prev)), "Notable clarity improvement");
        assert_eq!(generate_takeaway(&prev, Some(&now)), "clarity needs attention");
    }

    #[test]
    fn test_static_rules() {
        assert_eq!(
            generate_takeaway(&snap(80, 70, 75, 72, 71), None),
            "Well-balanced conversation"
        );
        assert_eq!(
            generate_takeaway(&snap(90, 60, 75, 72, 71), None),
            "Strong clarity, work on depth"
        );
        assert_eq!(generate_takeaway(&snap(70, 45, 75, 72, 71), None), "Focus needed on depth");
        assert_eq!(
            generate_takeaway(&snap(70, 55, 75, 72, 71), None),
            "Good creativity, improve depth"
        );
    }

    #[test]
    fn test_missing_sub_scores_count_as_zero() {
        let partial = ScoreSnapshot {
            user_clarity: Some(90),
            ..ScoreSnapshot::composites(80, 80, 80)
        };
        assert_eq!(generate_takeaway(&partial, None), "Strong clarity, work on depth");
    }

    #[test]
    fn test_timeline_newest_first_with_previous() {
        let base = Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap();
        let records: Vec<ConversationRecord> = [50, 60, 60, 60]
            .iter()
            .enumerate()
            .map(|(i, clarity)| {
                ConversationRecord::new(
                    format!("c{}", i),
                    base + chrono::Duration::days(i as i64),
                    snap(*clarity, 70, 70, 70, 70),
                )
            })
            .collect();

        let timeline = build_timeline(&records);
        assert_eq!(timeline.len(), 3);
        let ids: Vec<&str> = timeline.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c3", "c2", "c1"]);
        assert_eq!(timeline[2].takeaway, "Notable clarity improvement");
        assert_eq!(timeline[0].takeaway, "Good depth, improve clarity");
    }

    #[test]
    fn test_timeline_single_conversation() {
        let record = ConversationRecord::new(
            "only",
            Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap(),
            snap(40, 70, 70, 70, 70),
        );
        let timeline = build_timeline(std::slice::from_ref(&record));
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].takeaway, "Focus needed on clarity");
    }
}
