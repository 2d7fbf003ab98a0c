//! Profile statistics: averages, milestones and early-vs-recent progress

use crate::types::{ConversationRecord, FactorList, Milestone, ProfileStats, Progress, SkillArea};
use crate::{MILESTONE_CONVERSATION_IQ, PROGRESS_SAMPLE_SIZE};

/// Statistics for a history (any order). `None` when there is no history.
///
/// Missing skill sub-scores count as 0 in the skill averages.
pub fn profile_stats(conversations: &[ConversationRecord]) -> Option<ProfileStats> {
    let mut history: Vec<&ConversationRecord> = conversations.iter().collect();
    history.sort_by_key(|c| c.created_at);

    let first = *history.first()?;
    let last = *history.last()?;
    let total = u32::try_from(history.len()).unwrap_or(u32::MAX);

    // Strictly greater, so the earliest best session wins
    let best = history.iter().copied().skip(1).fold(first, |best, c| {
        if c.scores.conversation_iq > best.scores.conversation_iq {
            c
        } else {
            best
        }
    });

    let first_above_80 = history
        .iter()
        .find(|c| c.scores.conversation_iq >= MILESTONE_CONVERSATION_IQ)
        .map(|c| milestone(c));

    let skills = FactorList::resolve(SkillArea::ALL, |area| {
        mean(history.iter().map(|c| {
            let score = match area {
                SkillArea::Clarity => c.scores.user_clarity,
                SkillArea::Depth => c.scores.user_depth,
                SkillArea::Creativity => c.scores.user_creativity,
            };
            score.unwrap_or(0)
        }))
    });
    let strongest_area = skills.strongest().key;
    let weakest_area = skills.weakest().key;

    let progress = (history.len() >= PROGRESS_SAMPLE_SIZE).then(|| {
        let iq = |c: &&ConversationRecord| c.scores.conversation_iq;
        let initial_avg_iq = rounded_mean(history.iter().take(PROGRESS_SAMPLE_SIZE).map(iq));
        let current_avg_iq =
            rounded_mean(history.iter().skip(history.len() - PROGRESS_SAMPLE_SIZE).map(iq));
        let improvement = current_avg_iq.saturating_sub(initial_avg_iq);
        Progress {
            initial_avg_iq,
            current_avg_iq,
            improvement,
            summary: learning_summary(total, improvement, strongest_area, weakest_area),
        }
    });

    Some(ProfileStats {
        total,
        avg_user_iq: rounded_mean(history.iter().map(|c| c.scores.user_iq)),
        avg_gpt_iq: rounded_mean(history.iter().map(|c| c.scores.gpt_iq)),
        avg_conversation_iq: rounded_mean(history.iter().map(|c| c.scores.conversation_iq)),
        last_active: last.created_at,
        first_conversation: milestone(first),
        first_above_80,
        best_conversation: milestone(best),
        strongest_area,
        weakest_area,
        progress,
    })
}

/// "Over N conversations, ..." paragraph
pub fn learning_summary(
    total: u32,
    improvement: i32,
    strongest: SkillArea,
    weakest: SkillArea,
) -> String {
    let trend = match improvement {
        i if i > 0 => format!("improved by {} points", i),
        i if i < 0 => "needs attention".to_string(),
        _ => "remained consistent".to_string(),
    };
    format!(
        "Over {} conversations, your overall ConversationIQ has {}. Your strength lies in {}, while {} offers the most room for growth.",
        total,
        trend,
        strongest.strength_phrase(),
        weakest.growth_phrase()
    )
}

fn milestone(c: &ConversationRecord) -> Milestone {
    Milestone {
        id: c.id.clone(),
        created_at: c.created_at,
        score: c.scores.conversation_iq,
    }
}

fn mean(values: impl Iterator<Item = i32>) -> f64 {
    let (sum, n) = values.fold((0.0, 0u32), |(sum, n), v| (sum + f64::from(v), n + 1));
    if n == 0 {
        0.0
    } else {
        sum / f64::from(n)
    }
}

fn rounded_mean(values: impl Iterator<Item = i32>) -> i32 {
    // Half rounds up, and the mean of i32 values always fits
    (mean(values) + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreSnapshot;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap()
    }

    fn record(
        day: i64,
        conv_iq: i32,
        clarity: Option<i32>,
        depth: Option<i32>,
    ) -> ConversationRecord {
        ConversationRecord::new(
            format!("d{}", day),
            start() + Duration::days(day),
            ScoreSnapshot {
                user_clarity: clarity,
                user_depth: depth,
                user_creativity: Some(60),
                ..ScoreSnapshot::composites(70, 75, conv_iq)
            },
        )
    }

    #[test]
    fn test_empty_history_has_no_stats() {
        assert!(profile_stats(&[]).is_none());
    }

    #[test]
    fn test_averages_and_milestones() {
        // Input deliberately out of order
        let history = vec![
            record(4, 90, Some(80), Some(50)),
            record(0, 60, Some(80), Some(50)),
            record(2, 81, Some(80), Some(50)),
            record(1, 65, Some(80), Some(50)),
            record(3, 90, Some(80), Some(50)),
        ];
        let stats = profile_stats(&history).unwrap();

        assert_eq!(stats.total, 5);
        assert_eq!(stats.avg_user_iq, 70);
        assert_eq!(stats.avg_conversation_iq, 77);
        assert_eq!(stats.first_conversation.id, "d0");
        assert_eq!(stats.first_above_80.as_ref().map(|m| m.id.as_str()), Some("d2"));
        assert_eq!(stats.best_conversation.id, "d3");
        assert_eq!(stats.best_conversation.score, 90);
        assert_eq!(stats.last_active, start() + Duration::days(4));
        assert_eq!(stats.strongest_area, SkillArea::Clarity);
        assert_eq!(stats.weakest_area, SkillArea::Depth);

        let progress = stats.progress.unwrap();
        // (60+65+81)/3 = 68.67, (81+90+90)/3 = 87
        assert_eq!(progress.initial_avg_iq, 69);
        assert_eq!(progress.current_avg_iq, 87);
        assert_eq!(progress.improvement, 18);
        assert_eq!(
            progress.summary,
            "Over 5 conversations, your overall ConversationIQ has improved by 18 points. Your strength lies in clear and well-structured prompts, while question depth offers the most room for growth."
        );
    }

    #[test]
    fn test_fewer_than_three_has_no_progress() {
        let history = vec![record(0, 70, Some(70), Some(70)), record(1, 75, Some(70), Some(70))];
        let stats = profile_stats(&history).unwrap();
        assert_eq!(stats.total, 2);
        assert!(stats.progress.is_none());
        assert!(stats.first_above_80.is_none());
        // Clarity and depth tie at 70: the first listed wins
        assert_eq!(stats.strongest_area, SkillArea::Clarity);
        assert_eq!(stats.weakest_area, SkillArea::Creativity);
    }

    #[test]
    fn test_missing_skills_count_as_zero() {
        let history = vec![
            record(0, 70, None, Some(40)),
            record(1, 70, Some(90), Some(40)),
            record(2, 70, None, Some(40)),
        ];
        let stats = profile_stats(&history).unwrap();
        // clarity 30, depth 40, creativity 60
        assert_eq!(stats.weakest_area, SkillArea::Clarity);
        assert_eq!(stats.strongest_area, SkillArea::Creativity);
        let progress = stats.progress.unwrap();
        assert_eq!(progress.improvement, 0);
        assert!(progress.summary.contains("has remained consistent"));
    }

    #[test]
    fn test_extreme_scores_stay_in_range() {
        let history = vec![
            record(0, i32::MIN, Some(i32::MAX), None),
            record(1, i32::MIN, Some(i32::MAX), None),
            record(2, i32::MAX, Some(i32::MAX), None),
            record(3, i32::MAX, Some(i32::MAX), None),
        ];
        let stats = profile_stats(&history).unwrap();
        let progress = stats.progress.unwrap();
        assert!(progress.improvement > 0);
        assert_eq!(stats.best_conversation.id, "d2");
        assert_eq!(stats.strongest_area, SkillArea::Clarity);
    }

    #[test]
    fn test_decline_summary() {
        assert_eq!(
            learning_summary(4, -3, SkillArea::Creativity, SkillArea::Clarity),
            "Over 4 conversations, your overall ConversationIQ has needs attention. Your strength lies in creative and original thinking, while prompt clarity offers the most room for growth."
        );
    }
}
