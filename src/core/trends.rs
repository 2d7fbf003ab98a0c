//! Week-over-week trends and chart data

use chrono::{DateTime, Duration, Utc};

use crate::types::{ChartPoint, ConversationRecord, Metric, TrendDelta, Trends};

/// Length of one trend window in days
pub const TREND_WINDOW_DAYS: i64 = 7;

/// History range shown on the progress chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    #[default]
    All,
}

impl DateFilter {
    /// Earliest timestamp kept, `None` for all history
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateFilter::Week => Some(now - Duration::days(7)),
            DateFilter::Month => Some(now - Duration::days(30)),
            DateFilter::All => None,
        }
    }

    /// Keep conversations created at or after the cutoff
    pub fn apply<'a>(
        &self,
        conversations: &'a [ConversationRecord],
        now: DateTime<Utc>,
    ) -> Vec<&'a ConversationRecord> {
        let cutoff = self.cutoff(now);
        conversations
            .iter()
            .filter(|c| cutoff.map_or(true, |cut| c.created_at >= cut))
            .collect()
    }
}

/// Mean of `metric` this week against the week before.
///
/// This week is `(now - 7d, now]`, last week `(now - 14d, now - 7d]`.
pub fn weekly_trend(
    conversations: &[ConversationRecord],
    metric: Metric,
    now: DateTime<Utc>,
) -> TrendDelta {
    let week = Duration::days(TREND_WINDOW_DAYS);
    let this_week = window_values(conversations, metric, now - week, now);
    let last_week = window_values(conversations, metric, now - week - week, now - week);

    let current = mean(&this_week);
    if last_week.is_empty() {
        TrendDelta::without_baseline(current)
    } else {
        TrendDelta::new(current, mean(&last_week))
    }
}

/// Trends for all three composites
pub fn weekly_trends(conversations: &[ConversationRecord], now: DateTime<Utc>) -> Trends {
    Trends {
        user_iq: weekly_trend(conversations, Metric::UserIq, now),
        gpt_iq: weekly_trend(conversations, Metric::GptIq, now),
        conversation_iq: weekly_trend(conversations, Metric::ConversationIq, now),
    }
}

/// Chart points in input order
pub fn chart_points<'a>(
    conversations: impl IntoIterator<Item = &'a ConversationRecord>,
) -> Vec<ChartPoint> {
    conversations
        .into_iter()
        .map(|c| ChartPoint {
            date: c.created_at.date_naive(),
            user_iq: c.scores.user_iq,
            gpt_iq: c.scores.gpt_iq,
            conversation_iq: c.scores.conversation_iq,
        })
        .collect()
}

/// Index of the session with the highest composite total.
///
/// The first session wins ties; totals of zero or less never beat index 0.
pub fn best_session_index<'a>(
    conversations: impl IntoIterator<Item = &'a ConversationRecord>,
) -> Option<usize> {
    let mut seen = false;
    let mut best = (0, 0);
    for (i, c) in conversations.into_iter().enumerate() {
        seen = true;
        let total = c.scores.composite_total();
        if total > best.1 {
            best = (i, total);
        }
    }
    seen.then_some(best.0)
}

fn window_values(
    conversations: &[ConversationRecord],
    metric: Metric,
    after: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Vec<i32> {
    conversations
        .iter()
        .filter(|c| c.created_at > after && c.created_at <= until)
        .map(|c| c.scores.metric(metric))
        .collect()
}

fn mean(values: &[i32]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().map(|v| *v as f64).sum::<f64>() / values.len() as f64
    }
}
