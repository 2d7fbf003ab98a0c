//! Dashboard assembly: every selector over one user's history

use chrono::{DateTime, Utc};

use crate::core::{
    best_session_index, build_timeline, chart_points, pro_panel, profile_stats,
    select_focus_area, select_insights, select_primary_insight, summarize_status, weekly_trends,
};
use crate::types::{ConversationRecord, Dashboard};

/// Build the dashboard for a history of conversations (any order).
///
/// Pure: the same history, `now` and `is_pro` always give the same result.
pub fn build_dashboard(
    conversations: &[ConversationRecord],
    now: DateTime<Utc>,
    is_pro: bool,
) -> Dashboard {
    let mut history = conversations.to_vec();
    // Stable: records sharing a timestamp keep their input order
    history.sort_by_key(|c| c.created_at);

    let conversation_count = u32::try_from(history.len()).unwrap_or(u32::MAX);
    let latest = history.last().map(|c| c.scores.clone());
    let trends = weekly_trends(&history, now);

    let insights = select_insights(
        latest.as_ref(),
        &trends.user_iq,
        &trends.gpt_iq,
        &trends.conversation_iq,
        conversation_count,
    );

    let primary = latest.as_ref().map(select_primary_insight);
    let pro = primary
        .as_ref()
        .and_then(|p| pro_panel(p.category, conversation_count, is_pro));

    Dashboard {
        conversation_count,
        status: latest.as_ref().map(summarize_status),
        focus: latest.as_ref().map(select_focus_area),
        latest,
        trends,
        insights,
        primary,
        timeline: build_timeline(&history),
        pro,
        chart: chart_points(&history),
        best_session: best_session_index(&history),
        profile: profile_stats(&history),
    }
}
