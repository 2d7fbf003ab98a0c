//! Everything rendered on the dashboard for one user

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{
    FocusArea, Insight, PrimaryInsight, ProPanel, ProfileStats, ScoreSnapshot, TimelineEntry,
    TrendDelta,
};

/// Week-over-week trends for the three composites
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Trends {
    pub user_iq: TrendDelta,
    pub gpt_iq: TrendDelta,
    pub conversation_iq: TrendDelta,
}

/// One point on the trends chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub user_iq: i32,
    pub gpt_iq: i32,
    pub conversation_iq: i32,
}

/// Dashboard view model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub conversation_count: u32,
    pub latest: Option<ScoreSnapshot>,
    pub trends: Trends,
    pub insights: Vec<Insight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<PrimaryInsight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<FocusArea>,
    pub timeline: Vec<TimelineEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pro: Option<ProPanel>,
    pub chart: Vec<ChartPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_session: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileStats>,
}
