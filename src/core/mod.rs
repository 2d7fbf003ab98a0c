//! Core modules for GPTIQX

pub mod analyzer;
pub mod api;
pub mod dashboard;
pub mod focus;
pub mod insight_engine;
pub mod primary;
pub mod profile;
pub mod status;
pub mod timeline;
pub mod trends;

pub use analyzer::{extract_scores, transcript_digest, GatewayClient, SYSTEM_PROMPT};
pub use api::{create_router, run_server};
pub use dashboard::build_dashboard;
pub use focus::{select_focus_area, FOCUS_MISSING_SCORE};
pub use insight_engine::select_insights;
pub use primary::{pro_panel, select_primary_insight, PRIMARY_MISSING_SCORE};
pub use profile::{learning_summary, profile_stats};
pub use status::{summarize_status, STATUS_MISSING_SCORE};
pub use timeline::{build_timeline, generate_takeaway, TAKEAWAY_MISSING_SCORE, TIMELINE_LENGTH};
pub use trends::{best_session_index, chart_points, weekly_trend, weekly_trends, DateFilter};
