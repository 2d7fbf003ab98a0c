//! Core types for GPTIQX

mod dashboard;
mod error;
mod factor;
mod focus;
mod insight;
mod primary;
mod profile;
mod scores;
mod timeline;
mod trend;

pub use dashboard::{ChartPoint, Dashboard, Trends};
pub use error::AnalysisError;
pub use factor::{Factor, FactorList};
pub use focus::{FocusArea, FocusFactor};
pub use insight::{Insight, InsightKind};
pub use primary::{Confidence, InsightCategory, PrimaryInsight, ProPanel};
pub use profile::{Milestone, ProfileStats, Progress, SkillArea};
pub use scores::{ConversationRecord, Metric, ScoreSnapshot};
pub use timeline::{TakeawayFactor, TimelineEntry};
pub use trend::TrendDelta;
