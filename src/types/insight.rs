//! Generated insights

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Negative,
    Neutral,
    Info,
    Warning,
}

impl InsightKind {
    /// Tag for terminal display
    pub fn tag(&self) -> ColoredString {
        match self {
            InsightKind::Positive => "[+]".green().bold(),
            InsightKind::Negative => "[-]".red().bold(),
            InsightKind::Neutral => "[.]".bright_black(),
            InsightKind::Info => "[i]".cyan(),
            InsightKind::Warning => "[!]".yellow().bold(),
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InsightKind::Positive => "positive",
            InsightKind::Negative => "negative",
            InsightKind::Neutral => "neutral",
            InsightKind::Info => "info",
            InsightKind::Warning => "warning",
        };
        write!(f, "{}", name)
    }
}

/// One generated observation. Lower priority sorts first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub priority: u8,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: u8,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            recommendation: None,
            priority,
        }
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// Format for terminal display
    pub fn to_terminal_string(&self, no_color: bool) -> String {
        let tag = if no_color {
            format!("[{}]", self.kind)
        } else {
            self.kind.tag().to_string()
        };
        let mut out = format!("{} {}\n    {}", tag, self.title, self.description);
        if let Some(rec) = &self.recommendation {
            out.push_str(&format!("\n    -> {}", rec));
        }
        out
    }
}
