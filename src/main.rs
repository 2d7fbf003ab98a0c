//! GPTIQX CLI
//!
//! Usage:
//!   gptiqx --transcript chat.txt             # Score a transcript via the gateway
//!   gptiqx --history conversations.json      # Dashboard insights for a history
//!   gptiqx --serve                           # HTTP API server
//!   gptiqx --history h.json --json           # JSON output

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use gptiqx::config::Config;
use gptiqx::core::{
    best_session_index, build_dashboard, chart_points, run_server, DateFilter, GatewayClient,
};
use gptiqx::types::{ConversationRecord, Dashboard, ProPanel, ProfileStats, ScoreSnapshot};
use gptiqx::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "gptiqx",
    version = VERSION,
    about = "GPTIQX - Score AI conversations and turn the scores into insights",
    long_about = "GPTIQX scores AI conversation transcripts through a hosted model\n\
                  (UserIQ, GPTIQ, ConversationIQ) and turns the scores into\n\
                  ranked insights, a primary recommendation and trends.\n\n\
                  Modes:\n  \
                  --transcript  Score one transcript\n  \
                  --history     Dashboard for a JSON array of conversations\n  \
                  --serve       HTTP API server mode"
)]
struct Args {
    /// Transcript file to score
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// JSON file with analyzed conversations
    #[arg(long)]
    history: Option<PathBuf>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (overrides GPTIQX_ADDR)
    #[arg(long)]
    addr: Option<String>,

    /// Chart range for --history
    #[arg(long, value_enum, default_value_t = RangeArg::All)]
    range: RangeArg,

    /// Show pro insights
    #[arg(long)]
    pro: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RangeArg {
    #[value(name = "7d")]
    Week,
    #[value(name = "30d")]
    Month,
    All,
}

impl From<RangeArg> for DateFilter {
    fn from(arg: RangeArg) -> Self {
        match arg {
            RangeArg::Week => DateFilter::Week,
            RangeArg::Month => DateFilter::Month,
            RangeArg::All => DateFilter::All,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gptiqx=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut config = Config::from_env();
    if let Some(addr) = &args.addr {
        config.addr = addr.clone();
    }

    if args.serve {
        run_server(&config)
            .await
            .map_err(|e| anyhow::anyhow!("server error: {}", e))?;
    } else if let Some(path) = &args.transcript {
        run_analyze(path, &config, &args).await?;
    } else if let Some(path) = &args.history {
        run_history(path, &args)?;
    } else {
        anyhow::bail!("nothing to do: pass --transcript, --history or --serve (see --help)");
    }

    Ok(())
}

/// Score one transcript and print the result
async fn run_analyze(path: &Path, config: &Config, args: &Args) -> anyhow::Result<()> {
    let transcript = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read transcript {}", path.display()))?;

    let client = GatewayClient::new(config);
    let scores = client.analyze(&transcript).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        print_scores(&scores);
    }
    Ok(())
}

/// Render dashboard insights for a stored history
fn run_history(path: &Path, args: &Args) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read history {}", path.display()))?;
    let conversations: Vec<ConversationRecord> =
        serde_json::from_str(&raw).context("history must be a JSON array of conversations")?;

    let now = Utc::now();
    let mut dashboard = build_dashboard(&conversations, now, args.pro);

    let mut ordered = conversations.clone();
    ordered.sort_by_key(|c| c.created_at);
    let in_range = DateFilter::from(args.range).apply(&ordered, now);
    dashboard.chart = chart_points(in_range.iter().copied());
    dashboard.best_session = best_session_index(in_range.iter().copied());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print_dashboard(&dashboard, args.no_color);
    }
    Ok(())
}

fn print_scores(scores: &ScoreSnapshot) {
    println!("{}", "Conversation scores".bold());
    println!("  UserIQ         {:>3}", scores.user_iq);
    print_sub("clarity", scores.user_clarity);
    print_sub("depth", scores.user_depth);
    print_sub("creativity", scores.user_creativity);
    println!("  GPTIQ          {:>3}", scores.gpt_iq);
    print_sub("clarity", scores.gpt_clarity);
    print_sub("depth", scores.gpt_depth);
    print_sub("flow", scores.gpt_flow);
    println!("  ConversationIQ {:>3}", scores.conversation_iq);
    print_sub("flow", scores.conversation_flow);
    print_sub("synergy", scores.conversation_synergy);
    if let Some(justification) = &scores.justification {
        println!();
        println!("  {}", justification.italic());
    }
}

fn print_sub(name: &str, value: Option<i32>) {
    match value {
        Some(v) => println!("    {:<12} {:>3}", name, v),
        None => println!("    {:<12}   -", name),
    }
}

fn print_dashboard(dashboard: &Dashboard, no_color: bool) {
    println!(
        "{} ({} conversations)",
        "GPTIQX Dashboard".bold(),
        dashboard.conversation_count
    );
    println!();

    if let Some(latest) = &dashboard.latest {
        println!(
            "  UserIQ {}  GPTIQ {}  ConversationIQ {}",
            latest.user_iq, latest.gpt_iq, latest.conversation_iq
        );
    }
    let trends = &dashboard.trends;
    for (label, trend) in [
        ("UserIQ", &trends.user_iq),
        ("GPTIQ", &trends.gpt_iq),
        ("ConversationIQ", &trends.conversation_iq),
    ] {
        match trend.change() {
            Some(diff) => println!("  {:<15} {:+} vs last week", label, diff),
            None => println!("  {:<15} no baseline yet", label),
        }
    }
    if let Some(status) = &dashboard.status {
        println!();
        println!("  {}", status);
    }

    println!();
    println!("{}", "Insights".bold());
    for insight in &dashboard.insights {
        println!("  {}", insight.to_terminal_string(no_color));
    }

    if let Some(primary) = &dashboard.primary {
        println!();
        println!(
            "{} ({} confidence)",
            "Your Next Improvement".bold(),
            primary.confidence
        );
        println!("  {}", primary.problem);
        println!("  Why:     {}", primary.reason);
        println!("  Do this: {}", primary.action);
    }

    match &dashboard.pro {
        Some(ProPanel::Teaser { message }) => println!("  {}", message.dimmed()),
        Some(ProPanel::Insights {
            pattern,
            improvement_potential,
        }) => {
            println!("  Pattern:   {}", pattern);
            println!("  Potential: {}", improvement_potential);
        }
        None => {}
    }

    if let Some(focus) = &dashboard.focus {
        println!();
        println!("{}", "Current Improvement Focus".bold());
        println!("  {} (priority {})", focus.name, focus.priority);
        println!("  {}", focus.description);
        println!(
            "  Improving this could raise your ConversationIQ by ~{} points",
            focus.impact_range
        );
    }

    if !dashboard.timeline.is_empty() {
        println!();
        println!("{}", "Learning Timeline".bold());
        for entry in &dashboard.timeline {
            println!(
                "  {}  {:<24} {:>3} {:>3} {:>3}  {}",
                entry.created_at.format("%Y-%m-%d"),
                entry.title,
                entry.user_iq,
                entry.gpt_iq,
                entry.conversation_iq,
                entry.takeaway.italic()
            );
        }
    }

    if let Some(best) = dashboard.best_session.and_then(|i| dashboard.chart.get(i)) {
        println!();
        println!(
            "  Best session: {} ({} / {} / {})",
            best.date, best.user_iq, best.gpt_iq, best.conversation_iq
        );
    }

    if let Some(profile) = &dashboard.profile {
        print_profile(profile);
    }
}

fn print_profile(profile: &ProfileStats) {
    println!();
    println!("{}", "Profile".bold());
    println!(
        "  Averages: UserIQ {}  GPTIQ {}  ConversationIQ {}",
        profile.avg_user_iq, profile.avg_gpt_iq, profile.avg_conversation_iq
    );
    println!(
        "  Best ConversationIQ {} on {}",
        profile.best_conversation.score,
        profile.best_conversation.created_at.format("%Y-%m-%d")
    );
    println!(
        "  First conversation {} on {}",
        profile.first_conversation.score,
        profile.first_conversation.created_at.format("%Y-%m-%d")
    );
    if let Some(milestone) = &profile.first_above_80 {
        println!(
            "  First above 80: {} on {}",
            milestone.score,
            milestone.created_at.format("%Y-%m-%d")
        );
    }
    println!(
        "  Strongest skill: {}  Weakest skill: {}",
        profile.strongest_area, profile.weakest_area
    );
    if let Some(progress) = &profile.progress {
        println!(
            "  Early {} -> recent {} ({:+})",
            progress.initial_avg_iq, progress.current_avg_iq, progress.improvement
        );
        println!("  {}", progress.summary.italic());
    }
}
