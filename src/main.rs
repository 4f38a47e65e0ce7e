//! Support Inbox - A terminal customer-support inbox with a conversation list, chat and assist panels

mod app;
mod config;
mod inbox;
mod input_utils;
mod scheduler;
mod store;
mod ui;
mod viewport;

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{Config, Timings};
use store::ConversationStore;
use viewport::{LayoutMode, ViewportPolicy, DEFAULT_BREAKPOINT};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LayoutArg {
    /// Follow the terminal width
    Auto,
    /// Always show panels side by side
    Wide,
    /// Always show one panel at a time
    Narrow,
}

#[derive(Parser, Debug)]
#[command(name = "support-inbox")]
#[command(about = "A terminal customer-support inbox with an assist panel")]
#[command(version)]
struct Args {
    /// Load conversations from a JSON file instead of the built-in sample
    #[arg(short, long)]
    conversations: Option<PathBuf>,

    /// Layout mode
    #[arg(short, long, value_enum, default_value_t = LayoutArg::Auto)]
    layout: LayoutArg,

    /// Terminal width (columns) below which one panel is shown at a time
    #[arg(long, default_value_t = DEFAULT_BREAKPOINT)]
    breakpoint: u16,

    /// Simulated assist lookup latency
    #[arg(long, default_value_t = 1500)]
    assist_latency_ms: u64,

    /// Simulated assist follow-up latency
    #[arg(long, default_value_t = 2000)]
    follow_up_latency_ms: u64,

    /// Delay before the customer replies
    #[arg(long, default_value_t = 3000)]
    reply_delay_ms: u64,

    /// Log file (defaults to the user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn config(&self) -> Config {
        let viewport = match self.layout {
            LayoutArg::Auto => ViewportPolicy::Auto {
                breakpoint: self.breakpoint,
            },
            LayoutArg::Wide => ViewportPolicy::Fixed(LayoutMode::Wide),
            LayoutArg::Narrow => ViewportPolicy::Fixed(LayoutMode::Narrow),
        };

        Config {
            timings: Timings {
                assist_latency: Duration::from_millis(self.assist_latency_ms),
                follow_up_latency: Duration::from_millis(self.follow_up_latency_ms),
                reply_delay: Duration::from_millis(self.reply_delay_ms),
            },
            viewport,
            conversations: self.conversations.clone(),
        }
    }
}

fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("support-inbox")
        .join("support-inbox.log")
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(args: &Args) -> Result<()> {
    let path = args.log_file.clone().unwrap_or_else(default_log_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.config();
    let store = match &config.conversations {
        Some(path) => ConversationStore::from_file(path)?,
        None => ConversationStore::sample()?,
    };

    // Run the app
    let mut app = app::App::new(config, store)?;
    app.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["support-inbox"]);
        let config = args.config();
        assert_eq!(config.timings, Timings::default());
        assert_eq!(config.viewport, ViewportPolicy::default());
        assert!(config.conversations.is_none());
    }

    #[test]
    fn test_fixed_layout_and_timings() {
        let args = Args::parse_from([
            "support-inbox",
            "--layout",
            "narrow",
            "--reply-delay-ms",
            "10",
            "--conversations",
            "inbox.json",
        ]);
        let config = args.config();
        assert_eq!(config.viewport, ViewportPolicy::Fixed(LayoutMode::Narrow));
        assert_eq!(config.timings.reply_delay, Duration::from_millis(10));
        assert_eq!(config.conversations, Some(PathBuf::from("inbox.json")));
    }

    #[test]
    fn test_custom_breakpoint() {
        let args = Args::parse_from(["support-inbox", "--breakpoint", "140"]);
        assert_eq!(args.config().viewport.classify(120), LayoutMode::Narrow);
    }
}
