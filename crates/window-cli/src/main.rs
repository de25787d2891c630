use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use window_engine::{compute_window, IntervalLabel, TimeWindow};

#[derive(Parser)]
#[command(
    name = "obswindow",
    version,
    about = "Compute observation windows for time-series queries"
)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the end bound of a window from its start and interval
    Compute {
        /// Interval label, e.g. "6 hours" or "3 months"
        #[arg(short, long, env = "OBSWINDOW_INTERVAL")]
        interval: String,

        /// Start date (YYYY-MM-DD)
        #[arg(short = 'd', long, env = "OBSWINDOW_START_DATE", value_parser = parse_date)]
        start_date: NaiveDate,

        /// Start time of day (HH, HH:MM or HH:MM:SS)
        #[arg(short = 't', long, env = "OBSWINDOW_START_TIME", default_value = "00")]
        start_time: String,

        /// Output format
        #[arg(short, long, env = "OBSWINDOW_FORMAT", value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// List the supported interval labels
    Labels,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Pretty-printed JSON
    Json,
    /// One line: start -> end
    Text,
    /// ISO 8601 interval (start/end)
    Interval,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{s}': {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Compute {
            interval,
            start_date,
            start_time,
            format,
        } => {
            let window = compute_window(&interval, start_date, &start_time)
                .context("Failed to compute observation window")?;
            println!("{}", render(&window, format)?);
        }
        Commands::Labels => {
            for label in IntervalLabel::ALL {
                println!("{label}\t{}", label.step());
            }
        }
    }

    Ok(())
}

fn render(window: &TimeWindow, format: Format) -> Result<String> {
    debug!("rendering window {window}");
    Ok(match format {
        Format::Json => {
            serde_json::to_string_pretty(window).context("Failed to serialize window")?
        }
        Format::Text => window.to_string(),
        Format::Interval => window.iso8601_interval(),
    })
}
