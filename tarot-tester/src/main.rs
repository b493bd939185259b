mod reports;
mod simulation;
mod util;

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;
use tarot_draw::{SystemClock, current_date, date_string};

use simulation::{SimulationConfig, Summary, run_all};
use util::{OutputTarget, local_morning, resolve_seeds, split_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "tarot-tester", version)]
#[command(about = "Headless simulation of the daily tarot draw and its quota rules")]
struct Args {
    /// Seeds to run (comma-separated, decimal or 0x hex)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Consecutive local days to simulate per seed
    #[arg(long, default_value_t = 7)]
    days: u32,

    /// Pick attempts per day, including ones past the limit
    #[arg(long, default_value_t = 5)]
    attempts_per_day: u32,

    /// Play with the VIP bypass enabled
    #[arg(long)]
    vip: bool,

    /// Abandon every n-th flight before it lands
    #[arg(long)]
    abandon_every: Option<u32>,

    /// First simulated local date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start_date: Option<String>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.days == 0 {
        bail!("--days must be at least 1");
    }
    let seeds = resolve_seeds(&split_csv(&args.seeds))?;
    let start = resolve_start(args.start_date.as_deref())?;

    if args.report == ReportFormat::Console {
        announce_banner();
    }
    if args.verbose {
        println!(
            "▶️  {} seed(s) x {} day(s) from {}",
            seeds.len(),
            args.days,
            date_string(start)
        );
    }

    let cfg = SimulationConfig {
        days: args.days,
        attempts_per_day: args.attempts_per_day,
        vip: args.vip,
        abandon_every: args.abandon_every,
        start,
    };
    let start_time = Instant::now();
    let results = run_all(&seeds, &cfg);
    let summary = Summary::from_reports(&results);

    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Console => reports::write_console_report(
            output_target.writer(),
            &results,
            &summary,
            start_time.elapsed(),
        )?,
        ReportFormat::Json => {
            reports::write_json_report(output_target.writer(), &results, &summary)?;
        }
        ReportFormat::Markdown => {
            reports::write_markdown_report(output_target.writer(), &results, &summary)?;
        }
    }
    output_target.flush_inner()?;
    drop(output_target);

    if !summary.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn resolve_start(date: Option<&str>) -> Result<DateTime<Utc>> {
    match date {
        Some(date) => local_morning(date),
        None => local_morning(&current_date(&SystemClock)),
    }
}

fn announce_banner() {
    println!("{}", "🔮 Daily Tarot Tester".bright_cyan().bold());
    println!("{}", "=====================".cyan());
}
