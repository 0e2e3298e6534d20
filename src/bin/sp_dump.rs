//! Dumps `system_profiler` categories as rendered JSON.
//!
//! Each requested category goes through the shared [`Registry`], so the tool
//! runs at most once per category even when a category is named twice.
//! Categories the tool has no data for are reported on stderr and skipped;
//! any other failure makes the run exit non-zero after every category was
//! attempted.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use sysprofiler::config::parse_timeout_secs;
use sysprofiler::{Category, DetailLevel, ProfilerConfig, Registry, parse_category_list};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "sp-dump",
    about = "Print system_profiler categories as typed, re-rendered JSON",
    version
)]
struct Cli {
    /// Categories to dump: tool keys (SPAudioDataType) or short names
    /// (audio). Comma or whitespace separated.
    categories: Vec<String>,

    /// List every known category with its envelope shape and exit.
    #[arg(long)]
    list: bool,

    /// Dump every known category.
    #[arg(long, conflicts_with = "categories")]
    all: bool,

    /// Path to the system_profiler executable.
    #[arg(long)]
    program: Option<PathBuf>,

    /// Forwarded as -detailLevel (mini, basic or full).
    #[arg(long, value_parser = parse_detail_level)]
    detail_level: Option<DetailLevel>,

    /// Kill a probe that runs longer than this many seconds.
    #[arg(long, value_parser = parse_timeout)]
    timeout: Option<Duration>,

    /// Wrap each payload back in the tool's {"<key>": [...]} envelope.
    #[arg(long)]
    envelope: bool,

    /// Increase logging verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list {
        for category in Category::ALL {
            println!("{}\t{}", category.as_str(), category.shape());
        }
        return Ok(());
    }

    let categories = if cli.all {
        Category::ALL.to_vec()
    } else {
        parse_category_list(&cli.categories)?
    };
    if categories.is_empty() {
        bail!("no categories requested; pass CATEGORY..., --all or --list");
    }

    let registry = Registry::new(build_config(&cli)?);
    info!(count = categories.len(), "dumping categories");

    let mut failures: Vec<String> = Vec::new();
    for category in categories {
        let rendered = if cli.envelope {
            registry.render_envelope(category)
        } else {
            registry.render(category)
        };
        match rendered {
            Ok(text) => println!("{text}"),
            Err(err) if err.is_category_missing() => {
                eprintln!("sp-dump: no data for {category}");
            }
            Err(err) => {
                error!(category = %category, "{err}");
                failures.push(format!("{category}: {err}"));
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        bail!(
            "{} categor{} failed:\n  {}",
            failures.len(),
            if failures.len() == 1 { "y" } else { "ies" },
            failures.join("\n  ")
        )
    }
}

/// Environment overrides first, then explicit flags on top.
fn build_config(cli: &Cli) -> Result<ProfilerConfig> {
    let mut config = ProfilerConfig::from_env()?;
    if let Some(program) = &cli.program {
        config = config.with_program(program);
    }
    if let Some(level) = cli.detail_level {
        config = config.with_detail_level(level);
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    Ok(config)
}

fn parse_detail_level(raw: &str) -> Result<DetailLevel, String> {
    raw.parse().map_err(|err: anyhow::Error| format!("{err:#}"))
}

fn parse_timeout(raw: &str) -> Result<Duration, String> {
    parse_timeout_secs(raw).map_err(|err| format!("{err:#}"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
