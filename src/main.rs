//! datehist CLI - histogram of file dates
//!
//! Usage: datehist <PATH> [-e .md] [--debug] [--json] [--list] [--no-repo]
//!
//! Infers one date per file in the directory (frontmatter header, filename
//! prefix, git history, mtime - first hit wins) and plots the per-month
//! counts as a terminal bar chart.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use datehist::histogram::Histogram;
use datehist::models::ResolvedDate;
use datehist::resolver::{self, ResolveOptions};
use datehist::ui;

/// datehist - histogram of file dates
#[derive(Parser, Debug)]
#[command(name = "datehist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to analyze
    path: PathBuf,

    /// File extension to analyze
    #[arg(short, long, default_value = ".md")]
    ext: String,

    /// Print the tier tried for each file to stderr
    #[arg(long)]
    debug: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    json: bool,

    /// Print one row per file instead of the chart
    #[arg(long)]
    list: bool,

    /// Skip the git tier even when git is installed
    #[arg(long)]
    no_repo: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let opts = ResolveOptions {
        root: cli.path,
        ext: cli.ext,
        debug: cli.debug,
        use_repo: !cli.no_repo,
    };

    if cli.json {
        report_json(opts)
    } else if cli.list {
        report_list(opts)
    } else {
        report_chart(opts)
    }
}

/// Stream one `resolved` event per file while the resolver advances, then a
/// final `histogram` event.
fn report_json(opts: ResolveOptions) -> Result<()> {
    let mut hist = Histogram::new();
    for resolved in resolver::resolve(opts)? {
        ui::json::emit(serde_json::json!({
            "event": "resolved",
            "file": resolved.path.display().to_string(),
            "date": resolved.date.to_string(),
            "source": resolved.source.name(),
        }))?;
        hist.add(resolved.date);
    }

    let buckets: Vec<_> = hist
        .buckets()
        .map(|((year, month), count)| {
            serde_json::json!({ "year": year, "month": month, "count": count })
        })
        .collect();
    ui::json::emit(serde_json::json!({
        "event": "histogram",
        "total": hist.total(),
        "buckets": buckets,
    }))?;
    Ok(())
}

fn report_list(opts: ResolveOptions) -> Result<()> {
    let caps = ui::terminal::detect_capabilities();
    let resolutions: Vec<ResolvedDate> = resolver::resolve(opts)?.collect();
    print!("{}", ui::chart::render_list(&resolutions, &caps));
    Ok(())
}

fn report_chart(opts: ResolveOptions) -> Result<()> {
    let caps = ui::terminal::detect_capabilities();
    let resolutions: Vec<ResolvedDate> = resolver::resolve(opts)?.collect();
    let hist: Histogram = resolutions.iter().map(|r| r.date).collect();

    print!("{}", ui::chart::render_histogram(&hist, &caps));
    print!("{}", ui::chart::render_summary(&resolutions, &hist, &caps));
    Ok(())
}
