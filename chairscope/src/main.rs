//! chairscope - Review-cycle reporting for program chairs
//!
//! One-shot reports against a review-management platform:
//! - `capacity`: declared max-load distribution for area chairs and reviewers
//! - `progress`: review completion statistics plus an urgent-papers file
//! - `recommendations`: senior-chair recommendation export from a commitment
//!   site
//!
//! Reports print to stdout; diagnostics go to stderr so output stays
//! pipeable. Credentials and the venue id are prompted for interactively and
//! never read from flags, environment, or config.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use chairscope::models::{AssignmentRosters, Role};
use chairscope::report::{write_recommendation_report, write_urgent_report, ProgressStats};
use chairscope::services::{
    apply_completions, audit_capacity, load_commitment_submissions, load_submissions,
    resolve_assignments, resolve_completions, resolve_track_chairs, EmailDirectory,
};
use chairscope_common::platform::{Platform, PlatformClient};
use chairscope_common::Config;

/// Command-line arguments for chairscope
#[derive(Parser, Debug)]
#[command(name = "chairscope")]
#[command(about = "Review-cycle reporting for conference program chairs")]
#[command(version)]
struct Args {
    /// Config file path (defaults to ./chairscope.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Audit declared review capacity for area chairs and reviewers
    Capacity,
    /// Report review progress and write the urgent-papers file
    Progress,
    /// Export senior-chair recommendations from a commitment site
    Recommendations,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries report output, so the subscriber writes to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    info!("Starting chairscope v{}", env!("CARGO_PKG_VERSION"));

    let username = prompt("Username")?;
    let password = prompt("Password")?;
    let venue = prompt("Venue id (e.g. aclweb.org/ACL/ARR/2023/December)")?;

    let client = PlatformClient::login(&config.base_url, &username, &password)
        .await
        .context("Platform login failed")?;

    match args.command {
        Command::Capacity => run_capacity(&client, &venue, &config).await,
        Command::Progress => run_progress(&client, &venue, &config).await,
        Command::Recommendations => run_recommendations(&client, &venue, &config).await,
    }
}

/// Plain-text prompt on stderr; the reply is echoed like any terminal input.
fn prompt(label: &str) -> Result<String> {
    eprint!("{}: ", label);
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}

async fn run_capacity(platform: &impl Platform, venue: &str, config: &Config) -> Result<()> {
    for role in [Role::AreaChairs, Role::Reviewers] {
        let report = audit_capacity(platform, venue, role, &config.max_load_invitation)
            .await
            .with_context(|| format!("Capacity audit failed for {}", role))?;
        report.print_summary();
    }
    Ok(())
}

async fn run_progress(platform: &impl Platform, venue: &str, config: &Config) -> Result<()> {
    let coi_papers: BTreeSet<u64> = config.coi_papers.iter().copied().collect();

    let mut registry = load_submissions(platform, venue)
        .await
        .context("Failed to load submissions")?;
    println!("Number of active submissions: {}", registry.len());
    println!(
        "Number of withdrawn/desk-rejected submissions: {}",
        registry.withdrawn_count()
    );

    // Three edge lookups per submission; expect this to take a while on a
    // full cycle.
    info!("Resolving assignments");
    let mut rosters = AssignmentRosters::default();
    let mut processed = 0usize;
    for (_, submission) in registry.iter_mut() {
        resolve_assignments(platform, venue, submission, &mut rosters)
            .await
            .context("Assignment resolution failed")?;
        processed += 1;
        if processed % 100 == 0 {
            info!(processed, "Assignment resolution progress");
        }
    }

    info!("Resolving review completion status");
    for number in registry.numbers() {
        let resolution = resolve_completions(platform, venue, number).await;
        if let Some(submission) = registry.get_mut(number) {
            apply_completions(resolution, submission, &mut rosters.reviewers);
        }
    }

    let stats = ProgressStats::collect(&registry, config.urgent_threshold, &coi_papers);
    stats.print_summary();

    let emails = EmailDirectory::resolve(platform, &rosters.all_ids())
        .await
        .context("Email resolution failed")?;
    println!("Number of resolved emails: {}", emails.len());

    let path = Path::new(&config.urgent_papers_file);
    let rows = write_urgent_report(path, &registry, &stats.urgent, &emails)?;
    println!(
        "Check {} for contact info on the {} papers with <= {} completed reviews",
        config.urgent_papers_file, rows, config.urgent_threshold
    );
    Ok(())
}

async fn run_recommendations(
    platform: &impl Platform,
    venue: &str,
    config: &Config,
) -> Result<()> {
    let coi_papers: BTreeSet<u64> = config.coi_papers.iter().copied().collect();

    let mut listing = load_commitment_submissions(platform, venue)
        .await
        .context("Failed to load commitment-site submissions")?;
    println!(
        "Number of submissions on commitment site: {}",
        listing.registry.len()
    );

    let chairs = resolve_track_chairs(platform, venue, &config.track_groups, &mut listing)
        .await
        .context("Track-chair resolution failed")?;

    let chair_ids: Vec<String> = chairs.into_iter().collect();
    let emails = EmailDirectory::resolve(platform, &chair_ids)
        .await
        .context("Email resolution failed")?;
    println!("Number of resolved emails: {}", emails.len());

    let path = Path::new(&config.recommendation_file);
    let summary = write_recommendation_report(path, &listing.registry, &emails, &coi_papers)?;
    summary.print_summary(path);
    Ok(())
}
