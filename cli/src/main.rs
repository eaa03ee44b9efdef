//! CLI for the GitHub portfolio showcase.
//!
//! Fetches an account's public repositories and renders the project gallery
//! and skills views the portfolio site is built from, or one repository's
//! full detail.

use clap::Parser;
use github_showcase::{
    load_account, AccountConfig, ConfigError, FetchError, PortfolioView, ProjectDetail, Runner,
    RunnerConfig, RunnerError, DEFAULT_ACCOUNT,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// GitHub Showcase - Fetch an account's repositories and render the portfolio views.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub account to showcase.
    #[arg(long, env = "SHOWCASE_ACCOUNT", default_value = DEFAULT_ACCOUNT)]
    account: String,

    /// Path to an account TOML file (overrides --account).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum projects in the gallery view.
    #[arg(long, default_value_t = 30)]
    gallery_limit: usize,

    /// Maximum projects sampled for the skills view.
    #[arg(long, default_value_t = 20)]
    skills_limit: usize,

    /// Fetch full detail (readme, language breakdown) for one repository.
    #[arg(long)]
    detail: Option<String>,

    /// Emit JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,
}

/// Errors surfaced by the CLI itself.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Runner(#[from] RunnerError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(had_errors) => {
            if had_errors {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic. Returns whether any view carried an error.
async fn run(args: Args) -> Result<bool, CliError> {
    let account = match &args.config {
        Some(path) => load_account(path)?,
        None => AccountConfig::new(args.account),
    };

    let config = RunnerConfig::new(account)
        .with_gallery_limit(args.gallery_limit)
        .with_skills_limit(args.skills_limit);
    let runner = Runner::new(config)?;

    if let Some(repo) = &args.detail {
        let detail = runner.detail(repo).await?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&detail)?);
        } else {
            print_detail(&detail);
        }
        return Ok(false);
    }

    let view = runner.run().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view);
    }
    Ok(view.has_errors())
}

/// Prints the gallery and skills views.
fn print_view(view: &PortfolioView) {
    println!("\nGallery ({} projects):", view.gallery.all.len());
    match &view.gallery_error {
        Some(message) => println!("  Unavailable: {message} (rerun to retry)"),
        None => {
            for bucket in view.gallery.non_empty() {
                println!(
                    "  {} ({}):",
                    bucket.category.display_name(),
                    bucket.projects.len()
                );
                for project in &bucket.projects {
                    println!(
                        "    {} [*{}] - {}",
                        project.name, project.stars, project.description
                    );
                }
            }
        }
    }

    println!("\nSkills:");
    match &view.skills_error {
        Some(message) => println!("  Unavailable: {message} (rerun to retry)"),
        None => {
            for group in view.skills.non_empty() {
                println!("  {}:", group.family.key());
                for tech in &group.technologies {
                    println!("    {} (x{})", tech.name, tech.count);
                }
            }
        }
    }
}

/// Prints one repository's detail, previewing the readme.
fn print_detail(detail: &ProjectDetail) {
    let project = &detail.project;
    println!("\n{}", project.name);
    println!("  {}", project.description);
    println!("  URL: {}", project.url);
    if let Some(homepage) = &project.homepage {
        println!("  Homepage: {homepage}");
    }
    println!("  Stars: {}  Forks: {}", project.stars, project.forks);
    if !project.topics.is_empty() {
        println!("  Topics: {}", project.topics.join(", "));
    }

    if !detail.languages.is_empty() {
        println!("  Languages:");
        for (language, bytes) in &detail.languages {
            println!("    {language}: {bytes} bytes");
        }
    }

    match &detail.readme {
        Some(readme) => {
            println!("\n  Readme:");
            for line in readme.lines().take(10) {
                println!("    {line}");
            }
            if readme.lines().count() > 10 {
                println!("    ...");
            }
        }
        None => println!("\n  No readme."),
    }
}
