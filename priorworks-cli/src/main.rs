#![deny(missing_docs)]
//! Prior works command-line interface.
//!
//! Collects a user's GitHub repositories and manually declared projects into
//! one Markdown document.

mod github;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use github::RepositorySource;
#[cfg(not(test))]
use github::GitHubRepositorySource;
use priorworks_core::{Config, FrontMatter, PipelineContext, assemble_projects, build_document};
#[cfg(not(test))]
use priorworks_core::{StdFileSystem, load_config};
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "priorworks", version, about = "Prior works document generator")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(
        short,
        long,
        global = true,
        env = "PRIORWORKS_CONFIG",
        default_value = "config.json"
    )]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
struct GenerateArgs {
    /// Write to this path instead of `document.file`.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print the document to stdout instead of writing a file.
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, merge, validate and write the document.
    Generate(GenerateArgs),
    /// Run the pipeline and report problems without writing anything.
    Check,
}

#[cfg(not(test))]
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
fn main() {}

#[cfg(not(test))]
async fn run(cli: Cli) -> CliResult<()> {
    let config = load_config(&StdFileSystem::new(), &cli.config)?
        .with_token(std::env::var("GITHUB_TOKEN").ok());
    let source = GitHubRepositorySource::from_env(config.require_token()?)?;

    match cli.command {
        Commands::Generate(args) => {
            let today = chrono::Local::now().date_naive();
            run_generate_with(&config, &source, today, args).await
        }
        Commands::Check => run_check_with(&config, &source).await,
    }
}

/// Build the document and write it, or print it with `--stdout`.
async fn run_generate_with<S: RepositorySource>(
    config: &Config,
    source: &S,
    today: NaiveDate,
    args: GenerateArgs,
) -> CliResult<()> {
    let repos = source.list_repositories().await?;
    let ctx = PipelineContext::from_config(config);
    let front = FrontMatter::from_document(&config.document, today);
    let document = build_document(&ctx, &front, &repos, &config.projects)?;

    if args.stdout {
        print!("{document}");
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| config.document.file.clone());
    write_document(&path, &document).await?;
    log::info!("wrote {}", path.display());
    println!("Done");
    Ok(())
}

/// Run every stage except rendering output to disk.
async fn run_check_with<S: RepositorySource>(config: &Config, source: &S) -> CliResult<()> {
    let repos = source.list_repositories().await?;
    let ctx = PipelineContext::from_config(config);
    let projects = assemble_projects(&ctx, &repos, &config.projects)?;
    println!(
        "{} projects ready ({} repositories fetched, {} declared manually).",
        projects.len(),
        repos.len(),
        config.projects.len()
    );
    Ok(())
}

async fn write_document(path: &Path, contents: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}
