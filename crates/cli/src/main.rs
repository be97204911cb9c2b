use anyhow::{bail, Context, Result};
use clap::Parser;
use funcharvest_pipeline::{FinishedLog, Harvester, HarvestStats, SampleStore};
use funcharvest_splitter::{Language, SplitterConfig};
use std::path::{Path, PathBuf};

use crate::flags::LanguageFlag;

mod flags;

#[derive(Parser)]
#[command(name = "funcharvest")]
#[command(about = "Harvest top-level function bodies from source repositories", long_about = None)]
#[command(version)]
struct Cli {
    /// Language to harvest
    #[arg(long, value_enum)]
    language: LanguageFlag,

    /// Repository roots to harvest (directory name is the repository identifier)
    #[arg(required = true)]
    repos: Vec<PathBuf>,

    /// Sample store path (default: data/raw/repo-samples_<language>.json)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Directory holding preprocessed intermediates and the finished-repo log
    #[arg(long, default_value = ".")]
    work_dir: PathBuf,

    /// Override the token ceiling for accepted candidates
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Override the minimum line span for accepted candidates
    #[arg(long)]
    min_lines: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for the summary)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let language = cli.language.as_domain();

    let mut config = SplitterConfig::for_language(language);
    if let Some(max_tokens) = cli.max_tokens {
        config.max_candidate_tokens = max_tokens;
    }
    if let Some(min_lines) = cli.min_lines {
        config.min_candidate_lines = min_lines;
    }

    let store_path = cli
        .out
        .unwrap_or_else(|| default_store_path(language));

    let harvester = Harvester::with_config(language, config, &cli.work_dir)?;
    let finished = FinishedLog::for_language(&cli.work_dir, language);
    let mut store = SampleStore::load_or_default(&store_path)
        .with_context(|| format!("Failed to load sample store {}", store_path.display()))?;

    let mut totals = HarvestStats::new();
    for repo_root in &cli.repos {
        let repo_name = repo_name_of(repo_root)?;

        if finished.is_finished(&repo_name)? {
            log::info!("{repo_name} already finished, skipping");
            continue;
        }

        let stats = harvester.harvest_repo(&repo_name, repo_root, &mut store)?;
        store
            .save(&store_path)
            .with_context(|| format!("Failed to save sample store {}", store_path.display()))?;
        finished.mark_finished(&repo_name)?;

        totals.merge(stats);
    }

    log::info!(
        "Harvested {} functions into {} ({} rows total)",
        totals.functions,
        store_path.display(),
        store.len()
    );
    println!("{}", serde_json::to_string_pretty(&totals)?);

    Ok(())
}

fn default_store_path(language: Language) -> PathBuf {
    PathBuf::from("data")
        .join("raw")
        .join(format!("repo-samples_{}.json", language.as_str()))
}

/// The repository identifier is the root directory's name
fn repo_name_of(repo_root: &Path) -> Result<String> {
    match repo_root.file_name().and_then(|name| name.to_str()) {
        Some(name) => Ok(name.to_string()),
        None => bail!("Cannot derive a repository name from {}", repo_root.display()),
    }
}
