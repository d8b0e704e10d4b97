// Command-line entry point for pathctx.

use anyhow::Result;
use clap::Parser;
use pathctx::application::{ExtractConfig, ExtractUsecase};
use pathctx::error::ExtractError;
use pathctx::infrastructure::concurrency::init_thread_pool;
use pathctx::infrastructure::project_loader::ProjectLoader;
use pathctx::infrastructure::SynAstParser;
use pathctx::ports::context_exporter::OutputFormat;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input source file path (can specify multiple)
    #[arg(short, long)]
    input: Vec<PathBuf>,

    /// Input source folder(s), searched recursively for .rs files
    #[arg(short = 'd', long)]
    folder: Vec<PathBuf>,

    /// Workspace Cargo.toml; every member's sources are included
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Raw)]
    format: OutputFormat,

    /// Worker threads (default: half the cores)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Skip files that fail to parse instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut loader = ProjectLoader::new();
    for input_file in &cli.input {
        loader.add_file(input_file)?;
    }
    for folder in &cli.folder {
        loader.add_folder(folder)?;
    }
    if let Some(manifest) = &cli.workspace {
        loader.add_workspace(manifest)?;
    }
    let sources = loader.into_files();
    if sources.is_empty() {
        return Err(ExtractError::NoSources.into());
    }

    let config = ExtractConfig {
        format: cli.format,
        jobs: cli.jobs,
        keep_going: cli.keep_going,
    };
    init_thread_pool(config.jobs)?;

    let usecase = ExtractUsecase {
        parser: &SynAstParser,
        config: &config,
    };
    usecase.run_to(&sources, cli.output.as_deref())?;
    Ok(())
}
