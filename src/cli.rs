use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "reviewmill")]
#[command(
    about = "A lightweight batch CLI for cleaning, segmenting, and ranking scraped review keywords"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress bars and non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be done without executing
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean scraped text columns and segment rows into reviews
    Clean(CleanArgs),

    /// Analyze review text into filtered keyword stems
    Tokenize(TokenizeArgs),

    /// Rank keywords per subject by frequency
    Rank(RankArgs),

    /// Initialize a reviewmill.toml config file
    Init(InitArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input CSV produced by the scraper
    pub input: PathBuf,

    /// Output file path (defaults to clean.output_file from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TokenizeArgs {
    /// Input CSV produced by `clean`
    pub input: PathBuf,

    /// Output file path (defaults to tokenize.output_file from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Input CSV produced by `tokenize`
    pub input: PathBuf,

    /// Output file path (defaults to rank.output_file from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}
