use anyhow::Result;
use clap::Parser;
use reviewmill::cli::{AppContext, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; otherwise warnings and errors only
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Clean(args) => reviewmill::core::clean_run(args, &ctx),
        Commands::Tokenize(args) => reviewmill::tokenize_run(args, &ctx),
        Commands::Rank(args) => reviewmill::rank_run(args, &ctx),
        Commands::Init(args) => reviewmill::infra::config::init(args, &ctx),
    }
}
