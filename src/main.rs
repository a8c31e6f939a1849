use clap::Parser;
use parliament_export::config::{DEFAULT_DB_PATH, DEFAULT_OUTPUT_DIR};
use parliament_export::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Export parliament data to the static JSON files used by the demo
#[derive(Parser, Debug)]
#[command(name = "parliament-export")]
#[command(about = "Export legislators, bills, embeddings and metadata to JSON")]
#[command(version)]
struct Args {
    /// SQLite database to read, relative to the working directory
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Directory for the JSON files, relative to the working directory
    #[arg(long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Show per-record debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("parliament_export=debug,warn")
    } else {
        EnvFilter::new("parliament_export=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    println!("\nDatabase: {}", args.db.display());
    println!("Output: {}\n", args.output_dir.display());

    let config = ConfigBuilder::new()
        .db_path(args.db)
        .output_dir(args.output_dir)
        .build()?;

    let summary = run(&config)?;

    let rule = "=".repeat(50);
    println!("\n{}", rule);
    println!("EXPORT COMPLETE!");
    println!("{}", rule);
    println!("  Legislators: {}", summary.legislators);
    println!("  Bills: {}", summary.bills);
    println!("  Embeddings: {}", summary.embeddings);
    println!("  Parties: {}", summary.parties);
    println!("{}\n", rule);

    Ok(())
}
