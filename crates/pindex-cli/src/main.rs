use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "data/pinyin.txt";
const DEFAULT_OUTPUT: &str = "data/pinyin.db";

#[derive(Parser)]
#[command(
    name = "pindex",
    about = "Build an indexed SQLite lookup table from a pinyin dictionary"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the lookup table from the source dictionary
    Build {
        /// Source dictionary file
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Database file to (re)create
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Inspect an existing lookup table
    Check {
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        db: PathBuf,

        /// Print rows whose pinyin starts with this prefix
        #[arg(long)]
        prefix: Option<String>,

        #[arg(long, default_value_t = 5)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    match Cli::parse().command {
        // Bare invocation: build with the fixed relative paths.
        None => {
            build(PathBuf::from(DEFAULT_INPUT), PathBuf::from(DEFAULT_OUTPUT)).await
        }
        Some(Command::Build { input, output }) => build(input, output).await,
        Some(Command::Check { db, prefix, limit }) => check(db, prefix, limit).await,
    }
}

async fn build(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    println!("Reading {}...", input.display());
    let start = Instant::now();
    let rows = pindex_dict::read_rows(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let count = pindex_store::build(&output, &rows)
        .await
        .with_context(|| format!("failed to build {}", output.display()))?;
    tracing::info!("table rebuilt in {} ms", start.elapsed().as_millis());

    println!("Inserted {count} rows.");
    println!("Database generated at {}", output.display());
    Ok(())
}

async fn check(db: PathBuf, prefix: Option<String>, limit: u32) -> anyhow::Result<()> {
    let count = pindex_store::row_count(&db)
        .await
        .with_context(|| format!("failed to open {}", db.display()))?;
    println!("{count} rows in {}", db.display());

    if let Some(prefix) = prefix {
        for row in pindex_store::lookup_prefix(&db, &prefix, limit).await? {
            println!(" - {}\t{}", row.pinyin, row.hanzi);
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
