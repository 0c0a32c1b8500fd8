//! symdex - query Javadoc search indexes from the command line.
//!
//! Loads a `*-search-index.js` file (or a whole Javadoc output directory),
//! builds the symbol index, and runs one command against it.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use symdex_core::SearchIndexKind;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "symdex")]
#[command(about = "Search Javadoc symbol indexes")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search an index for a term
    Search {
        /// Search-index file or Javadoc directory
        path: PathBuf,

        /// Term to search for
        term: String,

        /// Maximum number of results (0 = unlimited)
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// JSON file with a ranking configuration
        #[arg(long)]
        ranking: Option<PathBuf>,
    },

    /// Print record counts for an index
    Stats {
        /// Search-index file or Javadoc directory
        path: PathBuf,
    },

    /// Re-emit an index as a Javadoc search-index script
    Export {
        /// Search-index file or Javadoc directory
        path: PathBuf,

        /// Index to emit
        #[arg(short, long, value_enum, default_value_t = KindArg::Member)]
        kind: KindArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Member,
    Type,
    Package,
}

impl From<KindArg> for SearchIndexKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Member => SearchIndexKind::Member,
            KindArg::Type => SearchIndexKind::Type,
            KindArg::Package => SearchIndexKind::Package,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries results only.
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Search {
            path,
            term,
            limit,
            json,
            ranking,
        } => {
            info!("Searching {} for {:?}", path.display(), term);
            commands::search(&path, &term, limit, json, ranking.as_deref())
        }
        Command::Stats { path } => commands::stats(&path),
        Command::Export { path, kind } => commands::export(&path, kind.into()),
    }
}
