//! Demo driver: builds a radix tree, runs membership queries and dumps it.

#[macro_use]
extern crate error_chain;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

use prefix_index::errors::{ErrorKind, Result, ResultExt};
use prefix_index::radix_tree::RadixTree;

const SAMPLE_KEYS: &[&str] = &[
    "hello", "hell", "heaven", "heavy", "Goo", "Google", "Golang", "Googlerr",
];

const SAMPLE_QUERIES: &[&str] = &[
    "hell", "hello", "heaven", "heavy", "heav", "helloo", "Googler", "Googlerr",
];

#[derive(Parser, Debug)]
#[command(name = "prefix-index")]
#[command(about = "Insert keys into a radix tree, query it and print its shape")]
#[command(version)]
struct Args {
    /// Text file to take keys from, one per word
    #[arg(short, long)]
    keys_file: Option<PathBuf>,

    /// Key to look up; may be repeated
    #[arg(short, long = "query")]
    queries: Vec<String>,

    /// Skip printing the tree structure
    #[arg(long)]
    no_dump: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn read_file_into_words(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .chain_err(|| ErrorKind::KeyFile(path.display().to_string()))?;

    Ok(contents.unicode_words().map(From::from).collect())
}

fn run() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("prefix_index={}", log_level).into()),
        )
        .with_writer(io::stderr)
        .init();

    let keys = match args.keys_file {
        Some(ref path) => {
            let words = read_file_into_words(path)?;
            info!(path = %path.display(), words = words.len(), "loaded keys file");
            words
        }
        None => SAMPLE_KEYS.iter().map(|key| key.to_string()).collect(),
    };

    let queries = if args.queries.is_empty() {
        SAMPLE_QUERIES.iter().map(|query| query.to_string()).collect()
    } else {
        args.queries
    };

    let rax: RadixTree = keys.iter().collect();
    debug!(distinct = rax.len(), inserted = keys.len(), "tree built");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for query in &queries {
        writeln!(out, "{}: {}", query, rax.search(query))?;
    }

    if !args.no_dump {
        writeln!(out, "\nRadix Tree Structure:")?;
        rax.write_to(&mut out)?;
    }

    Ok(())
}

quick_main!(run);
