use std::path::PathBuf;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Parser;

use checkhash::hash::{CompareEngine, HashRegistry};

/// A program for checking one or more files hash against a known hash value
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Hash function to use on the chosen file or files
    #[arg(
        long,
        default_value = "sha256",
        value_parser = PossibleValuesParser::new(HashRegistry::ALGORITHM_NAMES)
    )]
    hash_function: String,

    /// A file or files to be compared against a set of hash values. The
    /// number of files has to match that of supplied hash values
    #[arg(long, num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// A hash value or values to compare against one or more files'
    /// calculated hash. The number of the former must match that of the
    /// latter
    #[arg(long, num_args = 1.., required = true)]
    hash_values: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let engine = CompareEngine::new();
    engine.compare_files_to_hashes(&cli.files, &cli.hash_values, &cli.hash_function)?;

    Ok(())
}
