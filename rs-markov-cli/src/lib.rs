use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rs_markov_core::io::{check_readable, check_writable};
use rs_markov_core::{RandomWriter, ShortSourcePolicy, Symbol, SymbolUnit, WriterConfig, validate_length};

/// Command line of the random writer.
///
/// `k` and `length` are parsed as signed integers so that negative values
/// reach validation and get a descriptive message.
#[derive(Parser, Debug)]
#[command(name = "rs-markov")]
#[command(about = "Writes random text with the local statistics of a source text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source text file
    pub input: PathBuf,

    /// File receiving the generated text (created if missing)
    pub output: PathBuf,

    /// Level of analysis: number of symbols used to predict the next one
    #[arg(allow_negative_numbers = true)]
    pub k: i64,

    /// Number of symbols to generate
    #[arg(allow_negative_numbers = true)]
    pub length: i64,

    /// Unit of analysis: 'char' or 'word'
    #[arg(short, long, default_value = "char", env = "RS_MARKOV_UNIT")]
    pub unit: SymbolUnit,

    /// Ignore letter case when matching seeds
    #[arg(long, env = "RS_MARKOV_FOLD_CASE")]
    pub fold_case: bool,

    /// Accept sources shorter than k + 1 symbols and write an empty result
    #[arg(long)]
    pub allow_short_source: bool,

    /// Seed of the random source, for reproducible output
    #[arg(short, long, env = "RS_MARKOV_SEED")]
    pub seed: Option<u64>,

    /// Write the transition table as JSON to this file
    #[arg(long)]
    pub dump_table: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level matching the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Validated session settings.
    pub fn config(&self) -> Result<WriterConfig> {
        let mut config = WriterConfig::new(self.k)?;
        config.unit = self.unit;
        config.fold_case = self.fold_case;
        config.short_source = if self.allow_short_source {
            ShortSourcePolicy::Empty
        } else {
            ShortSourcePolicy::Reject
        };
        config.rng_seed = self.seed;
        Ok(config)
    }
}

/// Validates the arguments, then runs loader, model and writer.
///
/// Checks run in this order: `k`, `length`, source readable, source long
/// enough, result writable.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    let length = validate_length(cli.length)?;
    check_readable(&cli.input)?;

    match config.unit {
        SymbolUnit::Char => write::<char>(cli, config, length),
        SymbolUnit::Word => write::<String>(cli, config, length),
    }
}

fn write<S: Symbol>(cli: &Cli, config: WriterConfig, length: usize) -> Result<()> {
    let writer = RandomWriter::<S>::from_file(&cli.input, config)
        .with_context(|| format!("cannot analyse {}", cli.input.display()))?;

    if let Some(path) = &cli.dump_table {
        let json = writer.table().snapshot_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("cannot write table dump {}", path.display()))?;
        log::info!("transition table written to {}", path.display());
    }

    check_writable(&cli.output)?;
    writer
        .write_text(&cli.output, length)
        .with_context(|| format!("cannot write result {}", cli.output.display()))
}
