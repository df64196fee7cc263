//! typeahead benchmark runner.
//!
//! Loads a corpus file, feeds a random sample of it into the selected
//! suggestion engines through the [`AutoComplete`](typeahead::AutoComplete)
//! facade, times repeated insert and query phases, and reports the results.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use typeahead::engines::EngineKind;
use typeahead::harness::{Benchmark, HarnessConfig};

/// Command line arguments for the benchmark runner.
#[derive(Parser, Debug)]
#[clap(name = "typeahead", version, author, about)]
struct Args {
    /// Path to the corpus file, one entry per line
    corpus: PathBuf,

    /// Number of corpus lines to sample for insertion
    #[clap(short, long, default_value_t = 10_000)]
    lines: usize,

    /// Number of query prefixes to generate
    #[clap(short, long, default_value_t = 1_000)]
    prefixes: usize,

    /// Repetitions of each timed phase
    #[clap(short, long, default_value_t = 10)]
    runs: usize,

    /// Engine(s) to benchmark
    #[clap(short, long, value_enum, default_value = "both")]
    engine: EngineArg,

    /// RNG seed for reproducible sampling and prefix generation
    #[clap(long)]
    seed: Option<u64>,

    /// Print the timing report as JSON on stdout
    #[clap(long)]
    json: bool,
}

/// Engine selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum EngineArg {
    /// Character trie only
    Trie,
    /// Prefix-hash index only
    PrefixHash,
    /// Both engines, with cross-checked query results
    Both,
}

impl EngineArg {
    fn kinds(self) -> Vec<EngineKind> {
        match self {
            EngineArg::Trie => vec![EngineKind::Trie],
            EngineArg::PrefixHash => vec![EngineKind::PrefixHash],
            EngineArg::Both => vec![EngineKind::Trie, EngineKind::PrefixHash],
        }
    }
}

/// Initialize the logging system.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();

    let mut config = HarnessConfig::new(&args.corpus)
        .with_sample_lines(args.lines)
        .with_prefix_count(args.prefixes)
        .with_runs(args.runs);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let benchmark = Benchmark::new(config)
        .with_context(|| format!("failed to load corpus from {}", args.corpus.display()))?;
    let report = benchmark.run(&args.engine.kinds())?;

    for timing in &report.engines {
        info!(
            engine = %timing.engine,
            insert_total = ?timing.insertions.total,
            insert_per_run = ?timing.insertions.per_run,
            query_total = ?timing.queries.total,
            query_per_run = ?timing.queries.per_run,
            "engine timings"
        );
    }

    if let [left, right] = &report.engines[..] {
        info!("category: {} vs. {}", left.engine, right.engine);
        info!(
            "total insertion time: {:?} vs. {:?}",
            left.insertions.total, right.insertions.total
        );
        info!(
            "total query time: {:?} vs. {:?}",
            left.queries.total, right.queries.total
        );
        info!(
            "insertion time per run: {:?} vs. {:?}",
            left.insertions.per_run, right.insertions.per_run
        );
        info!(
            "query time per run: {:?} vs. {:?}",
            left.queries.per_run, right.queries.per_run
        );
    }

    if args.json {
        println!("{}", report.to_json_pretty()?);
    }

    Ok(())
}
