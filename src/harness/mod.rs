//! Benchmark harness for the suggestion engines.
//!
//! Owns everything the engines deliberately do not: reading and sampling a
//! corpus file, generating query prefixes, timing repeated insert and query
//! phases, and checking that the engines return equivalent results for the
//! same queries.
//!
//! Equivalence is checked modulo one documented divergence: for a prefix that
//! is itself a complete corpus entry, the trie returns that entry while the
//! prefix-hash index does not (full-length keys are never registered there).
//! Any other difference is an error.

mod report;

pub use report::{EngineTiming, PhaseTiming, TimingReport};

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::autocomplete::AutoComplete;
use crate::engines::{Engine, EngineKind};
use crate::error::{TypeaheadError, TypeaheadResult};

/// Configuration for the benchmark harness.
///
/// Built with `with_*` methods:
///
/// ```no_run
/// use typeahead::harness::HarnessConfig;
///
/// let config = HarnessConfig::new("words.txt")
///     .with_sample_lines(10_000)
///     .with_prefix_count(1_000)
///     .with_runs(100)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HarnessConfig {
    /// Path of the corpus file, one entry per line.
    corpus_path: PathBuf,

    /// Number of corpus lines to sample for insertion.
    sample_lines: usize,

    /// Number of query prefixes to generate.
    prefix_count: usize,

    /// Repetitions of each timed phase. Always at least one.
    runs: usize,

    /// Seed for sampling and prefix generation. `None` draws from entropy.
    seed: Option<u64>,
}

impl HarnessConfig {
    /// Creates a configuration for the given corpus file.
    ///
    /// Defaults: 10,000 sampled lines, 1,000 prefixes, 10 runs, entropy seed.
    pub fn new<P: Into<PathBuf>>(corpus_path: P) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            sample_lines: 10_000,
            prefix_count: 1_000,
            runs: 10,
            seed: None,
        }
    }

    /// Sets the number of corpus lines to sample.
    pub fn with_sample_lines(mut self, sample_lines: usize) -> Self {
        self.sample_lines = sample_lines;
        self
    }

    /// Sets the number of query prefixes to generate.
    pub fn with_prefix_count(mut self, prefix_count: usize) -> Self {
        self.prefix_count = prefix_count;
        self
    }

    /// Sets the repetitions of each timed phase. Clamped to at least one.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs.max(1);
        self
    }

    /// Fixes the RNG seed for reproducible sampling and prefix generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Benchmark over one corpus: times insertion and querying for each requested
/// engine and cross-checks their results.
#[derive(Debug)]
pub struct Benchmark {
    config: HarnessConfig,
    lines: Vec<String>,
    prefixes: Vec<String>,
}

impl Benchmark {
    /// Loads the corpus, samples it, and generates the query prefixes.
    ///
    /// Lines are trimmed and lowercased so prefixes and entries agree on
    /// case; empty lines are dropped.
    ///
    /// # Errors
    ///
    /// [`TypeaheadError::Io`] if the corpus cannot be read, and
    /// [`TypeaheadError::CorpusTooSmall`] if it holds fewer usable lines than
    /// the configured sample size.
    pub fn new(config: HarnessConfig) -> TypeaheadResult<Self> {
        let raw = fs::read_to_string(&config.corpus_path)?;
        let lines: Vec<String> = raw
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() < config.sample_lines {
            return Err(TypeaheadError::CorpusTooSmall {
                path: config.corpus_path.clone(),
                available: lines.len(),
                requested: config.sample_lines,
            });
        }

        let mut rng = Self::rng(&config);
        let sample: Vec<String> = lines
            .choose_multiple(&mut rng, config.sample_lines)
            .cloned()
            .collect();
        let prefixes = Self::generate_prefixes(&sample, config.prefix_count, &mut rng);

        debug!(
            lines = sample.len(),
            prefixes = prefixes.len(),
            "corpus sampled"
        );

        Ok(Self {
            config,
            lines: sample,
            prefixes,
        })
    }

    /// The sampled corpus lines that will be inserted.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The generated query prefixes.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    fn rng(config: &HarnessConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Draws `count` prefixes, each a proper prefix (at least one character,
    /// strictly shorter than its source) of a randomly chosen sampled line.
    ///
    /// Single-character lines have no proper prefix and are skipped when
    /// drawing; when no line is long enough (or the sample is empty), no
    /// prefixes are drawn at all.
    fn generate_prefixes(lines: &[String], count: usize, rng: &mut StdRng) -> Vec<String> {
        let eligible: Vec<&String> = lines
            .iter()
            .filter(|line| line.chars().count() > 1)
            .collect();
        if eligible.is_empty() {
            return Vec::new();
        }

        let mut prefixes = Vec::with_capacity(count);
        for _ in 0..count {
            let line = eligible[rng.gen_range(0..eligible.len())];
            let max_len = line.chars().count() - 1;
            let len = rng.gen_range(1..=max_len);
            prefixes.push(line.chars().take(len).collect());
        }
        prefixes
    }

    /// Runs the timed insert and query phases for each engine kind, in order.
    ///
    /// When exactly two engines run, their per-prefix query results are
    /// cross-checked before the report is returned.
    pub fn run(&self, kinds: &[EngineKind]) -> TypeaheadResult<TimingReport> {
        let mut report = TimingReport::default();
        let mut query_results: Vec<(EngineKind, HashMap<String, HashSet<String>>)> =
            Vec::with_capacity(kinds.len());

        for &kind in kinds {
            info!(engine = kind.label(), runs = self.config.runs, "benchmarking engine");

            let insert_started = Instant::now();
            let mut autocomplete = self.build_index(kind)?;
            for _ in 1..self.config.runs {
                autocomplete = self.build_index(kind)?;
            }
            let insert_total = insert_started.elapsed();

            let query_started = Instant::now();
            let mut results = self.run_queries(&autocomplete);
            for _ in 1..self.config.runs {
                results = self.run_queries(&autocomplete);
            }
            let query_total = query_started.elapsed();

            report.engines.push(EngineTiming {
                engine: kind.label().to_string(),
                insertions: PhaseTiming::from_total(self.config.runs, insert_total),
                queries: PhaseTiming::from_total(self.config.runs, query_total),
            });
            query_results.push((kind, results));
        }

        if let [left, right] = &query_results[..] {
            Self::compare_query_results(left, right)?;
            info!("query results are consistent across engines");
        }

        Ok(report)
    }

    fn build_index(&self, kind: EngineKind) -> TypeaheadResult<AutoComplete<Engine>> {
        let mut autocomplete = AutoComplete::new(kind.build());
        autocomplete.insert_batch(&self.lines)?;
        Ok(autocomplete)
    }

    fn run_queries(
        &self,
        autocomplete: &AutoComplete<Engine>,
    ) -> HashMap<String, HashSet<String>> {
        let mut results = HashMap::with_capacity(self.prefixes.len());
        for prefix in &self.prefixes {
            results.insert(prefix.clone(), autocomplete.query(prefix));
        }
        results
    }

    /// Checks that two engines returned equivalent result sets for every
    /// queried prefix.
    ///
    /// Tolerated difference: the queried prefix itself, present only on a
    /// trie side. That is the documented full-word divergence of the
    /// prefix-hash scheme. Anything else fails with
    /// [`TypeaheadError::ResultsMismatch`].
    pub(crate) fn compare_query_results(
        left: &(EngineKind, HashMap<String, HashSet<String>>),
        right: &(EngineKind, HashMap<String, HashSet<String>>),
    ) -> TypeaheadResult<()> {
        let empty = HashSet::new();
        for (prefix, left_set) in &left.1 {
            let right_set = right.1.get(prefix).unwrap_or(&empty);
            for word in left_set.symmetric_difference(right_set) {
                let holder = if left_set.contains(word) {
                    left.0
                } else {
                    right.0
                };
                let tolerated = word == prefix && holder == EngineKind::Trie;
                if !tolerated {
                    return Err(TypeaheadError::ResultsMismatch {
                        prefix: prefix.clone(),
                        detail: format!("'{word}' returned only by the {holder} engine"),
                    });
                }
            }
        }
        Ok(())
    }
}
