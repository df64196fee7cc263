//! Timing report emitted by the benchmark harness.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TypeaheadResult;

/// Wall-clock timings for every engine the harness ran.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    /// One entry per benchmarked engine, in run order.
    pub engines: Vec<EngineTiming>,
}

impl TimingReport {
    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> TypeaheadResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Timings for a single engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineTiming {
    /// Engine label, e.g. `trie` or `prefix-hash`.
    pub engine: String,

    /// Timing of the insertion phase (building the index from the sample).
    pub insertions: PhaseTiming,

    /// Timing of the query phase (querying every generated prefix).
    pub queries: PhaseTiming,
}

/// Timing of one benchmark phase, repeated `runs` times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseTiming {
    /// Number of repetitions measured.
    pub runs: usize,

    /// Total wall time across all repetitions.
    pub total: Duration,

    /// Mean wall time per repetition.
    pub per_run: Duration,
}

impl PhaseTiming {
    /// Builds a phase timing from a repetition count and the total elapsed
    /// time.
    pub fn from_total(runs: usize, total: Duration) -> Self {
        let per_run = match u32::try_from(runs) {
            Ok(runs) if runs > 0 => total / runs,
            _ => Duration::ZERO,
        };
        Self {
            runs,
            total,
            per_run,
        }
    }
}
