//! Batch harness for construction runs.
//!
//! Runs N silent constructions with consecutive seeds and collects turn
//! statistics, so different report-die settings can be compared.

use crate::construction::error::BuildResult;
use crate::construction::log::BuildLog;
use crate::construction::params::BuildParams;
use crate::construction::team::{run_construction, BuildSummary};

/// Configuration for a batch of runs.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub name: String,
    pub params: BuildParams,
    pub num_runs: u32,
    pub base_seed: u64,
}

/// Results collected from a batch of runs.
#[derive(Clone, Debug)]
pub struct BatchResults {
    pub name: String,
    pub summaries: Vec<BuildSummary>,
    pub mean_turns: f64,
    pub stddev_turns: f64,
    pub min_turns: u64,
    pub max_turns: u64,
}

impl BatchResults {
    pub fn turn_counts(&self) -> Vec<u64> {
        self.summaries.iter().map(|s| s.turns).collect()
    }

    /// Average number of leader reports per run
    pub fn mean_leader_turns(&self) -> f64 {
        if self.summaries.is_empty() {
            return 0.0;
        }
        let total: u64 = self.summaries.iter().map(|s| s.leader_turns).sum();
        total as f64 / self.summaries.len() as f64
    }

    /// Report aggregate results.
    pub fn report(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("=== Batch: {} ({} runs) ===\n", self.name, self.summaries.len()));
        s.push_str(&format!(
            "Turns: {:.1} +/- {:.1} (min {}, max {})\n",
            self.mean_turns, self.stddev_turns, self.min_turns, self.max_turns
        ));
        s.push_str(&format!("  Leader reports per run: {:.1}\n", self.mean_leader_turns()));
        s
    }
}

/// Run a batch of N constructions, collecting a summary per run.
pub fn run_batch(config: &BatchConfig) -> BuildResult<BatchResults> {
    let mut summaries = Vec::with_capacity(config.num_runs as usize);

    for run in 0..config.num_runs {
        let seed = config.base_seed.wrapping_add(run as u64);
        tracing::debug!(run = run + 1, total = config.num_runs, seed, "batch run");

        let mut log = BuildLog::new();
        let finished = run_construction(&config.params, seed, &mut log)?;
        summaries.push(finished.summary);
    }

    let turns: Vec<f64> = summaries.iter().map(|s| s.turns as f64).collect();
    let n = turns.len() as f64;
    let mean = if turns.is_empty() { 0.0 } else { turns.iter().sum::<f64>() / n };
    let variance = turns.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / (n - 1.0).max(1.0);

    Ok(BatchResults {
        name: config.name.clone(),
        mean_turns: mean,
        stddev_turns: variance.sqrt(),
        min_turns: summaries.iter().map(|s| s.turns).min().unwrap_or(0),
        max_turns: summaries.iter().map(|s| s.turns).max().unwrap_or(0),
        summaries,
    })
}

/// Side-by-side comparison of two batches.
pub fn compare_batches(a: &BatchResults, b: &BatchResults) -> String {
    let mut s = String::new();
    s.push_str("=== A/B Comparison ===\n");
    s.push_str(&format!("  A: {} (mean {:.1}, n={})\n", a.name, a.mean_turns, a.summaries.len()));
    s.push_str(&format!("  B: {} (mean {:.1}, n={})\n", b.name, b.mean_turns, b.summaries.len()));
    s.push_str(&format!("  Difference: {:+.1} turns\n", b.mean_turns - a.mean_turns));
    s
}
