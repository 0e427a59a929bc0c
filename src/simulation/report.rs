use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;

use crate::simulation::config::{ExecutionMode, SimulationConfig};
use crate::simulation::engine::SimulationTally;
use crate::simulation::strategy::Strategy;
use crate::simulation::theory::theoretical_success_probability;

pub const START_BANNER: &str = "Starting prisoner problem simulation...";
pub const FINISH_BANNER: &str = "Simulation finished.";

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub strategy: Strategy,
    pub execution: ExecutionMode,
    pub prisoners: usize,
    pub boxes_to_check: usize,
    pub iterations: usize,
    pub successes: usize,
    pub probability: f64,
    pub theoretical_probability: f64,
    pub seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
    pub elapsed_secs: f64,
    pub generated_at: String,
}

impl SimulationReport {
    pub fn new(
        config: &SimulationConfig,
        seed: u64,
        tally: SimulationTally,
        workers: Option<usize>,
        elapsed: Duration,
    ) -> Self {
        Self {
            strategy: config.strategy,
            execution: config.execution,
            prisoners: config.prisoners,
            boxes_to_check: config.boxes_to_check,
            iterations: tally.iterations,
            successes: tally.successes,
            probability: tally.probability(),
            theoretical_probability: theoretical_success_probability(
                config.strategy,
                config.prisoners,
                config.boxes_to_check,
            ),
            seed,
            workers,
            elapsed_secs: elapsed.as_secs_f64(),
            generated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }

    /// Console lines printed after the run. Elapsed time is only shown for parallel runs.
    pub fn summary_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{FINISH_BANNER}");
        let _ = writeln!(out, "Number of successful iterations: {}", self.successes);
        let _ = writeln!(out, "Number of iterations: {}", self.iterations);
        // Debug formatting keeps the fractional part for whole ratios (0.0, 1.0).
        let _ = writeln!(out, "Probability of success: {:?}", self.probability);
        if self.execution == ExecutionMode::Parallel {
            let _ = writeln!(out, "Elapsed time: {:.3} seconds", self.elapsed_secs);
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(execution: ExecutionMode) -> SimulationReport {
        let config = SimulationConfig::default()
            .with_execution(execution)
            .with_iterations(4);
        let tally = SimulationTally {
            successes: 3,
            iterations: 4,
        };
        let workers = (execution == ExecutionMode::Parallel).then_some(8);
        SimulationReport::new(&config, 5, tally, workers, Duration::from_millis(1500))
    }

    #[test]
    fn sequential_summary_omits_elapsed_time() {
        let text = report(ExecutionMode::Sequential).summary_text();
        assert_eq!(
            text,
            "Simulation finished.\n\
             Number of successful iterations: 3\n\
             Number of iterations: 4\n\
             Probability of success: 0.75\n"
        );
    }

    #[test]
    fn whole_probabilities_keep_a_fractional_part() {
        let config = SimulationConfig::default()
            .with_strategy(Strategy::Naive)
            .with_execution(ExecutionMode::Sequential);
        let none = SimulationTally {
            successes: 0,
            iterations: 4,
        };
        let all = SimulationTally {
            successes: 4,
            iterations: 4,
        };

        let text = SimulationReport::new(&config, 1, none, None, Duration::ZERO).summary_text();
        assert!(text.ends_with("Probability of success: 0.0\n"), "{text}");
        let text = SimulationReport::new(&config, 1, all, None, Duration::ZERO).summary_text();
        assert!(text.ends_with("Probability of success: 1.0\n"), "{text}");
    }

    #[test]
    fn parallel_summary_includes_elapsed_time() {
        let text = report(ExecutionMode::Parallel).summary_text();
        assert!(text.ends_with("Elapsed time: 1.500 seconds\n"));
    }

    #[test]
    fn json_report_carries_counts_and_theory() {
        let payload: serde_json::Value =
            serde_json::from_str(&report(ExecutionMode::Parallel).to_json().unwrap()).unwrap();
        assert_eq!(payload["strategy"], "efficient");
        assert_eq!(payload["execution"], "parallel");
        assert_eq!(payload["successes"], 3);
        assert_eq!(payload["probability"], 0.75);
        assert_eq!(payload["workers"], 8);
        assert!(payload["theoretical_probability"].as_f64().unwrap() > 0.31);
    }

    #[test]
    fn sequential_json_has_no_worker_count() {
        let payload: serde_json::Value =
            serde_json::from_str(&report(ExecutionMode::Sequential).to_json().unwrap()).unwrap();
        assert!(payload.get("workers").is_none());
    }
}
