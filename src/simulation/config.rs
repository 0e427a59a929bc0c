use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::simulation::error::SimulationError;
use crate::simulation::strategy::Strategy;

pub const NUMBER_OF_PRISONERS: usize = 100;
pub const NUMBER_OF_BOXES_TO_CHECK: usize = 50;
pub const NUMBER_OF_ITERATIONS: usize = 1_000_000;

/// Whether trials run on the calling thread or across the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Sequential,
    #[default]
    Parallel,
}

impl ExecutionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = SimulationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(SimulationError::UnknownExecutionMode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub prisoners: usize,
    pub boxes_to_check: usize,
    pub iterations: usize,
    pub strategy: Strategy,
    pub execution: ExecutionMode,
    /// Base seed for every trial stream. When None, one is drawn from OS entropy per run.
    pub seed: Option<u64>,
    /// Worker threads for parallel runs. If 0, one per available CPU.
    pub workers: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            prisoners: NUMBER_OF_PRISONERS,
            boxes_to_check: NUMBER_OF_BOXES_TO_CHECK,
            iterations: NUMBER_OF_ITERATIONS,
            strategy: Strategy::default(),
            execution: ExecutionMode::default(),
            seed: None,
            workers: 0,
        }
    }
}

impl SimulationConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_puzzle() {
        let config = SimulationConfig::default();
        assert_eq!(config.prisoners, 100);
        assert_eq!(config.boxes_to_check, 50);
        assert_eq!(config.iterations, 1_000_000);
        assert_eq!(config.strategy, Strategy::Efficient);
        assert_eq!(config.execution, ExecutionMode::Parallel);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn parses_execution_modes() {
        assert_eq!(
            "Sequential".parse::<ExecutionMode>().unwrap(),
            ExecutionMode::Sequential
        );
        assert_eq!(
            "parallel".parse::<ExecutionMode>().unwrap(),
            ExecutionMode::Parallel
        );
        assert!("threads".parse::<ExecutionMode>().is_err());
    }

    #[test]
    fn builders_override_fields() {
        let config = SimulationConfig::default()
            .with_strategy(Strategy::Naive)
            .with_execution(ExecutionMode::Sequential)
            .with_iterations(10)
            .with_seed(3)
            .with_workers(2);
        assert_eq!(config.strategy, Strategy::Naive);
        assert_eq!(config.execution, ExecutionMode::Sequential);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.workers, 2);
    }
}
