use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid strategy '{0}' (expected 'naive' or 'efficient')")]
    UnknownStrategy(String),
    #[error("invalid execution mode '{0}' (expected 'sequential' or 'parallel')")]
    UnknownExecutionMode(String),
    #[error("invalid {name} '{value}'")]
    InvalidArgument { name: &'static str, value: String },
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("failed to read OS entropy: {0}")]
    Entropy(getrandom::Error),
}

impl SimulationError {
    /// Configuration mistakes exit with 2, runtime failures with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ThreadPool(_) | Self::Entropy(_) => 1,
            _ => 2,
        }
    }
}
