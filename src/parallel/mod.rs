pub mod batch;
pub mod pool;

pub use batch::{batch_ranges, count_successes, run_trial_batches, BATCHES_PER_WORKER};
pub use pool::WorkerPool;
