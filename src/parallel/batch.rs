//! Batch distribution for parallel simulation.
//!
//! Trial indices are split into contiguous ranges; each range is one parallel task that
//! returns its own success count, and the counts are summed at the end.

use rayon::prelude::*;
use tracing::debug;

/// Batches handed to each worker, so a slow batch does not leave the others idle.
pub const BATCHES_PER_WORKER: usize = 8;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use prisoners::parallel::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Count successful trials in `[start, end)` on the current thread.
pub fn count_successes<F>(start: usize, end: usize, trial: &F) -> usize
where
    F: Fn(u64) -> bool,
{
    (start..end).filter(|&index| trial(index as u64)).count()
}

/// Evaluate `trial` for every index in `0..total`, spread over `num_batches` parallel tasks
/// on the current Rayon pool, and return the number of successes.
pub fn run_trial_batches<F>(total: usize, num_batches: usize, trial: &F) -> usize
where
    F: Fn(u64) -> bool + Sync,
{
    batch_ranges(total, num_batches)
        .into_par_iter()
        .map(|(start, end)| {
            let successes = count_successes(start, end, trial);
            debug!(start, end, successes, "batch finished");
            successes
        })
        .sum()
}
