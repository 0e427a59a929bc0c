//! Monte Carlo estimate of the 100 prisoners puzzle: random box assignments, the naive and
//! cycle-following strategies, and sequential or Rayon-parallel trial drivers.

pub mod cli;
pub mod logging;
pub mod parallel;
pub mod simulation;
