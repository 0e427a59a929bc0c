use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::simulation::error::SimulationError;
use crate::simulation::rng::Rng;

/// How each prisoner chooses which boxes to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Open boxes uniformly at random.
    Naive,
    /// Open your own box, then follow the numbers found inside.
    #[default]
    Efficient,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Efficient => "efficient",
        }
    }

    /// Runs one trial: true when every prisoner in `order` finds their number in at most
    /// `boxes_to_check` boxes. `rng` is only consumed by the naive strategy.
    pub fn evaluate(
        self,
        boxes: &[usize],
        order: &[usize],
        boxes_to_check: usize,
        rng: &mut Rng,
    ) -> bool {
        match self {
            Self::Naive => naive_strategy(boxes, order, boxes_to_check, rng),
            Self::Efficient => efficient_strategy(boxes, order, boxes_to_check),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SimulationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "efficient" => Ok(Self::Efficient),
            _ => Err(SimulationError::UnknownStrategy(value.to_string())),
        }
    }
}

/// Each prisoner samples boxes without replacement from a fresh copy of the assignment.
/// Stops at the first prisoner who misses.
pub fn naive_strategy(
    boxes: &[usize],
    order: &[usize],
    boxes_to_check: usize,
    rng: &mut Rng,
) -> bool {
    let mut search = boxes.to_vec();
    order.iter().all(|&prisoner| {
        search.copy_from_slice(boxes);
        prisoner_finds_at_random(&mut search, prisoner, boxes_to_check, rng)
    })
}

/// Partial Fisher-Yates: after `k` steps, `search[..k]` is a uniform random `k`-subset of
/// the boxes, which is exactly what removing random boxes one at a time would open.
fn prisoner_finds_at_random(
    search: &mut [usize],
    prisoner: usize,
    boxes_to_check: usize,
    rng: &mut Rng,
) -> bool {
    let checks = boxes_to_check.min(search.len());
    for opened in 0..checks {
        let pick = opened + rng.next_below(search.len() - opened);
        search.swap(opened, pick);
        if search[opened] == prisoner {
            return true;
        }
    }
    false
}

/// Every prisoner starts at their own box and follows the chain. Stops at the first
/// prisoner who misses; the outcome itself does not depend on `order`.
pub fn efficient_strategy(boxes: &[usize], order: &[usize], boxes_to_check: usize) -> bool {
    order
        .iter()
        .all(|&prisoner| prisoner_follows_cycle(boxes, prisoner, boxes_to_check))
}

/// True when `prisoner` reaches their own number within `boxes_to_check` opened boxes,
/// i.e. when the cycle through box `prisoner` is no longer than the budget.
pub fn prisoner_follows_cycle(boxes: &[usize], prisoner: usize, boxes_to_check: usize) -> bool {
    let mut next_box = prisoner;
    for _ in 0..boxes_to_check {
        let content = boxes[next_box - 1];
        if content == prisoner {
            return true;
        }
        next_box = content;
    }
    false
}
