//! Box assignments and their cycle structure.
//!
//! A box assignment is a permutation of `1..=P`: index `i` is box `i + 1` and the value is the
//! prisoner number hidden inside. Following content -> box links walks the permutation's cycles.

use crate::simulation::rng::Rng;

/// Uniformly random permutation of `1..=count`. Every ordering is equally likely.
pub fn random_permutation(count: usize, rng: &mut Rng) -> Vec<usize> {
    let mut values: Vec<usize> = (1..=count).collect();
    rng.shuffle(&mut values);
    values
}

/// Lengths of every cycle in the assignment, in order of each cycle's lowest box index.
/// The lengths always sum to `boxes.len()`.
pub fn cycle_lengths(boxes: &[usize]) -> Vec<usize> {
    let mut visited = vec![false; boxes.len()];
    let mut lengths = Vec::new();

    for start in 0..boxes.len() {
        if visited[start] {
            continue;
        }
        let mut length = 0;
        let mut index = start;
        while !visited[index] {
            visited[index] = true;
            length += 1;
            index = boxes[index] - 1;
        }
        lengths.push(length);
    }

    lengths
}

/// Longest cycle in the assignment, 0 when there are no boxes.
pub fn longest_cycle(boxes: &[usize]) -> usize {
    cycle_lengths(boxes).into_iter().max().unwrap_or(0)
}

/// True when `values` holds each of `1..=values.len()` exactly once.
pub fn is_permutation(values: &[usize]) -> bool {
    let mut seen = vec![false; values.len()];
    for &value in values {
        if value == 0 || value > values.len() || seen[value - 1] {
            return false;
        }
        seen[value - 1] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_of_zero_is_empty() {
        let mut rng = Rng::new(1);
        assert!(random_permutation(0, &mut rng).is_empty());
    }

    #[test]
    fn permutation_is_a_bijection_for_many_sizes() {
        let mut rng = Rng::new(17);
        for count in 0..=120 {
            let boxes = random_permutation(count, &mut rng);
            assert_eq!(boxes.len(), count);
            assert!(is_permutation(&boxes), "not a permutation for count {count}");
        }
    }

    #[test]
    fn is_permutation_rejects_duplicates_and_out_of_range() {
        assert!(is_permutation(&[2, 3, 1]));
        assert!(!is_permutation(&[1, 1, 3]));
        assert!(!is_permutation(&[0, 1, 2]));
        assert!(!is_permutation(&[1, 2, 4]));
    }

    #[test]
    fn identity_has_only_fixed_points() {
        let boxes: Vec<usize> = (1..=5).collect();
        assert_eq!(cycle_lengths(&boxes), vec![1, 1, 1, 1, 1]);
        assert_eq!(longest_cycle(&boxes), 1);
    }

    #[test]
    fn rotation_is_a_single_cycle() {
        let boxes = vec![2, 3, 4, 5, 1];
        assert_eq!(cycle_lengths(&boxes), vec![5]);
    }

    #[test]
    fn mixed_cycles_are_found() {
        // (1 3) (2) (4 5 6)
        let boxes = vec![3, 2, 1, 5, 6, 4];
        assert_eq!(cycle_lengths(&boxes), vec![2, 1, 3]);
        assert_eq!(longest_cycle(&boxes), 3);
        assert_eq!(longest_cycle(&[]), 0);
    }

    #[test]
    fn cycle_lengths_sum_to_box_count() {
        let mut rng = Rng::new(3);
        for _ in 0..50 {
            let boxes = random_permutation(100, &mut rng);
            assert_eq!(cycle_lengths(&boxes).iter().sum::<usize>(), 100);
        }
    }

    #[test]
    fn every_position_is_uniform_over_values() {
        let count = 5;
        let draws = 50_000;
        let mut rng = Rng::new(8);
        let mut histogram = vec![vec![0usize; count]; count];
        for _ in 0..draws {
            let boxes = random_permutation(count, &mut rng);
            for (position, &value) in boxes.iter().enumerate() {
                histogram[position][value - 1] += 1;
            }
        }
        // expected 10_000 per cell, standard deviation ~90
        for row in &histogram {
            for &cell in row {
                assert!((9_400..=10_600).contains(&cell), "cell count {cell} is off");
            }
        }
    }
}
