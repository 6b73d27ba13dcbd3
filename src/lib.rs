//! Answer a sorted list of query positions into a permutation with the smallest
//! not-yet-used value seen so far, using an incrementally filled min-heap
//! instead of re-scanning the prefix for each query.

mod error;
pub mod min_heap;
pub mod naive;
pub mod scheduler;

pub use error::{Error, Result};
pub use min_heap::MinHeap;
pub use naive::naive_associate_indices;
pub use scheduler::{IndexScheduler, Step};

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// A random permutation of `1..=n` together with `k` sorted query positions in `0..=n`.
#[derive(Clone, Debug)]
pub struct Instance {
    pub permutation: Vec<i32>,
    pub query_positions: Vec<usize>,
}

impl Instance {
    /// Panics when `n` does not fit in an `i32`.
    pub fn random(n: usize, k: usize, seed: u64) -> Self {
        assert!(n <= i32::MAX as usize, "n={n} does not fit in i32.");
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let mut permutation = (1..=n as i32).collect::<Vec<_>>();
        permutation.shuffle(&mut rng);
        let mut query_positions = (0..k).map(|_| rng.gen_range(0..=n)).collect::<Vec<_>>();
        query_positions.sort_unstable();
        Self {
            permutation,
            query_positions,
        }
    }

    pub fn scheduler(&self) -> Result<IndexScheduler<'_, i32>> {
        IndexScheduler::new(
            Some(self.permutation.as_slice()),
            Some(self.query_positions.as_slice()),
        )
    }
}

#[cfg(test)]
#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn random_instance() {
        let inst = Instance::random(50, 10, 7);
        let mut sorted = inst.permutation.clone();
        sorted.sort();
        assert_eq!(sorted, (1..=50).collect::<Vec<_>>());
        assert_eq!(inst.query_positions.len(), 10);
        assert!(inst.query_positions.windows(2).all(|w| w[0] <= w[1]));
        assert!(inst.query_positions.iter().all(|&i| i <= 50));

        let same = Instance::random(50, 10, 7);
        assert_eq!(inst.permutation, same.permutation);
        assert_eq!(inst.query_positions, same.query_positions);
    }

    #[test]
    #[should_panic(expected = "does not fit in i32")]
    fn random_instance_too_long() {
        Instance::random(i32::MAX as usize + 1, 1, 0);
    }

    #[test]
    fn random_instances_agree() {
        for seed in 0..200 {
            let inst = Instance::random(30, 12, seed);
            let heap = inst.scheduler().and_then(|mut s| s.associate_indices());
            let naive = naive_associate_indices(&inst.permutation, &inst.query_positions);
            assert_eq!(heap, naive, "seed={seed}");
        }
    }
}
