//! Input distributions for the benchmark runner.
//!
//! Every generator draws from the caller-supplied RNG, so the whole sweep
//! is reproducible from a single seed.

use rand::rngs::StdRng;
use rand::Rng;

/// Distributions the sweep exercises, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Random,
    Sorted,
    ReverseSorted,
    NearlySorted,
    FewUnique,
}

impl Distribution {
    pub const ALL: [Distribution; 5] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::ReverseSorted,
        Distribution::NearlySorted,
        Distribution::FewUnique,
    ];

    /// Label used in console output and the CSV `DataType` column.
    pub fn label(self) -> &'static str {
        match self {
            Distribution::Random => "Random",
            Distribution::Sorted => "Sorted",
            Distribution::ReverseSorted => "ReverseSorted",
            Distribution::NearlySorted => "NearlySorted",
            Distribution::FewUnique => "FewUnique",
        }
    }

    pub fn generate(self, rng: &mut StdRng, size: usize) -> Vec<i32> {
        match self {
            Distribution::Random => generate_random(rng, size),
            Distribution::Sorted => generate_sorted(size),
            Distribution::ReverseSorted => generate_reverse_sorted(size),
            Distribution::NearlySorted => generate_nearly_sorted(rng, size),
            Distribution::FewUnique => generate_few_unique(rng, size),
        }
    }
}

fn generate_random(rng: &mut StdRng, size: usize) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(0..size as i32 * 10)).collect()
}

fn generate_sorted(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

fn generate_reverse_sorted(size: usize) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

/// Sorted array with roughly 5% of positions exchanged at random.
fn generate_nearly_sorted(rng: &mut StdRng, size: usize) -> Vec<i32> {
    let mut arr = generate_sorted(size);
    if size < 2 {
        return arr;
    }
    let swaps = (size / 20).max(1);
    for _ in 0..swaps {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        arr.swap(a, b);
    }
    arr
}

/// Values drawn from a pool of at most 10 distinct integers.
fn generate_few_unique(rng: &mut StdRng, size: usize) -> Vec<i32> {
    let unique = size.min(10).max(1) as i32;
    (0..size).map(|_| rng.gen_range(0..unique)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn generators_respect_size() {
        let mut rng = StdRng::seed_from_u64(7);
        for dist in Distribution::ALL {
            for size in [0, 1, 10, 100] {
                assert_eq!(dist.generate(&mut rng, size).len(), size);
            }
        }
    }

    #[test]
    fn sorted_and_reverse_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        let sorted = Distribution::Sorted.generate(&mut rng, 5);
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        let reverse = Distribution::ReverseSorted.generate(&mut rng, 5);
        assert_eq!(reverse, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn few_unique_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let arr = Distribution::FewUnique.generate(&mut rng, 200);
        assert!(arr.iter().all(|&v| (0..10).contains(&v)));
    }

    #[test]
    fn same_seed_reproduces_data() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            Distribution::Random.generate(&mut a, 50),
            Distribution::Random.generate(&mut b, 50)
        );
    }
}
