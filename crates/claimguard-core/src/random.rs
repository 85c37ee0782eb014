//! Default random sources backed by `rand`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::IRandomSource;

/// `StdRng`-backed source. Seeded for reproducible runs, or from OS entropy.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl IRandomSource for SeededRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::choose;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..20 {
            assert_eq!(a.uniform(-0.05, 0.05), b.uniform(-0.05, 0.05));
            assert_eq!(a.choose_index(5), b.choose_index(5));
        }
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..1_000 {
            let v = rng.uniform(-0.03, 0.03);
            assert!((-0.03..=0.03).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn degenerate_range_returns_low() {
        let mut rng = SeededRandom::new(1);
        assert_eq!(rng.uniform(0.5, 0.5), 0.5);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SeededRandom::new(1);
        let empty: [u32; 0] = [];
        assert!(choose(&mut rng, &empty).is_none());
        assert_eq!(choose(&mut rng, &[9]), Some(&9));
    }
}
