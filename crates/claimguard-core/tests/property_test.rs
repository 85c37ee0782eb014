//! Property tests for risk banding and the seeded random source.

use claimguard_core::models::RiskLevel;
use claimguard_core::traits::IRandomSource;
use claimguard_core::SeededRandom;
use proptest::prelude::*;

fn rank(level: RiskLevel) -> u8 {
    match level {
        RiskLevel::Low => 0,
        RiskLevel::Medium => 1,
        RiskLevel::High => 2,
    }
}

proptest! {
    #[test]
    fn risk_level_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(RiskLevel::from_probability(lo)) <= rank(RiskLevel::from_probability(hi)));
    }

    #[test]
    fn seeded_uniform_stays_in_bounds(seed in any::<u64>(), half in 0.0f64..1.0) {
        let mut rng = SeededRandom::new(seed);
        for _ in 0..32 {
            let v = rng.uniform(-half, half);
            prop_assert!(v >= -half && v <= half);
        }
    }

    #[test]
    fn seeded_index_stays_in_bounds(seed in any::<u64>(), len in 1usize..1_000) {
        let mut rng = SeededRandom::new(seed);
        prop_assert!(rng.choose_index(len) < len);
    }
}
