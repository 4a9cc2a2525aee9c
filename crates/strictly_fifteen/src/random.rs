//! Injectable randomness for shuffling.

use rand::Rng;

/// Source of uniformly distributed indices.
///
/// Every [`rand::Rng`] is a `RandomSource`, so seeded generators such as
/// `StdRng::seed_from_u64` give reproducible deals.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..=upper`.
    fn index_up_to(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

/// Replays a fixed script of draws, cycling when exhausted.
///
/// Each scripted value is reduced modulo `upper + 1`, so any script is
/// valid for any board size. `usize::MAX` always draws the upper bound.
/// An empty script always draws `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_new::new)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    #[new(default)]
    cursor: usize,
}

impl ScriptedRandom {
    /// A source that always draws the upper bound, leaving a Fisher–Yates
    /// pass as the identity.
    pub fn identity() -> Self {
        Self::new(vec![usize::MAX])
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn index_up_to(&mut self, upper: usize) -> usize {
        if self.script.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        if value == usize::MAX {
            upper
        } else {
            value % (upper + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scripted_cycles_and_reduces() {
        let mut rng = ScriptedRandom::new(vec![1, 7]);
        assert_eq!(rng.index_up_to(3), 1);
        assert_eq!(rng.index_up_to(3), 3);
        assert_eq!(rng.index_up_to(3), 1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_identity_draws_upper() {
        let mut rng = ScriptedRandom::identity();
        assert_eq!(rng.index_up_to(0), 0);
        assert_eq!(rng.index_up_to(14), 14);
    }

    #[test]
    fn test_seeded_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for upper in 0..50 {
            assert!(rng.index_up_to(upper) <= upper);
        }
    }
}
