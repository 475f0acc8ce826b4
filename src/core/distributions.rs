// Sampling primitives shared by every generator
// All draws go through an explicit `Rng` so a seeded pipeline replays exactly

use rand::seq::index;
use rand::Rng;

/// Uniform choice over a fixed, non-empty set of values.
///
/// Repeated entries are allowed and intentional: `[true, false, false]`
/// is a one-in-three chance of `true`.
#[derive(Debug, Clone, Copy)]
pub struct Choices<T: 'static> {
    values: &'static [T],
}

impl<T: Copy + 'static> Choices<T> {
    pub const fn new(values: &'static [T]) -> Self {
        assert!(!values.is_empty(), "Choices requires at least one value");
        Self { values }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[rng.random_range(0..self.values.len())]
    }

    pub fn values(&self) -> &'static [T] {
        self.values
    }
}

/// Weighted choice over `(value, weight)` pairs.
///
/// Weights need not sum to one; each draw normalizes by the total and walks
/// the cumulative distribution with a single uniform draw in `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T: 'static> {
    entries: &'static [(T, f64)],
}

impl<T: Copy + 'static> Weighted<T> {
    pub const fn new(entries: &'static [(T, f64)]) -> Self {
        assert!(!entries.is_empty(), "Weighted requires at least one entry");
        Self { entries }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let total: f64 = self.entries.iter().map(|(_, w)| *w).sum();
        let target = rng.random::<f64>() * total;

        let mut cumulative = 0.0;
        for (value, weight) in self.entries {
            cumulative += *weight;
            if target < cumulative {
                return *value;
            }
        }
        // Float rounding can leave target == total
        self.entries[self.entries.len() - 1].0
    }

    /// Probability of the entry at `position` after normalization
    #[cfg(test)]
    fn probability(&self, position: usize) -> f64 {
        let total: f64 = self.entries.iter().map(|(_, w)| *w).sum();
        self.entries.get(position).map_or(0.0, |(_, w)| w / total)
    }
}

/// Bernoulli trial: `true` with probability `p`
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random::<f64>() < p
}

/// `amount` distinct indices from `0..len`, capped at `len`
pub fn sample_distinct<R: Rng + ?Sized>(rng: &mut R, len: usize, amount: usize) -> Vec<usize> {
    index::sample(rng, len, amount.min(len)).into_vec()
}

/// Round to `places` decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GENDERS: Weighted<&str> =
        Weighted::new(&[("Female", 0.88), ("Male", 0.11), ("Nonbinary", 0.01)]);

    #[test]
    fn test_weighted_frequencies_follow_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 100_000;
        let mut counts = [0usize; 3];
        for _ in 0..draws {
            match GENDERS.sample(&mut rng) {
                "Female" => counts[0] += 1,
                "Male" => counts[1] += 1,
                _ => counts[2] += 1,
            }
        }

        let female = counts[0] as f64 / draws as f64;
        let male = counts[1] as f64 / draws as f64;
        let nonbinary = counts[2] as f64 / draws as f64;
        assert!((female - 0.88).abs() < 0.01, "female share {}", female);
        assert!((male - 0.11).abs() < 0.01, "male share {}", male);
        assert!((nonbinary - 0.01).abs() < 0.005, "nonbinary share {}", nonbinary);
    }

    #[test]
    fn test_weighted_normalizes_unscaled_weights() {
        const SCALED: Weighted<u8> = Weighted::new(&[(1, 3.0), (2, 1.0)]);
        assert!((SCALED.probability(0) - 0.75).abs() < 1e-12);
        assert!((SCALED.probability(1) - 0.25).abs() < 1e-12);
        assert_eq!(SCALED.probability(5), 0.0);
    }

    #[test]
    fn test_repeated_choices_keep_one_in_three() {
        const FLAG: Choices<bool> = Choices::new(&[true, false, false]);
        let mut rng = StdRng::seed_from_u64(3);
        let draws = 60_000;
        let hits = (0..draws).filter(|_| FLAG.pick(&mut rng)).count();
        let share = hits as f64 / draws as f64;
        assert!((share - 1.0 / 3.0).abs() < 0.01, "share {}", share);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.4567, 2), 0.46);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    proptest! {
        #[test]
        fn prop_sample_distinct_is_capped_and_unique(seed in any::<u64>(), len in 0usize..20, amount in 0usize..6) {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = sample_distinct(&mut rng, len, amount);

            prop_assert_eq!(picked.len(), amount.min(len));
            let mut sorted = picked.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), picked.len());
            prop_assert!(picked.iter().all(|i| *i < len));
        }
    }
}
