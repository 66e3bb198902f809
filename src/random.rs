use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Injectable source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index into a list of `len` entries. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len - 1)
    }
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        // 53 random mantissa bits
        (self.0.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl RngSource<StdRng> {
    /// Seeded when `seed` is set, otherwise drawn from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource(StdRng::seed_from_u64(seed)),
            None => RngSource(StdRng::from_entropy()),
        }
    }
}

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let j = i + rng.pick_index(n - i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_index_stays_in_range() {
        let mut almost_one = || 0.999_999_999_999;
        assert_eq!(almost_one.pick_index(4), 3);
        let mut one = || 1.0;
        assert_eq!(one.pick_index(4), 3);
        let mut zero = || 0.0;
        assert_eq!(zero.pick_index(4), 0);
    }

    #[test]
    fn zero_source_leaves_order_untouched() {
        let mut items = [1, 2, 3, 4, 5];
        shuffle(&mut items, &mut || 0.0);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = RngSource::from_seed(Some(7));
        for _ in 0..100 {
            let mut items: Vec<u32> = (0..9).collect();
            shuffle(&mut items, &mut rng);
            let mut sorted = items.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..9).collect::<Vec<_>>());
        }
    }

    #[test]
    fn seeded_source_is_reproducible_and_in_range() {
        let mut a = RngSource::from_seed(Some(42));
        let mut b = RngSource::from_seed(Some(42));
        for _ in 0..1000 {
            let x = a.next_unit();
            assert_eq!(x, b.next_unit());
            assert!((0.0..1.0).contains(&x));
        }
    }
}
