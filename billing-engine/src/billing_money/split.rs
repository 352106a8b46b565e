//! Category split sources
//!
//! The cash share of a sweets bill and the chocolate share of a
//! khajur-chocolate bill are drawn at random. The draw goes through
//! [`SplitSource`] so callers and tests can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Chocolate share choices for khajur-chocolate bills, in percent
pub const CHOCOLATE_SHARES: [Decimal; 3] = [
    Decimal::from_parts(10, 0, 0, false, 0),
    Decimal::from_parts(20, 0, 0, false, 0),
    Decimal::from_parts(35, 0, 0, false, 0),
];

/// Source of the random draws behind a split
pub trait SplitSource {
    /// Fraction in `[0, 1)`
    fn next_fraction(&mut self) -> Decimal;

    /// Index in `0..len`, `len > 0`
    fn next_index(&mut self, len: usize) -> usize;
}

/// Cash percentage band `[low, high)` for a sweets total
///
/// | total              | cash %   |
/// |--------------------|----------|
/// | <= 50,000          | 3 - 5    |
/// | <= 100,000         | 6 - 9    |
/// | <= 150,000         | 9 - 12   |
/// | > 150,000          | 12 - 15  |
pub fn cash_band(total: Decimal) -> (Decimal, Decimal) {
    let (low, high) = if total <= Decimal::from(50_000) {
        (3, 5)
    } else if total <= Decimal::from(100_000) {
        (6, 9)
    } else if total <= Decimal::from(150_000) {
        (9, 12)
    } else {
        (12, 15)
    };
    (Decimal::from(low), Decimal::from(high))
}

/// Uniform draws from a [`Rng`]
#[derive(Debug, Clone)]
pub struct RandomSplit<R> {
    rng: R,
}

impl<R: Rng> RandomSplit<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSplit<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SplitSource for RandomSplit<R> {
    fn next_fraction(&mut self) -> Decimal {
        // 4 decimal digits of resolution
        Decimal::new(self.rng.gen_range(0..10_000), 4)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always returns the same draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSplit {
    pub fraction: Decimal,
    pub index: usize,
}

impl FixedSplit {
    pub fn new(fraction: Decimal, index: usize) -> Self {
        Self { fraction, index }
    }
}

impl Default for FixedSplit {
    fn default() -> Self {
        Self::new(Decimal::ZERO, 0)
    }
}

impl SplitSource for FixedSplit {
    fn next_fraction(&mut self) -> Decimal {
        self.fraction
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.index % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cash_band_edges() {
        assert_eq!(cash_band(dec!(50000)), (dec!(3), dec!(5)));
        assert_eq!(cash_band(dec!(50000.01)), (dec!(6), dec!(9)));
        assert_eq!(cash_band(dec!(100000)), (dec!(6), dec!(9)));
        assert_eq!(cash_band(dec!(150000)), (dec!(9), dec!(12)));
        assert_eq!(cash_band(dec!(150001)), (dec!(12), dec!(15)));
    }

    #[test]
    fn test_random_split_stays_in_range() {
        let mut source = RandomSplit::seeded(7);
        for _ in 0..500 {
            let f = source.next_fraction();
            assert!(f >= Decimal::ZERO && f < Decimal::ONE);
            assert!(source.next_index(3) < 3);
        }
    }

    #[test]
    fn test_seeded_split_is_repeatable() {
        let mut a = RandomSplit::seeded(42);
        let mut b = RandomSplit::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.next_fraction(), b.next_fraction());
            assert_eq!(a.next_index(3), b.next_index(3));
        }
    }

    #[test]
    fn test_fixed_split_wraps_index() {
        let mut source = FixedSplit::new(dec!(0.5), 4);
        assert_eq!(source.next_fraction(), dec!(0.5));
        assert_eq!(source.next_index(3), 1);
    }
}
