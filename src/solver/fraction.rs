//! Exact rational bounds.
use crate::*;
use std::cmp::Ordering;

/// A rational `numer / denom` with a positive denominator.
///
/// Bounds are compared by cross-multiplication in 128 bits, so no
/// floating-point drift creeps in across trials and no product can
/// overflow. Equality is by value: `2/4 == 1/2`.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Fraction {
    numer: Score,
    denom: Score,
}

impl Fraction {
    pub fn new(numer: Score, denom: Score) -> Self {
        debug_assert!(denom > 0, "non-positive denominator {}", denom);
        Self { numer, denom }
    }
    pub fn numer(&self) -> Score {
        self.numer
    }
    pub fn denom(&self) -> Score {
        self.denom
    }
    pub fn as_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numer as i128 * other.denom as i128;
        let rhs = other.numer as i128 * self.denom as i128;
        lhs.cmp(&rhs)
    }
}
impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Eq for Fraction {}
impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl From<Fraction> for f64 {
    fn from(fraction: Fraction) -> Self {
        fraction.as_f64()
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_by_value() {
        assert_eq!(Fraction::new(2, 4), Fraction::new(1, 2));
        assert!(Fraction::new(1, 3) < Fraction::new(1, 2));
        assert!(Fraction::new(-1, 2) < Fraction::new(-1, 3));
        assert!(Fraction::new(7, 100) >= Fraction::new(7, 100));
    }

    #[test]
    fn no_overflow_at_extremes() {
        let big = Fraction::new(Score::MAX, 1);
        let small = Fraction::new(Score::MIN, 1);
        let tiny = Fraction::new(1, Score::MAX);
        assert!(small < tiny);
        assert!(tiny < big);
        assert!(Fraction::new(Score::MAX, Score::MAX) == Fraction::new(1, 1));
    }

    #[test]
    fn display_and_float() {
        let fraction = Fraction::new(-7, 4);
        assert_eq!(fraction.to_string(), "-7/4");
        assert_eq!(f64::from(fraction), -1.75);
        assert_eq!((fraction.numer(), fraction.denom()), (-7, 4));
    }
}
