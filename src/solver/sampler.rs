//! Turning observed play counts into one concrete action.
use crate::*;
use rand::RngCore;

/// Draw an action with probability `counts[i] / denominator`.
///
/// The counts must add up to exactly `denominator`, and `denominator`
/// must be positive. Both are checked before anything is drawn.
pub fn sample<R>(rng: &mut R, counts: &[Count], denominator: Count) -> Result<usize>
where
    R: RngCore,
{
    if denominator == 0 {
        return Err(Error::precondition("sampling denominator is zero"));
    }
    let total = counts.iter().map(|c| *c as u64).sum::<u64>();
    if total != denominator as u64 {
        return Err(Error::precondition(format!(
            "counts sum to {} but denominator is {}",
            total, denominator
        )));
    }
    let r = rng.next_u32() as u64 % denominator as u64 + 1;
    crate::random::walk(counts, r).ok_or_else(|| Error::invariant("sample walk overran its denominator"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_counts() {
        let ref mut rng = Xoshiro::seed(0);
        assert!(matches!(sample(rng, &[1, 2], 4), Err(Error::PreconditionViolation(_))));
        assert!(matches!(sample(rng, &[], 0), Err(Error::PreconditionViolation(_))));
        assert!(matches!(sample(rng, &[0, 0], 0), Err(Error::PreconditionViolation(_))));
    }

    #[test]
    fn rejection_draws_nothing() {
        let ref mut rng = Xoshiro::seed(9);
        let before = rng.clone();
        let _ = sample(rng, &[3], 2);
        assert_eq!(*rng, before);
    }

    #[test]
    fn certain_action() {
        let ref mut rng = Xoshiro::seed(1);
        for _ in 0..500 {
            assert_eq!(sample(rng, &[0, 0, 99], 99).unwrap(), 2);
        }
    }

    #[test]
    fn always_in_range_and_played() {
        let ref mut rng = Xoshiro::seed(77);
        let counts = [12, 0, 40, 47];
        for _ in 0..5000 {
            let i = sample(rng, &counts, 99).unwrap();
            assert!(i < counts.len());
            assert_ne!(counts[i], 0);
        }
    }
}
