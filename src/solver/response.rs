//! How player 2 answers player 1.
use crate::*;

/// Player 2's move rule, given player 1's cumulative payoff per column.
///
/// Player 1 always best-responds. Swapping the rule for player 2 is what
/// distinguishes pure fictitious play from play against a fixed profile.
pub trait Response {
    /// Whether player 2 adapts to history. A fixed profile never improves,
    /// so no value estimate is tracked for it.
    const ADAPTIVE: bool;

    /// Player 2's action for this trial, or `None` if there is nothing
    /// to choose from.
    fn respond(&self, weights: &[Score], rng: &mut Xoshiro) -> Option<usize>;

    /// Check the rule against player 2's action count before solving.
    fn validate(&self, _cols: usize) -> Result<()> {
        Ok(())
    }
}

/// Player 2 minimizes player 1's running payoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestResponse;

impl Response for BestResponse {
    const ADAPTIVE: bool = true;
    fn respond(&self, weights: &[Score], _: &mut Xoshiro) -> Option<usize> {
        best_response(weights)
    }
}

/// Player 2 ignores history and samples from a fixed profile.
impl Response for Weights {
    const ADAPTIVE: bool = false;
    fn respond(&self, _: &[Score], rng: &mut Xoshiro) -> Option<usize> {
        self.choose(rng)
    }
    fn validate(&self, cols: usize) -> Result<()> {
        match self.len() == cols {
            true => Ok(()),
            false => Err(Error::input(format!(
                "{} opponent weights for {} columns",
                self.len(),
                cols
            ))),
        }
    }
}

/// Index of the smallest running payoff, first one on ties.
///
/// Whoever holds `weights` is the opponent of the player choosing, so the
/// minimum is the best reply. Empty input has no reply.
pub fn best_response(weights: &[Score]) -> Option<usize> {
    weights
        .iter()
        .enumerate()
        .min_by_key(|(_, w)| **w)
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_minimum_wins_ties() {
        assert_eq!(best_response(&[3, -1, 4, -1]), Some(1));
        assert_eq!(best_response(&[0, 0, 0]), Some(0));
        assert_eq!(best_response(&[5]), Some(0));
    }

    #[test]
    fn empty_has_no_reply() {
        assert_eq!(best_response(&[]), None);
        let ref mut rng = Xoshiro::seed(0);
        assert_eq!(BestResponse.respond(&[], rng), None);
    }

    #[test]
    fn weighted_ignores_history() {
        let ref mut rng = Xoshiro::seed(4);
        let weights = Weights::try_from(vec![0, 1, 0]).unwrap();
        for _ in 0..100 {
            assert_eq!(weights.respond(&[-100, 100, -100], rng), Some(1));
        }
    }

    #[test]
    fn weighted_length_must_match() {
        let weights = Weights::example();
        assert!(weights.validate(3).is_ok());
        assert!(matches!(weights.validate(4), Err(Error::InvalidInput(_))));
        assert!(BestResponse.validate(4).is_ok());
    }
}
