//! Best bounds and the estimates derived from them.
use crate::*;
use rand::RngCore;

/// The best bound one player has seen so far, with the play counts
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Snapshot {
    bound: Fraction,
    trial: usize,
    reply: usize,
    counts: Vec<Count>,
}

/// Tracks a player's best bound across trials.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tracker {
    best: Option<Snapshot>,
}

impl Tracker {
    /// Offer the running payoff against the opponent's `reply` at `trial`.
    ///
    /// Replaces the current best when the candidate is at least as good,
    /// so ties go to the later trial.
    pub fn offer(&mut self, score: Score, trial: usize, reply: usize, counts: &[Count]) -> bool {
        let bound = Fraction::new(score, trial as Score);
        if let Some(best) = self.best.as_ref() {
            if bound < best.bound {
                return false;
            }
        }
        log::trace!("trial {:>3} bound {} (reply {})", trial, bound, reply);
        self.best = Some(Snapshot {
            bound,
            trial,
            reply,
            counts: counts.to_vec(),
        });
        true
    }

    /// Remove the initial trial from the best snapshot.
    ///
    /// The opening action was not a best response, so it is dropped from
    /// the counts and the denominator. `opening` is the opening action's
    /// payoff row, from which trial 1's share of the bound is taken.
    pub fn finish<P>(self, initial: usize, opening: &[P]) -> Result<Estimate>
    where
        P: Copy + Into<Score>,
    {
        let Snapshot {
            bound,
            trial,
            reply,
            mut counts,
        } = self
            .best
            .ok_or_else(|| Error::invariant("no bound recorded after the first trial"))?;
        let count = counts
            .get_mut(initial)
            .ok_or_else(|| Error::invariant(format!("initial action {} out of range", initial)))?;
        *count = count
            .checked_sub(1)
            .ok_or_else(|| Error::invariant(format!("initial action {} never counted", initial)))?;
        let first: Score = opening
            .get(reply)
            .copied()
            .map(Into::into)
            .ok_or_else(|| Error::invariant(format!("reply {} out of range", reply)))?;
        let denominator = trial - 1;
        Ok(Estimate {
            value: Fraction::new(bound.numer() - first, denominator as Score),
            bound,
            trial,
            initial,
            reply,
            denominator: denominator as Count,
            counts,
        })
    }
}

/// One player's finished estimate.
///
/// `counts[i] / denominator` approximates how often action `i` belongs in
/// the equilibrium mix. `bound` is the raw best running average,
/// `value` the same bound with the opening trial removed.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Estimate {
    value: Fraction,
    bound: Fraction,
    trial: usize,
    initial: usize,
    reply: usize,
    denominator: Count,
    counts: Vec<Count>,
}

impl Estimate {
    pub fn value(&self) -> Fraction {
        self.value
    }
    pub fn bound(&self) -> Fraction {
        self.bound
    }
    /// Trial at which the best bound was seen.
    pub fn trial(&self) -> usize {
        self.trial
    }
    /// The opening action excluded from the counts.
    pub fn initial(&self) -> usize {
        self.initial
    }
    /// The opponent action that produced the best bound.
    pub fn reply(&self) -> usize {
        self.reply
    }
    pub fn denominator(&self) -> Count {
        self.denominator
    }
    pub fn counts(&self) -> &[Count] {
        &self.counts
    }
    pub fn frequencies(&self) -> impl Iterator<Item = (Count, Count)> + '_ {
        self.counts.iter().map(|c| (*c, self.denominator))
    }
    pub fn strategy(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|c| *c as f64 / self.denominator as f64)
            .collect()
    }
    /// Draw one action in proportion to the observed frequencies.
    pub fn sample<R>(&self, rng: &mut R) -> Result<usize>
    where
        R: RngCore,
    {
        super::sample(rng, &self.counts, self.denominator)
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (count, denominator) in self.frequencies() {
            write!(f, "{}/{}, ", count, denominator)?;
        }
        Ok(())
    }
}
