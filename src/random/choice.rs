//! Weighted discrete choice.
use crate::*;
use rand::RngCore;

/// Draw an index with probability proportional to its weight.
///
/// Draws `r` uniformly from `[1, total]`, then walks the weights,
/// subtracting each one that falls short of `r`. Zero weights are never
/// chosen. Rejects empty or all-zero weights instead of dividing by zero.
pub fn choice<R>(rng: &mut R, weights: &[Count]) -> Result<usize>
where
    R: RngCore,
{
    let total = weights.iter().map(|w| *w as u64).sum::<u64>();
    if total == 0 {
        return Err(Error::input("weights must have a positive total"));
    }
    let r = rng.next_u32() as u64 % total + 1;
    walk(weights, r).ok_or_else(|| Error::invariant("weighted walk overran its total"))
}

/// Index of the first entry whose running prefix reaches `r`.
pub(crate) fn walk(weights: &[Count], mut r: u64) -> Option<usize> {
    for (i, w) in weights.iter().map(|w| *w as u64).enumerate() {
        if w < r {
            r -= w;
        } else {
            return Some(i);
        }
    }
    None
}

/// A validated weight vector with a positive total.
///
/// Used as the fixed mixed strategy player 2 samples from when it is
/// not best-responding.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Weights(Vec<Count>);

impl Weights {
    /// Opponent profile paired with [`PayoffMatrix::example`].
    pub fn example() -> Self {
        Self(vec![5, 0, 7])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn total(&self) -> u64 {
        self.0.iter().map(|w| *w as u64).sum()
    }
    /// Draw one index in proportion to its weight.
    ///
    /// Construction guarantees a positive total, so the draw lands in
    /// `[1, total]` and the walk always stops inside the weights. `None`
    /// would mean that invariant was broken.
    pub fn choose<R>(&self, rng: &mut R) -> Option<usize>
    where
        R: RngCore,
    {
        let r = rng.next_u32() as u64 % self.total() + 1;
        walk(&self.0, r)
    }
}

impl TryFrom<Vec<Count>> for Weights {
    type Error = Error;
    fn try_from(weights: Vec<Count>) -> Result<Self> {
        match weights.iter().any(|w| *w > 0) {
            true => Ok(Self(weights)),
            false => Err(Error::input("weights must have a positive total")),
        }
    }
}

impl TryFrom<&str> for Weights {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> anyhow::Result<Self> {
        let weights = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .map(|w| w.parse::<Count>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::try_from(weights)?)
    }
}

impl std::fmt::Display for Weights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self.0.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", cells.join(", "))
    }
}
