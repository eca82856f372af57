use crate::*;

/// Which fictitious-play variant to run. Exactly one per solve.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum Mode {
    /// Both players best-respond. Both estimates are produced.
    BestResponse,
    /// Player 2 samples from a fixed profile. Only player 1 is estimated.
    FixedWeighted(Weights),
    /// Same as `BestResponse`, with every trial recorded.
    Diagnostic,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BestResponse => "best-response",
            Self::FixedWeighted(_) => "fixed-weighted",
            Self::Diagnostic => "diagnostic",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedWeighted(weights) => write!(f, "{} {}", self.name(), weights),
            _ => write!(f, "{}", self.name()),
        }
    }
}
