//! Per-trial diagnostics.
use crate::*;

/// Everything that happened in one trial, as seen after both players moved.
///
/// Actions are zero-based here and rendered one-based.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Trial {
    pub index: usize,
    pub p1_action: usize,
    pub p1_weights: Vec<Score>,
    pub p1_bound: Fraction,
    pub p2_action: usize,
    pub p2_weights: Vec<Score>,
    pub p2_bound: Fraction,
}

/// Receives each trial as it completes.
///
/// The trial is built lazily so that silent observers cost nothing.
pub trait Observer {
    fn observe<F>(&mut self, trial: F)
    where
        F: FnOnce() -> Trial;
}

/// Discards everything.
impl Observer for () {
    fn observe<F>(&mut self, _: F)
    where
        F: FnOnce() -> Trial,
    {
    }
}

/// Keeps every trial and echoes it at debug level.
impl Observer for Vec<Trial> {
    fn observe<F>(&mut self, trial: F)
    where
        F: FnOnce() -> Trial,
    {
        let trial = trial();
        log::debug!("{}", trial);
        self.push(trial);
    }
}

impl std::fmt::Display for Trial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>3}: {:>4} |", self.index, self.p1_action + 1)?;
        for w in &self.p1_weights {
            write!(f, " {:>4} |", w)?;
        }
        write!(f, " {:>7.4} || {:>4} |", self.p1_bound.as_f64(), self.p2_action + 1)?;
        for w in &self.p2_weights {
            write!(f, " {:>4} |", w)?;
        }
        write!(f, " {:>7.4}", self.p2_bound.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial() -> Trial {
        Trial {
            index: 2,
            p1_action: 2,
            p1_weights: vec![6, 2, 10],
            p1_bound: Fraction::new(2, 2),
            p2_action: 1,
            p2_weights: vec![2, -7, -10],
            p2_bound: Fraction::new(-10, 2),
        }
    }

    #[test]
    fn renders_one_based_row() {
        assert_eq!(
            trial().to_string(),
            "  2:    3 |    6 |    2 |   10 |  1.0000 ||    2 |    2 |   -7 |  -10 | -5.0000"
        );
    }

    #[test]
    fn silent_observer_never_builds() {
        let mut silent = ();
        silent.observe(|| unreachable!("silent observers do not build trials"));
    }

    #[test]
    fn recorder_keeps_order() {
        let mut trace = Vec::new();
        trace.observe(trial);
        trace.observe(|| Trial { index: 3, ..trial() });
        assert_eq!(trace.iter().map(|t| t.index).collect::<Vec<_>>(), vec![2, 3]);
    }
}
