use crate::*;

/// Result of one solve.
///
/// Player 2's estimate is absent when player 2 sampled from fixed
/// weights, since its counts then say nothing about best response.
/// `totals` are the play counts over every trial, not just up to the
/// best bound.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Solution {
    trials: usize,
    p1: Estimate,
    p2: Option<Estimate>,
    totals: [Vec<Count>; 2],
    choice: usize,
    trace: Vec<Trial>,
}

impl Solution {
    pub(crate) fn new(
        trials: usize,
        p1: Estimate,
        p2: Option<Estimate>,
        totals: [Vec<Count>; 2],
        choice: usize,
    ) -> Self {
        Self {
            trials,
            p1,
            p2,
            totals,
            choice,
            trace: Vec::new(),
        }
    }
    pub(crate) fn with_trace(self, trace: Vec<Trial>) -> Self {
        Self { trace, ..self }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn p1(&self) -> &Estimate {
        &self.p1
    }
    pub fn p2(&self) -> Option<&Estimate> {
        self.p2.as_ref()
    }
    pub fn p1_totals(&self) -> &[Count] {
        &self.totals[0]
    }
    pub fn p2_totals(&self) -> &[Count] {
        &self.totals[1]
    }
    /// Player 1 action sampled from its estimated strategy.
    pub fn choice(&self) -> usize {
        self.choice
    }
    /// Every trial, in order. Empty unless the solve was diagnostic.
    pub fn trace(&self) -> &[Trial] {
        &self.trace
    }
    fn estimates(&self) -> impl Iterator<Item = (&'static str, &Estimate)> {
        std::iter::once(("P1", &self.p1)).chain(self.p2.iter().map(|p2| ("P2", p2)))
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for trial in &self.trace {
            writeln!(f, "{}", trial)?;
        }
        writeln!(f, "Trials: {}", self.trials)?;
        writeln!(f, "┌────────┬────────────┬──────────┬────────────┬───────┐")?;
        writeln!(f, "│ Player │      Value │  ≈ Value │      Bound │ Trial │")?;
        writeln!(f, "├────────┼────────────┼──────────┼────────────┼───────┤")?;
        for (player, estimate) in self.estimates() {
            writeln!(
                f,
                "│ {:>6} │ {:>10} │ {:>+8.4} │ {:>10} │ {:>5} │",
                player,
                estimate.value().to_string(),
                estimate.value().as_f64(),
                estimate.bound().to_string(),
                estimate.trial(),
            )?;
        }
        writeln!(f, "└────────┴────────────┴──────────┴────────────┴───────┘")?;
        writeln!(f, "┌────────┬────────┬────────────┬──────────┐")?;
        writeln!(f, "│ Player │ Action │      Count │ Strategy │")?;
        writeln!(f, "├────────┼────────┼────────────┼──────────┤")?;
        for (player, estimate) in self.estimates() {
            for (action, (count, denominator)) in estimate.frequencies().enumerate() {
                writeln!(
                    f,
                    "│ {:>6} │ {:>6} │ {:>10} │ {:>8.4} │",
                    player,
                    action + 1,
                    format!("{}/{}", count, denominator),
                    count as f64 / denominator as f64,
                )?;
            }
        }
        writeln!(f, "└────────┴────────┴────────────┴──────────┘")?;
        writeln!(f, "P1 frequencies: {}", self.p1)?;
        if let Some(p2) = &self.p2 {
            writeln!(f, "P2 frequencies: {}", p2)?;
        }
        writeln!(f, "Recommended P1 action: {}", self.choice + 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_players() {
        let ref mut rng = Xoshiro::seed(42);
        let solution = Solver::new(PayoffMatrix::example(), Config::default())
            .solve(Mode::BestResponse, rng)
            .unwrap();
        let text = solution.to_string();
        println!("{}", text);
        assert!(text.starts_with("Trials: 100"));
        assert!(text.contains("P1 frequencies: "));
        assert!(text.contains("P2 frequencies: "));
        assert!(text.ends_with(&format!("Recommended P1 action: {}\n", solution.choice() + 1)));
    }

    #[test]
    fn renders_player_one_only_when_weighted() {
        let ref mut rng = Xoshiro::seed(42);
        let solution = Solver::new(PayoffMatrix::example(), Config::default())
            .solve(Mode::FixedWeighted(Weights::example()), rng)
            .unwrap();
        let text = solution.to_string();
        assert!(!text.contains("P2"));
        assert_eq!(text.matches("│     P1 │").count(), 1 + 3);
    }

    #[test]
    fn renders_trace_first() {
        let ref mut rng = Xoshiro::seed(42);
        let solution = Solver::new(PayoffMatrix::example(), Config::default())
            .solve(Mode::Diagnostic, rng)
            .unwrap();
        let text = solution.to_string();
        assert!(text.starts_with("  1: "));
        assert_eq!(text.lines().take_while(|l| !l.starts_with("Trials")).count(), 100);
    }

    #[test]
    fn serializes() {
        let ref mut rng = Xoshiro::seed(4);
        let solution = Solver::new(PayoffMatrix::example(), Config::default())
            .solve(Mode::FixedWeighted(Weights::example()), rng)
            .unwrap();
        let json = serde_json::to_value(&solution).unwrap();
        assert!(json["p2"].is_null());
        assert_eq!(json["trials"], 100);
        assert_eq!(json["p1"]["counts"].as_array().unwrap().len(), 3);
    }
}
