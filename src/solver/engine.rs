//! The fictitious-play iteration engine.
//!
//! Each trial runs in two halves. Player 1 plays its current row and
//! player 2 answers through its [`Response`]; then player 2's column is
//! added to player 2's running payoffs and player 1 best-responds to them.
//! After each half the responder's running payoff, divided by the trial
//! number, is offered as a new bound on the game value.
//!
//! ```text
//! Initializing ──▶ Iterating (trial 1..=N) ──▶ Finalizing ──▶ Done
//! ```
//!
//! Trial 1 never offers a bound, and finalization removes the opening
//! action from the best snapshot, because player 1's first move was
//! chosen at random rather than by best response.
use crate::*;

/// Runs fictitious play over one payoff matrix.
#[derive(Debug, Clone)]
pub struct Solver {
    matrix: PayoffMatrix,
    config: Config,
}

/// One player's running state within a solve.
///
/// `weights` is indexed by the *other* player's actions: entry `j` is the
/// payoff this player would have accumulated had the opponent answered
/// every trial so far with action `j`.
struct Player {
    action: usize,
    initial: usize,
    counts: Vec<Count>,
    weights: Vec<Score>,
    tracker: Tracker,
}

impl Player {
    fn new(actions: usize, replies: usize) -> Self {
        Self {
            action: 0,
            initial: 0,
            counts: vec![0; actions],
            weights: vec![0; replies],
            tracker: Tracker::default(),
        }
    }
    /// Count the current action and accumulate its payoff row.
    fn play<P>(&mut self, row: &[P])
    where
        P: Copy + Into<Score>,
    {
        self.counts[self.action] += 1;
        for (weight, payoff) in self.weights.iter_mut().zip(row) {
            *weight += Into::<Score>::into(*payoff);
        }
    }
}

impl Solver {
    pub fn new(matrix: PayoffMatrix, config: Config) -> Self {
        Self { matrix, config }
    }

    /// Run one of the three built-in variants.
    pub fn solve(&self, mode: Mode, rng: &mut Xoshiro) -> Result<Solution> {
        log::info!(
            "solving {}x{} game for {} trials ({})",
            self.matrix.rows(),
            self.matrix.cols(),
            self.config.trials,
            mode
        );
        let solution = match mode {
            Mode::BestResponse => self.play(&BestResponse, &mut (), rng),
            Mode::FixedWeighted(ref weights) => self.play(weights, &mut (), rng),
            Mode::Diagnostic => {
                let mut trace = Vec::new();
                self.play(&BestResponse, &mut trace, rng)
                    .map(|solution| solution.with_trace(trace))
            }
        }?;
        log::info!(
            "player 1 value {} ≈ {:.4} at trial {}, recommending action {}",
            solution.p1().value(),
            solution.p1().value().as_f64(),
            solution.p1().trial(),
            solution.choice() + 1
        );
        Ok(solution)
    }

    /// Run fictitious play with any response rule for player 2,
    /// reporting every trial to `observer`.
    ///
    /// Input is validated before the first draw from `rng`.
    pub fn play<R, O>(&self, response: &R, observer: &mut O, rng: &mut Xoshiro) -> Result<Solution>
    where
        R: Response,
        O: Observer,
    {
        let ref payoff = self.matrix;
        self.config.validate(payoff)?;
        response.validate(payoff.cols())?;
        let ref opponent = OpponentMatrix::from(payoff);
        let mut p1 = Player::new(payoff.rows(), payoff.cols());
        let mut p2 = Player::new(payoff.cols(), payoff.rows());
        p1.action = match self.config.start {
            Start::Random => rng.below(payoff.rows()),
            Start::Fixed(row) => row,
        };
        p1.initial = p1.action;
        for t in 1..=self.config.trials {
            p1.play(payoff.row(p1.action));
            p2.action = response
                .respond(&p1.weights, rng)
                .ok_or_else(|| Error::invariant("player 2 has no action to respond with"))?;
            if t == 1 {
                p2.initial = p2.action;
            }
            let p1_score = p1.weights[p2.action];
            if t > 1 {
                p1.tracker.offer(p1_score, t, p2.action, &p1.counts);
            }

            p2.play(opponent.row(p2.action));
            let reply = best_response(&p2.weights)
                .ok_or_else(|| Error::invariant("player 1 has no best response"))?;
            let p2_score = p2.weights[reply];
            if t > 1 && R::ADAPTIVE {
                p2.tracker.offer(p2_score, t, reply, &p2.counts);
            }

            observer.observe(|| Trial {
                index: t,
                p1_action: p1.action,
                p1_weights: p1.weights.clone(),
                p1_bound: Fraction::new(p1_score, t as Score),
                p2_action: p2.action,
                p2_weights: p2.weights.clone(),
                p2_bound: Fraction::new(p2_score, t as Score),
            });
            p1.action = reply;
        }

        let p1_estimate = p1.tracker.finish(p1.initial, payoff.row(p1.initial))?;
        let p2_estimate = match R::ADAPTIVE {
            true => Some(p2.tracker.finish(p2.initial, opponent.row(p2.initial))?),
            false => None,
        };
        let choice = p1_estimate.sample(rng)?;
        Ok(Solution::new(
            self.config.trials,
            p1_estimate,
            p2_estimate,
            [p1.counts, p2.counts],
            choice,
        ))
    }
}
