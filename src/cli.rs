//! Command-line front end.
//!
//! With no arguments, solves the built-in 3×3 demo game by pure
//! fictitious play from a wall-clock seed.
use crate::*;
use clap::Parser;

/// Which solver variant to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    /// Both players best-respond
    #[default]
    Best,
    /// Player 2 samples from fixed weights
    Weighted,
    /// Best response, printing every trial
    Diagnostic,
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Estimate equilibrium strategies of a zero-sum matrix game by fictitious play",
    long_about = None
)]
pub struct Args {
    /// Player 1's payoffs, e.g. "1,-3,7; 0,2,5; 5,5,3"
    #[arg(short, long, conflicts_with = "file")]
    pub matrix: Option<String>,
    /// Read player 1's payoffs from a file, one row per line
    #[arg(short, long)]
    pub file: Option<std::path::PathBuf>,
    #[arg(long, value_enum, default_value_t = Variant::Best)]
    pub mode: Variant,
    /// Player 2's fixed weights in weighted mode, e.g. "5,0,7"
    #[arg(short, long)]
    pub weights: Option<String>,
    /// Generator seed; wall-clock seconds when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Player 1's opening row, 1-based; random when omitted
    #[arg(long)]
    pub start: Option<usize>,
    #[arg(short, long, default_value_t = TOTAL_TRIALS)]
    pub trials: usize,
    /// Print the solution as JSON
    #[arg(long)]
    pub json: bool,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn matrix(&self) -> anyhow::Result<PayoffMatrix> {
        match (&self.matrix, &self.file) {
            (Some(text), _) => PayoffMatrix::try_from(text.as_str()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))
                .and_then(|text| PayoffMatrix::try_from(text.as_str())),
            (None, None) => Ok(PayoffMatrix::example()),
        }
    }

    pub fn mode(&self) -> anyhow::Result<Mode> {
        match (self.mode, &self.weights) {
            (Variant::Weighted, Some(text)) => Ok(Mode::FixedWeighted(Weights::try_from(text.as_str())?)),
            (Variant::Weighted, None) => Ok(Mode::FixedWeighted(Weights::example())),
            (_, Some(_)) => anyhow::bail!("--weights only applies to --mode weighted"),
            (Variant::Best, None) => Ok(Mode::BestResponse),
            (Variant::Diagnostic, None) => Ok(Mode::Diagnostic),
        }
    }

    pub fn config(&self) -> anyhow::Result<Config> {
        let start = match self.start {
            None => Start::Random,
            Some(0) => anyhow::bail!("--start is 1-based"),
            Some(row) => Start::Fixed(row - 1),
        };
        Ok(Config::default().with_trials(self.trials).with_start(start))
    }

    pub fn rng(&self) -> Xoshiro {
        match self.seed {
            Some(seed) => Xoshiro::seed(seed),
            None => Xoshiro::entropy(),
        }
    }

    /// Solve and render the result as text or JSON.
    pub fn run(&self) -> anyhow::Result<String> {
        let matrix = self.matrix()?;
        let mode = self.mode()?;
        let config = self.config()?;
        log::debug!("payoff matrix\n{}", matrix);
        let ref mut rng = self.rng();
        let solution = Solver::new(matrix, config).solve(mode, rng)?;
        match self.json {
            true => Ok(serde_json::to_string_pretty(&solution)? + "\n"),
            false => Ok(solution.to_string()),
        }
    }
}
