//! Fictitious-play estimation for two-player zero-sum matrix games.
//!
//! Given player 1's integer payoff matrix, both players repeatedly
//! best-respond to the cumulative history of the other's actions. The
//! running bounds converge toward the game value, and the play counts
//! observed at the best bound approximate an equilibrium mixed strategy.
//!
//! # Module Structure
//!
//! - `random` - Seedable xoshiro-style generator and weighted choice
//! - `matrix` - Payoff matrix and its negated transpose
//! - `solver` - Iteration engine, response rules, estimates, sampling
//! - `error` - Error taxonomy shared by every module
//!
//! # Example
//!
//! ```
//! use fictitious::*;
//!
//! let matrix = PayoffMatrix::try_from("1,-3,7; 0,2,5; 5,5,3").unwrap();
//! let solution = Solver::new(matrix, Config::default())
//!     .solve(Mode::BestResponse, &mut Xoshiro::seed(42))
//!     .unwrap();
//! assert_eq!(solution.p1().counts().iter().sum::<Count>(), solution.p1().denominator());
//! ```

mod error;
mod matrix;
mod random;
mod solver;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::*;
pub use matrix::*;
pub use random::*;
pub use solver::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single payoff cell, from player 1's perspective.
pub type Payoff = i32;
/// Cumulative payoffs summed over trials.
pub type Score = i64;
/// Number of times an action was played.
pub type Count = u32;

// ============================================================================
// FICTITIOUS PLAY PARAMETERS
// ============================================================================
/// Rounds of best response per solve.
pub const TOTAL_TRIALS: usize = 100;
/// Largest number of player 1 actions accepted.
pub const MAX_ROWS: usize = 20;
/// Largest number of player 2 actions accepted.
pub const MAX_COLS: usize = 20;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
