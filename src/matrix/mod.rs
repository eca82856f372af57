//! Payoff matrices.
//!
//! Player 1 chooses rows, player 2 chooses columns, and every cell is
//! player 1's payoff. Player 2's view is derived as the negated transpose.

mod opponent;
mod payoff;

pub use opponent::*;
pub use payoff::*;
