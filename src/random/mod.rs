//! Deterministic randomness.
//!
//! Every random decision in a solve (player 1's opening action, sampled
//! opponent columns, the final recommendation) draws from one [`Xoshiro`]
//! owned by the solve session.

mod choice;
mod splitmix;
mod xoshiro;

pub use choice::*;
pub use splitmix::*;
pub use xoshiro::*;

pub(crate) use choice::walk;
