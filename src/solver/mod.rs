//! Fictitious play.
//!
//! One iteration engine drives every solving mode. What varies between
//! modes is how player 2 answers player 1 ([`Response`]) and whether each
//! trial is recorded ([`Observer`]):
//!
//! | Mode            | Player 2 response        | Estimates | Trace |
//! |-----------------|--------------------------|-----------|-------|
//! | `BestResponse`  | best response            | both      | no    |
//! | `FixedWeighted` | sampled from [`Weights`] | player 1  | no    |
//! | `Diagnostic`    | best response            | both      | yes   |

mod config;
mod engine;
mod estimate;
mod fraction;
mod mode;
mod response;
mod sampler;
mod solution;
mod trial;

pub use config::*;
pub use engine::*;
pub use estimate::*;
pub use fraction::*;
pub use mode::*;
pub use response::*;
pub use sampler::*;
pub use solution::*;
pub use trial::*;
