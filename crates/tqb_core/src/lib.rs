//! Softball round-robin standings with TQB / ER-TQB tie-breaks.
//!
//! Teams are ranked by wins. Teams level on wins are separated by, in
//! order:
//! - head-to-head results among the tied teams
//! - TQB: runs scored per inning at bat minus runs allowed per inning on
//!   defense
//! - ER-TQB: the same ratio with earned runs only
//!
//! Anything still tied after ER-TQB is reported as unresolved and left to
//! a manual step (batting average, coin toss).
//!
//! Every function here is pure: stats are rebuilt from the game records on
//! each call and nothing is cached between rankings.

pub mod innings;
pub mod matchups;
pub mod ranking;
pub mod stats;
pub mod tiebreak;
pub mod types;

pub use innings::*;
pub use matchups::generate_matchups;
pub use ranking::*;
pub use stats::*;
pub use tiebreak::*;
pub use types::*;
