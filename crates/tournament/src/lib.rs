//! Tournament runner for softball round robins
//!
//! This crate wraps the `tqb_core` ranking engine with:
//! - Schedule creation and data-entry validation
//! - CSV import of game results and export of standings
//! - JSON storage of computed results
//! - Text reports in English or Spanish
//!
//! # Usage
//!
//! ```bash
//! # Rank a CSV of results, escalating to ER-TQB when needed
//! cargo run -p tournament -- rank results.csv
//!
//! # Print the blank pairings for four teams
//! cargo run -p tournament -- matchups Tigers Eagles Sharks Lions
//! ```

pub mod config;
pub mod csv_io;
pub mod error;
pub mod report;
mod results;
pub mod schedule;

pub use config::{Language, TournamentConfig};
pub use error::{TournamentError, TournamentResult};
pub use results::*;
pub use schedule::Schedule;
