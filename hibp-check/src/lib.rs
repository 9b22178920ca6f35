//! Command-line front end for [`hibp_range`]: reads candidates from arguments
//! or a file, checks them one at a time and reports the results.

pub mod cli;
pub mod error;
pub mod input;
pub mod report;
pub mod runner;

pub use cli::{Args, DEFAULT_INPUT};
pub use error::Error;
pub use input::{Candidate, Origin};
pub use report::{Outcome, Reporter, Statistics};
pub use runner::{progress_bar, run_batch};
