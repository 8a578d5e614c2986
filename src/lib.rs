//! 32-bit integer bit puzzles, their reference implementations, and a
//! checker that scores one against the other.

pub mod catalog;
pub mod config;
pub mod harness;
pub mod oracle;
pub mod puzzles;
pub mod utils;
