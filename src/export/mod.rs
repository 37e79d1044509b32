//! Export functionality for analysis
//!
//! This module writes learned values and training histories to CSV for
//! offline analysis. Rows are sorted so repeated exports of the same state
//! diff cleanly.

mod values_csv;

pub use values_csv::{write_episode_returns, write_q_values, write_weights};
