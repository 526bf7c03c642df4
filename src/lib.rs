// Library interface for slovolov
// This allows integration tests to drive the matching pipeline directly

pub mod cli;
pub mod dictionary;
pub mod filter;
pub mod logging;
pub mod solver;

// Re-export commonly used functions for easier testing
pub use dictionary::{load_dictionary, parse_dictionary};
pub use filter::{WordFilter, filter_words, parse_constraints};
pub use solver::{all_combinations, find_words};
