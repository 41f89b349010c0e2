//! Core utilities for the scriptname binding name engine.
//!
//! This crate provides the small string helpers shared across
//! the scriptname crates.

mod utils;

// String utilities
pub use utils::{is_letters_and_whitespace, lower_first, strip_whitespace};
