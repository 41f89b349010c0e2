//! Core operations.
//!
//! This module contains the business logic for scriptname commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod explain;
pub mod names;

pub use check::check;
pub use explain::explain;
pub use names::names;
