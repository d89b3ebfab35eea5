//! Configuration and shared types
//!
//! Closed enums, exercise definitions, and the crate-wide error type.

pub mod types;
