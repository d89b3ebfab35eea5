//! gradebox: a heuristic snippet grader
//! Predicts what a short teaching snippet would print and grades the
//! prediction against an optional expected output, without invoking a
//! real compiler or interpreter for any supported language.
//!
//! # Architecture
//!
//! This crate is organized as a pipeline, leaves first:
//!
//! ## Language Profiles ([`judge`])
//! - [`judge::profile`]: immutable per-language recognizer/banner tables
//! - [`judge::registry`]: tag resolution with a JS-like catch-all default
//! - [`judge::languages`]: builtin profile definitions, one per language
//!
//! ## Source Analysis ([`analyze`])
//! - [`analyze::symbols`]: heuristic assignment scan, last-write-wins
//! - [`analyze::predict`]: first-match output prediction and resolution
//!
//! ## Verdict ([`verdict`])
//! - [`verdict::validator`]: normalized substring grading
//!
//! ## Session Lifecycle ([`session`])
//! - [`session::controller`]: three-state scheduler with simulated delays
//! - [`session::scheduler`]: injectable clock and one-shot timer queue
//! - [`session::composer`]: banner + prediction log assembly
//!
//! ## Observability ([`observability`])
//! - [`observability::events`]: structured run events with correlation IDs
//!
//! ## Configuration ([`config`])
//! - [`config::types`]: shared closed enums, exercise spec, error type
//!
//! # Design Principles
//!
//! 1. **No failure path in the core** - Unrecognized syntax, unknown tags,
//!    and missing matches degrade to defined fallbacks, never errors
//! 2. **Recognizers are data** - Adding a language touches a profile
//!    table, not control flow
//! 3. **Deterministic time** - Simulated delays run on an injected clock
//!    so tests advance virtual time instead of sleeping
//! 4. **One session per exercise** - Sessions are owned values created
//!    fresh per attempt, never recycled

// Language Profiles
pub mod judge;

// Source Analysis
pub mod analyze;

// Verdict
pub mod verdict;

// Session Lifecycle
pub mod session;

// Observability
pub mod observability;

// Configuration
pub mod config;

// CLI entrypoint wiring for the gradebox binary.
pub mod cli;

// Re-export commonly used types for convenience
pub use config::types::*;
pub use judge::registry::resolve_profile;
pub use session::controller::Session;
pub use session::scheduler::{Clock, ManualClock, SystemClock};
