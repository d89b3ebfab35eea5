/// Core types and structures for the gradebox system
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle state of a grading session.
///
/// Transitions are monotonic and total per run: `Idle -> Compiling ->
/// Executing -> Idle`. `Idle` is the initial, terminal, and re-entrant
/// state; no state is skipped or revisited mid-run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No run in flight; mutators are accepted.
    Idle,
    /// Simulated compile phase; all mutators are dropped.
    Compiling,
    /// Simulated execute phase; transient within a single timer firing.
    Executing,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "idle"),
            SessionStatus::Compiling => write!(f, "compiling"),
            SessionStatus::Executing => write!(f, "executing"),
        }
    }
}

/// Binary grading outcome, computed exactly once per completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Predicted output satisfied the grading criteria (or the exercise
    /// was ungraded).
    Success,
    /// Predicted output did not contain the expected string.
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => write!(f, "success"),
            Verdict::Fail => write!(f, "fail"),
        }
    }
}

/// Exercise definition supplied by the host at session construction.
///
/// The grader never fetches or persists this itself; it is handed over
/// once and stays immutable for the session's lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseSpec {
    /// Free-form language tag (e.g. "Python 3", "java", "C++").
    pub language_tag: String,
    /// Starter snippet shown to the learner; kept as the reset target.
    pub starter_source: String,
    /// Expected output, if the exercise is graded. `None` or empty means
    /// exploratory: every run succeeds.
    pub expected_output: Option<String>,
}

impl ExerciseSpec {
    pub fn new(
        language_tag: impl Into<String>,
        starter_source: impl Into<String>,
        expected_output: Option<String>,
    ) -> Self {
        Self {
            language_tag: language_tag.into(),
            starter_source: starter_source.into(),
            expected_output,
        }
    }
}

/// Error type for the edges of the crate (CLI, I/O).
///
/// The grading core itself has no failure path: unrecognized syntax,
/// unknown language tags, and missing matches all degrade to defined
/// fallbacks instead of raising.
#[derive(Error, Debug)]
pub enum GraderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GraderError>;
