//! Verdict computation
//!
//! Derives the grading outcome as a pure function over the predicted and
//! expected output strings.

pub mod validator;
