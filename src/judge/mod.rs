//! Language profiles.
//!
//! The grading core stays language-agnostic. Profiles define output-call
//! recognizers, tag-matching rules, and cosmetic toolchain banners for
//! each teaching language.

pub mod languages;
pub mod profile;
pub mod registry;
