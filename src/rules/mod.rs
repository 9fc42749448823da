//! Rules module - The ordered substitutions that make up a cleanup
//!
//! A rule is one or more regex patterns sharing a literal replacement.
//! Presets bundle the five cleanup rules in the order they must run.

pub mod preset;
pub mod rule;

pub use preset::Preset;
pub use rule::Rule;
