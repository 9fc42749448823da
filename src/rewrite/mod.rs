//! Rewrite module - Runs a preset over the target file
//!
//! - `engine`: pure text cleanup (rules in order, per-rule counts, leftovers)
//! - `api`: file I/O, safety switches and report output

pub mod api;
pub mod engine;
