//! Core module - Report model, rendering and shared helpers
//!
//! This module provides:
//! - Report model (ResultItem / ResultSet)
//! - Rendering for text, jsonl, json and md output
//! - Path resolution helpers
//! - Hashing and small formatting utilities
//! - Stderr diagnostics

pub mod log;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
