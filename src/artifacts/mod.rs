//! Diff data structures and algorithms
//!
//! - `core`: Shared output utilities (pager wrapper, color and format selection)
//! - `diff`: Normalization, tokenization, LCS alignment and unified rendering

pub mod core;
pub mod diff;
