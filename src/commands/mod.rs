//! Command implementations
//!
//! Commands are implemented as methods on [`crate::areas::checker::DiffChecker`]:
//!
//! - `compare`: diff two sources and print a patch, inline markup or a summary
//! - `tokenize`: show how a source is split before comparison

pub mod compare;
pub mod tokenize;
