//! Stateful components
//!
//! - `checker`: the [`checker::DiffChecker`] that commands run against

pub mod checker;
