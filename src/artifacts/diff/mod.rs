//! Text diff engine
//!
//! The engine turns two text buffers into an edit script and renders it:
//!
//! - `normalizer`: optional case and whitespace folding before comparison
//! - `tokenizer`: line, word or character tokens
//! - `alignment`: LCS alignment producing coalesced chunks, with a size guard
//! - `edit`: the chunk and edit script data model
//! - `lines`: patch lines that remember a missing final line break
//! - `unified`: unified diff (patch) rendering with configurable context
//! - `options`: comparison settings and the one-call `diff_text` and
//!   `diff_lines` pipelines
//! - `diff_source`: labelled inputs loaded from files, stdin or memory
//!
//! Everything except `diff_source` is pure and synchronous.

pub mod alignment;
pub mod diff_source;
pub mod edit;
pub mod lines;
pub mod normalizer;
pub mod options;
pub mod tokenizer;
pub mod unified;
