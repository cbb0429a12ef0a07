//! Patch-oriented line splitting
//!
//! [`tokenize`] keeps the empty token that follows a final `\n`, so joining
//! its tokens rebuilds the input. A patch counts lines instead: `a\nb\n` has
//! two lines, and the absence of the final line break is a property of the
//! last line, rendered as [`NO_NEWLINE_MARKER`].

use crate::artifacts::diff::tokenizer::{Granularity, tokenize};
use derive_new::new;
use std::fmt::{self, Display};

pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// One line of a buffer, without its line break
///
/// Only the last line of a buffer can be unterminated. Two lines with the same
/// text compare unequal when only one of them is terminated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct TextLine {
    text: String,
    terminated: bool,
}

impl TextLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

/// Wraps a token that does not end a buffer without a line break
impl From<String> for TextLine {
    fn from(text: String) -> Self {
        Self::new(text, true)
    }
}

impl AsRef<str> for TextLine {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Display for TextLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Splits `text` into the lines a patch would show
pub fn split_lines(text: &str) -> Vec<TextLine> {
    let ends_with_newline = text.ends_with('\n');
    let mut lines = tokenize(text, Granularity::Line);
    if ends_with_newline {
        lines.pop();
    }

    let count = lines.len();
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            TextLine::new(line.to_string(), ends_with_newline || index + 1 < count)
        })
        .collect()
}
