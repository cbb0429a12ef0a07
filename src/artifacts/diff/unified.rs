//! Unified diff rendering
//!
//! Groups an edit script into hunks and renders them in the unified format
//! understood by `patch` and `git apply`:
//!
//! ```text
//! @@ -1,3 +1,3 @@
//!  a
//! -b
//! +x
//!  c
//! ```
//!
//! Each token is rendered as one line. Up to `context` unchanged lines are kept
//! before and after every change; changes separated by no more than
//! `2 * context` unchanged lines share a hunk, longer unchanged runs end the
//! current hunk and their middle is left out.
//!
//! Start line numbers are 1-based. A side with no lines in the hunk reports the
//! line *before* the hunk as its start, so an insertion into an empty file
//! reads `@@ -0,0 +1,n @@`.

use crate::artifacts::diff::edit::{DiffChunk, Op};
use std::fmt::{self, Display};

pub const DEFAULT_CONTEXT: usize = 3;

/// A run of changed lines with their context, borrowing the script's tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'c, T> {
    a_start: usize,
    a_size: usize,
    b_start: usize,
    b_size: usize,
    lines: Vec<(Op, &'c T)>,
}

impl<'c, T> Hunk<'c, T> {
    pub fn a_start(&self) -> usize {
        self.a_start
    }

    pub fn a_size(&self) -> usize {
        self.a_size
    }

    pub fn b_start(&self) -> usize {
        self.b_start
    }

    pub fn b_size(&self) -> usize {
        self.b_size
    }

    pub fn lines(&self) -> &[(Op, &'c T)] {
        &self.lines
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start, self.a_size, self.b_start, self.b_size
        )
    }
}

impl<T: AsRef<str>> Display for Hunk<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for (op, line) in &self.lines {
            writeln!(f, "{}{}", op.prefix(), line.as_ref())?;
        }
        Ok(())
    }
}

/// Lines buffered for the hunk under construction
#[derive(Debug)]
struct PendingHunk<'c, T> {
    lines: Vec<(Op, &'c T)>,
    has_changes: bool,
}

impl<'c, T> PendingHunk<'c, T> {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            has_changes: false,
        }
    }

    fn push(&mut self, op: Op, line: &'c T) {
        self.has_changes |= op != Op::Equal;
        self.lines.push((op, line));
    }

    /// Closes the hunk; `a_next`/`b_next` are the line numbers following it
    fn take(&mut self, a_next: usize, b_next: usize) -> Option<Hunk<'c, T>> {
        let lines = std::mem::take(&mut self.lines);
        if !std::mem::take(&mut self.has_changes) {
            return None;
        }

        let a_size = lines.iter().filter(|(op, _)| *op != Op::Insert).count();
        let b_size = lines.iter().filter(|(op, _)| *op != Op::Delete).count();

        Some(Hunk {
            a_start: hunk_start(a_next, a_size),
            a_size,
            b_start: hunk_start(b_next, b_size),
            b_size,
            lines,
        })
    }
}

fn hunk_start(next: usize, size: usize) -> usize {
    if size == 0 {
        next.saturating_sub(1)
    } else {
        next - size
    }
}

/// Groups an edit script into hunks with `context` surrounding lines
pub fn hunks<T>(chunks: &[DiffChunk<T>], context: usize) -> Vec<Hunk<'_, T>> {
    let mut hunks = Vec::new();
    let mut pending = PendingHunk::new();
    let (mut a_line, mut b_line) = (1, 1);

    for (index, chunk) in chunks.iter().enumerate() {
        match chunk.op() {
            Op::Equal => {
                let lines = chunk.a();
                let is_last = index + 1 == chunks.len();

                if !pending.has_changes {
                    // Only the tail can serve as leading context
                    let skip = lines.len().saturating_sub(context);
                    a_line += skip;
                    b_line += skip;
                    for line in &lines[skip..] {
                        pending.push(Op::Equal, line);
                        a_line += 1;
                        b_line += 1;
                    }
                } else if lines.len() <= 2 * context && !is_last {
                    for line in lines {
                        pending.push(Op::Equal, line);
                        a_line += 1;
                        b_line += 1;
                    }
                } else {
                    let head = context.min(lines.len());
                    for line in &lines[..head] {
                        pending.push(Op::Equal, line);
                        a_line += 1;
                        b_line += 1;
                    }
                    hunks.extend(pending.take(a_line, b_line));

                    let tail = lines.len().saturating_sub(context).max(head);
                    a_line += tail - head;
                    b_line += tail - head;
                    for line in &lines[tail..] {
                        pending.push(Op::Equal, line);
                        a_line += 1;
                        b_line += 1;
                    }
                }
            }
            Op::Delete => {
                for line in chunk.a() {
                    pending.push(Op::Delete, line);
                    a_line += 1;
                }
            }
            Op::Insert => {
                for line in chunk.b() {
                    pending.push(Op::Insert, line);
                    b_line += 1;
                }
            }
        }
    }

    hunks.extend(pending.take(a_line, b_line));
    hunks
}

/// Renders an edit script as unified diff hunks
///
/// Returns an empty string when the script has no changes. Every line,
/// including the last one, is terminated by `\n`.
pub fn build_unified<T: AsRef<str>>(chunks: &[DiffChunk<T>], context: usize) -> String {
    hunks(chunks, context)
        .iter()
        .map(|hunk| hunk.to_string())
        .collect()
}
