//! Edit script data model
//!
//! An edit script is the ordered list of [`DiffChunk`]s that turns the "before"
//! token sequence (side A) into the "after" token sequence (side B).
//!
//! ## Invariants
//!
//! - Concatenating the `a` tokens of every chunk reproduces A, in order
//! - Concatenating the `b` tokens of every chunk reproduces B, in order
//! - No two adjacent chunks carry the same [`Op`]
//! - `Equal` chunks hold the same tokens on both sides, `Insert` chunks have
//!   an empty `a` side and `Delete` chunks have an empty `b` side

use derive_new::new;
use std::fmt::{self, Display};
use std::ops::Deref;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Equal,
    Insert,
    Delete,
}

impl Op {
    /// Line prefix used by the unified diff format
    pub fn prefix(&self) -> char {
        match self {
            Op::Equal => ' ',
            Op::Insert => '+',
            Op::Delete => '-',
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Equal => write!(f, "equal"),
            Op::Insert => write!(f, "insert"),
            Op::Delete => write!(f, "delete"),
        }
    }
}

/// A maximal run of tokens sharing one operation
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffChunk<T> {
    op: Op,
    a: Vec<T>,
    b: Vec<T>,
}

impl<T: Clone> DiffChunk<T> {
    pub fn equal(tokens: Vec<T>) -> Self {
        Self::new(Op::Equal, tokens.clone(), tokens)
    }

    pub fn insert(tokens: Vec<T>) -> Self {
        Self::new(Op::Insert, Vec::new(), tokens)
    }

    pub fn delete(tokens: Vec<T>) -> Self {
        Self::new(Op::Delete, tokens, Vec::new())
    }
}

impl<T> DiffChunk<T> {
    pub fn op(&self) -> Op {
        self.op
    }

    /// Tokens consumed from side A (empty for inserts)
    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// Tokens consumed from side B (empty for deletes)
    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Tokens carried by this chunk, taken from whichever side is populated
    pub fn tokens(&self) -> &[T] {
        match self.op {
            Op::Insert => &self.b,
            Op::Equal | Op::Delete => &self.a,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> DiffChunk<U> {
        DiffChunk {
            op: self.op,
            a: self.a.into_iter().map(&mut f).collect(),
            b: self.b.into_iter().map(&mut f).collect(),
        }
    }
}

/// Token counts per operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub inserted: usize,
    pub deleted: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn changed(&self) -> usize {
        self.inserted + self.deleted
    }
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} insertion{}(+), {} deletion{}(-), {} unchanged",
            self.inserted,
            if self.inserted == 1 { "" } else { "s" },
            self.deleted,
            if self.deleted == 1 { "" } else { "s" },
            self.unchanged
        )
    }
}

/// Ordered chunks transforming side A into side B
///
/// `approximate` is set when the alignment size guard replaced the exact
/// alignment with a whole-buffer delete followed by a whole-buffer insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    chunks: Vec<DiffChunk<T>>,
    approximate: bool,
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        Self {
            chunks: Vec::new(),
            approximate: false,
        }
    }
}

impl<T> EditScript<T> {
    pub fn new(chunks: Vec<DiffChunk<T>>, approximate: bool) -> Self {
        Self {
            chunks,
            approximate,
        }
    }

    pub fn chunks(&self) -> &[DiffChunk<T>] {
        &self.chunks
    }

    pub fn into_chunks(self) -> Vec<DiffChunk<T>> {
        self.chunks
    }

    pub fn is_approximate(&self) -> bool {
        self.approximate
    }

    /// True when the script contains no insert or delete chunk
    pub fn is_identical(&self) -> bool {
        self.chunks.iter().all(|chunk| chunk.op == Op::Equal)
    }

    pub fn stats(&self) -> DiffStats {
        self.chunks
            .iter()
            .fold(DiffStats::default(), |mut stats, chunk| {
                match chunk.op {
                    Op::Equal => stats.unchanged += chunk.a.len(),
                    Op::Insert => stats.inserted += chunk.b.len(),
                    Op::Delete => stats.deleted += chunk.a.len(),
                }
                stats
            })
    }

    /// Replays side A from the script
    pub fn a_tokens(&self) -> impl Iterator<Item = &T> {
        self.chunks.iter().flat_map(|chunk| chunk.a.iter())
    }

    /// Replays side B from the script
    pub fn b_tokens(&self) -> impl Iterator<Item = &T> {
        self.chunks.iter().flat_map(|chunk| chunk.b.iter())
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> EditScript<U> {
        EditScript {
            chunks: self
                .chunks
                .into_iter()
                .map(|chunk| chunk.map(&mut f))
                .collect(),
            approximate: self.approximate,
        }
    }
}

impl<T> Deref for EditScript<T> {
    type Target = [DiffChunk<T>];

    fn deref(&self) -> &Self::Target {
        &self.chunks
    }
}

impl<T> AsRef<[DiffChunk<T>]> for EditScript<T> {
    fn as_ref(&self) -> &[DiffChunk<T>] {
        &self.chunks
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = DiffChunk<T>;
    type IntoIter = std::vec::IntoIter<DiffChunk<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

impl<'s, T> IntoIterator for &'s EditScript<T> {
    type Item = &'s DiffChunk<T>;
    type IntoIter = std::slice::Iter<'s, DiffChunk<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

/// Accumulates single-token operations into coalesced chunks
#[derive(Debug)]
pub(crate) struct ChunkBuilder<T> {
    chunks: Vec<DiffChunk<T>>,
}

impl<T: Clone> ChunkBuilder<T> {
    pub(crate) fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    pub(crate) fn push_equal(&mut self, token: &T) {
        let chunk = self.open(Op::Equal);
        chunk.a.push(token.clone());
        chunk.b.push(token.clone());
    }

    pub(crate) fn push_delete(&mut self, token: &T) {
        self.open(Op::Delete).a.push(token.clone());
    }

    pub(crate) fn push_insert(&mut self, token: &T) {
        self.open(Op::Insert).b.push(token.clone());
    }

    pub(crate) fn delete_all(&mut self, tokens: &[T]) {
        if !tokens.is_empty() {
            self.open(Op::Delete).a.extend_from_slice(tokens);
        }
    }

    pub(crate) fn insert_all(&mut self, tokens: &[T]) {
        if !tokens.is_empty() {
            self.open(Op::Insert).b.extend_from_slice(tokens);
        }
    }

    pub(crate) fn finish(self, approximate: bool) -> EditScript<T> {
        EditScript::new(self.chunks, approximate)
    }

    // Reuses the trailing chunk when it already carries `op`.
    fn open(&mut self, op: Op) -> &mut DiffChunk<T> {
        if self.chunks.last().is_none_or(|chunk| chunk.op != op) {
            self.chunks.push(DiffChunk::new(op, Vec::new(), Vec::new()));
        }

        let last = self.chunks.len() - 1;
        &mut self.chunks[last]
    }
}
