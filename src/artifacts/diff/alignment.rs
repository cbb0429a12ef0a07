//! LCS-based token alignment
//!
//! Computes the edit script between two token sequences with the classic
//! longest-common-subsequence dynamic program.
//!
//! ## Algorithm
//!
//! 1. Build the table bottom-up, where `dp[i][j]` is the LCS length of
//!    `a[i..]` and `b[j..]`:
//!    - `dp[i][j] = dp[i+1][j+1] + 1` when `a[i] == b[j]`
//!    - `dp[i][j] = max(dp[i+1][j], dp[i][j+1])` otherwise
//!    - `dp[n][*] = dp[*][m] = 0`
//! 2. Walk forward from `(0, 0)`:
//!    - equal tokens are emitted as `Equal` and both sides advance
//!    - otherwise a `Delete` is emitted when `dp[i+1][j] >= dp[i][j+1]`
//!      (deletions win ties), an `Insert` otherwise
//! 3. Once either side runs out, the rest of the other side is flushed as a
//!    single `Delete` or `Insert` run.
//!
//! Consecutive tokens sharing an operation are coalesced while walking, so the
//! number of chunks equals the number of operation changes plus one.
//!
//! ## Size Guard
//!
//! The table costs `O(n*m)` time and memory. When `n*m` exceeds the configured
//! ceiling ([`DEFAULT_MAX_CELLS`] unless overridden) the alignment is skipped
//! and the script becomes "delete all of A, then insert all of B", flagged as
//! approximate. Similar inputs that trip the guard therefore show up as fully
//! rewritten. The same fallback applies when the `(n+1)*(m+1)` table size
//! overflows `usize` or cannot be allocated, whatever the ceiling.
//!
//! ## Debug Logging
//!
//! Build with `--features debug_align` to trace the full table of every
//! alignment through the `log` facade (`RUST_LOG=trace`). Only useful on small
//! inputs.
//!
//! ## Usage
//!
//! ```rust
//! use diffcheck::artifacts::diff::alignment::diff_tokens;
//! use diffcheck::artifacts::diff::edit::Op;
//!
//! let script = diff_tokens(&["a", "b", "c"], &["a", "x", "c"]);
//! let ops = script.iter().map(|chunk| chunk.op()).collect::<Vec<_>>();
//!
//! assert_eq!(ops, [Op::Equal, Op::Delete, Op::Insert, Op::Equal]);
//! ```

use crate::artifacts::diff::edit::{ChunkBuilder, EditScript};

/// Default ceiling on the number of table cells (`|A| * |B|`)
pub const DEFAULT_MAX_CELLS: usize = 1_200_000;

/// Table dump enabled by the debug_align feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_align")]
        {
            log::trace!($($arg)*);
        }
    };
}

/// Flat `(n+1) x (m+1)` LCS length table, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cells: Vec<usize>,
    columns: usize,
}

impl LcsTable {
    /// Number of cells needed for `a` and `b`, `None` on overflow
    pub fn cells_for(a_len: usize, b_len: usize) -> Option<usize> {
        a_len.checked_add(1)?.checked_mul(b_len.checked_add(1)?)
    }

    /// Builds the table, or returns `None` when it cannot be sized or allocated
    pub fn try_build<T: Eq>(a: &[T], b: &[T]) -> Option<Self> {
        let size = Self::cells_for(a.len(), b.len())?;
        let columns = b.len() + 1;
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).ok()?;
        cells.resize(size, 0);

        for i in (0..a.len()).rev() {
            for j in (0..b.len()).rev() {
                cells[i * columns + j] = if a[i] == b[j] {
                    cells[(i + 1) * columns + j + 1] + 1
                } else {
                    cells[(i + 1) * columns + j].max(cells[i * columns + j + 1])
                };
            }
        }

        Some(Self { cells, columns })
    }

    /// LCS length of `a[i..]` and `b[j..]`
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.columns + j]
    }

    pub fn lcs_len(&self) -> usize {
        self.cells.first().copied().unwrap_or(0)
    }

    #[cfg(feature = "debug_align")]
    fn dump(&self) -> String {
        self.cells
            .chunks(self.columns)
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{cell:>3}"))
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    max_cells: usize,
}

impl<'d, T: Eq + Clone> LcsDiff<'d, T> {
    pub fn new(a: &'d [T], b: &'d [T]) -> Self {
        Self {
            a,
            b,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Whether the table for these inputs would exceed the cell ceiling
    ///
    /// Also true when the table size itself overflows `usize`.
    pub fn exceeds_guard(&self) -> bool {
        LcsTable::cells_for(self.a.len(), self.b.len()).is_none()
            || self.a.len().saturating_mul(self.b.len()) > self.max_cells
    }

    pub fn diff(&self) -> EditScript<T> {
        if self.exceeds_guard() {
            log::debug!(
                "alignment skipped: {}x{} tokens exceed the {} cell ceiling",
                self.a.len(),
                self.b.len(),
                self.max_cells
            );
            return self.rewrite_all();
        }

        let Some(table) = LcsTable::try_build(self.a, self.b) else {
            log::warn!(
                "alignment skipped: cannot allocate a table for {}x{} tokens",
                self.a.len(),
                self.b.len()
            );
            return self.rewrite_all();
        };
        log::debug!(
            "aligned {}x{} tokens, lcs length {}",
            self.a.len(),
            self.b.len(),
            table.lcs_len()
        );
        debug_log!("lcs table:\n{}", table.dump());

        self.walk(&table)
    }

    fn walk(&self, table: &LcsTable) -> EditScript<T> {
        let (n, m) = (self.a.len(), self.b.len());
        let (mut i, mut j) = (0, 0);
        let mut builder = ChunkBuilder::new();

        while i < n && j < m {
            if self.a[i] == self.b[j] {
                builder.push_equal(&self.a[i]);
                i += 1;
                j += 1;
            } else if table.get(i + 1, j) >= table.get(i, j + 1) {
                builder.push_delete(&self.a[i]);
                i += 1;
            } else {
                builder.push_insert(&self.b[j]);
                j += 1;
            }
        }

        builder.delete_all(&self.a[i..]);
        builder.insert_all(&self.b[j..]);

        builder.finish(false)
    }

    fn rewrite_all(&self) -> EditScript<T> {
        let mut builder = ChunkBuilder::new();
        builder.delete_all(self.a);
        builder.insert_all(self.b);

        builder.finish(true)
    }
}

/// Aligns two token sequences using the default cell ceiling
pub fn diff_tokens<T: Eq + Clone>(a: &[T], b: &[T]) -> EditScript<T> {
    LcsDiff::new(a, b).diff()
}
