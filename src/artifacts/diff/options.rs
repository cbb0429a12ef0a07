use crate::artifacts::diff::alignment::{DEFAULT_MAX_CELLS, LcsDiff};
use crate::artifacts::diff::edit::EditScript;
use crate::artifacts::diff::lines::{TextLine, split_lines};
use crate::artifacts::diff::normalizer::{Normalization, normalize};
use crate::artifacts::diff::tokenizer::{Granularity, tokenize};
use crate::artifacts::diff::unified::DEFAULT_CONTEXT;

/// Settings for one text comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    pub granularity: Granularity,
    pub normalization: Normalization,
    pub context: usize,
    pub max_cells: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::Line,
            normalization: Normalization::empty(),
            context: DEFAULT_CONTEXT,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl DiffOptions {
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Negative values are clamped to zero
    pub fn with_context(mut self, context: isize) -> Self {
        self.context = context.max(0).unsigned_abs();
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }
}

/// Normalizes, tokenizes and aligns two raw buffers
pub fn diff_text(a: &str, b: &str, options: &DiffOptions) -> EditScript<String> {
    let a = normalize(a, options.normalization);
    let b = normalize(b, options.normalization);
    let a_tokens = tokenize(&a, options.granularity);
    let b_tokens = tokenize(&b, options.granularity);

    LcsDiff::new(&a_tokens, &b_tokens)
        .with_max_cells(options.max_cells)
        .diff()
        .map(str::to_string)
}

/// Normalizes and aligns two raw buffers line by line, as a patch counts them
///
/// Unlike [`diff_text`] at line granularity, a final line break does not add
/// an empty line, and a last line missing its line break differs from the
/// same text followed by one. `options.granularity` is not consulted.
pub fn diff_lines(a: &str, b: &str, options: &DiffOptions) -> EditScript<TextLine> {
    let a_lines = split_lines(&normalize(a, options.normalization));
    let b_lines = split_lines(&normalize(b, options.normalization));

    LcsDiff::new(&a_lines, &b_lines)
        .with_max_cells(options.max_cells)
        .diff()
}
