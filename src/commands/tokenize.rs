use crate::areas::checker::DiffChecker;
use crate::artifacts::diff::diff_source::DiffSource;
use crate::artifacts::diff::normalizer::normalize;
use crate::artifacts::diff::tokenizer::tokenize;
use std::io::Write;

impl DiffChecker {
    /// Prints the tokens of `source` one per line, Debug-quoted
    pub fn tokenize(&self, source: &DiffSource) -> anyhow::Result<()> {
        let options = self.options();
        let text = normalize(source.content(), options.normalization);

        for token in tokenize(&text, options.granularity) {
            writeln!(self.writer(), "{token:?}")?;
        }

        Ok(())
    }
}
