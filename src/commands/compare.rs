use crate::areas::checker::DiffChecker;
use crate::artifacts::core::OutputFormat;
use crate::artifacts::diff::diff_source::DiffSource;
use crate::artifacts::diff::edit::{EditScript, Op};
use crate::artifacts::diff::lines::{NO_NEWLINE_MARKER, TextLine};
use crate::artifacts::diff::options::{diff_lines, diff_text};
use crate::artifacts::diff::tokenizer::Granularity;
use crate::artifacts::diff::unified::{Hunk, hunks};
use anyhow::Context;
use colored::Colorize;
use std::io::Write;

impl DiffChecker {
    /// Compares two sources and prints the result in `format`
    ///
    /// Returns whether the sources differ after normalization.
    pub async fn compare(
        &self,
        old: &DiffSource,
        new: &DiffSource,
        format: OutputFormat,
    ) -> anyhow::Result<bool> {
        let script = self.align(old, new).await?;

        if script.is_approximate() {
            log::warn!(
                "{} and {} are too large to align exactly; showing a full rewrite",
                old.label(),
                new.label()
            );
        }

        match format {
            OutputFormat::Unified => self.print_unified(old, new, &script)?,
            OutputFormat::Inline => self.print_inline(&script)?,
            OutputFormat::Stat => self.print_stat(&script)?,
        }

        Ok(!script.is_identical())
    }

    /// Lines are aligned as a patch counts them; words and characters as
    /// tokens
    async fn align(
        &self,
        old: &DiffSource,
        new: &DiffSource,
    ) -> anyhow::Result<EditScript<TextLine>> {
        let options = *self.options();
        let (a, b) = (old.content().to_string(), new.content().to_string());

        log::debug!(
            "comparing {} ({} bytes) with {} ({} bytes) by {}",
            old.label(),
            a.len(),
            new.label(),
            b.len(),
            options.granularity
        );

        let task = tokio::task::spawn_blocking(move || match options.granularity {
            Granularity::Line => diff_lines(&a, &b, &options),
            Granularity::Word | Granularity::Char => {
                diff_text(&a, &b, &options).map(TextLine::from)
            }
        });

        tokio::time::timeout(self.timeout(), task)
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "comparison timed out after {} ms",
                    self.timeout().as_millis()
                )
            })?
            .context("alignment worker failed")
    }

    fn print_unified(
        &self,
        old: &DiffSource,
        new: &DiffSource,
        script: &EditScript<TextLine>,
    ) -> anyhow::Result<()> {
        if script.is_identical() {
            return Ok(());
        }

        writeln!(self.writer(), "{}", format!("--- {}", old.header()).bold())?;
        writeln!(self.writer(), "{}", format!("+++ {}", new.header()).bold())?;

        for hunk in hunks(script, self.options().context) {
            self.print_hunk(&hunk)?;
        }

        Ok(())
    }

    fn print_hunk(&self, hunk: &Hunk<TextLine>) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;

        for (op, line) in hunk.lines() {
            let text = format!("{}{}", op.prefix(), line.text());
            match op {
                Op::Equal => writeln!(self.writer(), "{text}")?,
                Op::Delete => writeln!(self.writer(), "{}", text.red())?,
                Op::Insert => writeln!(self.writer(), "{}", text.green())?,
            }

            if !line.is_terminated() {
                writeln!(self.writer(), "{NO_NEWLINE_MARKER}")?;
            }
        }

        Ok(())
    }

    fn print_inline(&self, script: &EditScript<TextLine>) -> anyhow::Result<()> {
        let joiner = self.options().granularity.joiner();

        let rendered = script
            .iter()
            .map(|chunk| {
                let text = chunk
                    .tokens()
                    .iter()
                    .map(TextLine::text)
                    .collect::<Vec<_>>()
                    .join(joiner);
                match chunk.op() {
                    Op::Equal => text,
                    Op::Delete => format!("[-{text}-]").red().to_string(),
                    Op::Insert => format!("{{+{text}+}}").green().to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(joiner);

        if rendered.ends_with('\n') || rendered.is_empty() {
            write!(self.writer(), "{rendered}")?;
        } else {
            writeln!(self.writer(), "{rendered}")?;
        }

        Ok(())
    }

    fn print_stat(&self, script: &EditScript<TextLine>) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", script.stats())?;

        if script.is_approximate() {
            writeln!(self.writer(), "(approximate: size guard exceeded)")?;
        }

        Ok(())
    }
}
