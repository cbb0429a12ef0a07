//! Output plumbing shared by commands
//!
//! - [`PagerWriter`] lets the `minus` pager stand in for stdout
//! - [`ColorMode`] decides whether output is colored
//! - [`OutputFormat`] selects how an edit script is printed

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::str::FromStr;

/// Wrapper that implements `Write` for the minus pager
///
/// Output is buffered in the pager and shown once the command finishes.
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "@@ -1,3 +1,3 @@")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Whether paging applies: stdout is a terminal and `NO_PAGER` is unset
pub fn should_page(no_pager: bool) -> bool {
    !no_pager && std::env::var_os("NO_PAGER").is_none() && io::stdout().is_terminal()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Auto => io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Forces `colored` on or off for the rest of the process
    pub fn apply(&self) {
        colored::control::set_override(self.enabled());
    }
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(anyhow::anyhow!(
                "Invalid color mode: {s} (expected auto, always or never)"
            )),
        }
    }
}

/// How a comparison is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// File headers followed by unified diff hunks
    Unified,
    /// The whole text with `[-deleted-]` and `{+inserted+}` markers
    Inline,
    /// Token counts per operation
    Stat,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unified" | "patch" => Ok(OutputFormat::Unified),
            "inline" => Ok(OutputFormat::Inline),
            "stat" => Ok(OutputFormat::Stat),
            _ => Err(anyhow::anyhow!(
                "Invalid output format: {s} (expected unified, inline or stat)"
            )),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Unified => write!(f, "unified"),
            OutputFormat::Inline => write!(f, "inline"),
            OutputFormat::Stat => write!(f, "stat"),
        }
    }
}
