use anyhow::Context;
use chrono::{DateTime, Local};
use derive_new::new;
use std::path::Path;
use tokio::io::AsyncReadExt;

pub const NULL_PATH: &str = "/dev/null";
pub const STDIN_PATH: &str = "-";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// One side of a comparison: a labelled text buffer
///
/// Line endings are normalized to `\n` on load.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffSource {
    label: String,
    content: String,
    modified: Option<DateTime<Local>>,
}

impl DiffSource {
    pub fn from_text(label: &str, content: &str) -> Self {
        Self::new(label.to_string(), normalize_line_endings(content), None)
    }

    /// Reads a file; a missing file is an empty `/dev/null` source when
    /// `absent_as_empty` is set
    ///
    /// Only a path known not to exist counts as missing. Any other error while
    /// probing the path surfaces from the read.
    pub async fn from_file(path: &Path, absent_as_empty: bool) -> anyhow::Result<Self> {
        if absent_as_empty && matches!(tokio::fs::try_exists(path).await, Ok(false)) {
            return Ok(Self::from_nothing());
        }

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        let modified = tokio::fs::metadata(path)
            .await
            .and_then(|metadata| metadata.modified())
            .ok()
            .map(DateTime::<Local>::from);

        let content = decode(&bytes).with_context(|| format!("cannot diff {}", path.display()))?;

        Ok(Self::new(path.display().to_string(), content, modified))
    }

    pub async fn from_stdin() -> anyhow::Result<Self> {
        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .context("failed to read standard input")?;

        let content = decode(&bytes).context("cannot diff standard input")?;

        Ok(Self::new(STDIN_PATH.to_string(), content, None))
    }

    pub fn from_nothing() -> Self {
        Self::new(NULL_PATH.to_string(), String::new(), None)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn modified(&self) -> Option<&DateTime<Local>> {
        self.modified.as_ref()
    }

    /// Unified diff file header (`--- label\tmtime`) without the marker
    pub fn header(&self) -> String {
        match &self.modified {
            Some(modified) => format!("{}\t{}", self.label, modified.format(TIMESTAMP_FORMAT)),
            None => self.label.clone(),
        }
    }
}

fn decode(bytes: &[u8]) -> anyhow::Result<String> {
    if bytes.contains(&0) {
        anyhow::bail!("binary content is not supported");
    }

    let text = std::str::from_utf8(bytes).context("content is not valid UTF-8")?;
    Ok(normalize_line_endings(text))
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}
