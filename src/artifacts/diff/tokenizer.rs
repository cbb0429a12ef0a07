use std::fmt::{self, Display};
use std::str::FromStr;

pub const GRANULARITY_ALIASES: phf::Map<&'static str, Granularity> = phf::phf_map! {
    "line" => Granularity::Line,
    "lines" => Granularity::Line,
    "word" => Granularity::Word,
    "words" => Granularity::Word,
    "char" => Granularity::Char,
    "chars" => Granularity::Char,
    "character" => Granularity::Char,
};

/// Size of the comparison unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    #[default]
    Line,
    Word,
    Char,
}

impl Granularity {
    /// Separator that rebuilds the text from its tokens
    pub fn joiner(&self) -> &'static str {
        match self {
            Granularity::Line => "\n",
            Granularity::Word | Granularity::Char => "",
        }
    }

    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        GRANULARITY_ALIASES
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| {
                anyhow::anyhow!("Invalid granularity: {name} (expected line, word or char)")
            })
    }
}

impl FromStr for Granularity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Line => write!(f, "line"),
            Granularity::Word => write!(f, "word"),
            Granularity::Char => write!(f, "char"),
        }
    }
}

/// Splits `text` into comparison tokens borrowed from the input
///
/// - `Line`: splits on `\n`; empty lines are kept, and a trailing newline
///   yields a final empty token. `\r\n` must be normalized by the caller.
/// - `Word`: alternating runs of whitespace and non-whitespace, so joining
///   the tokens gives back the input. No token is empty.
/// - `Char`: one token per Unicode scalar value.
///
/// An empty input gives an empty sequence at every granularity.
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    match granularity {
        Granularity::Line => text.split('\n').collect(),
        Granularity::Word => split_words(text),
        Granularity::Char => text
            .char_indices()
            .map(|(start, c)| &text[start..start + c.len_utf8()])
            .collect(),
    }
}

fn split_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (i, c) in text.char_indices() {
        let is_whitespace = c.is_whitespace();
        match in_whitespace {
            Some(previous) if previous != is_whitespace => {
                tokens.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        in_whitespace = Some(is_whitespace);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}
