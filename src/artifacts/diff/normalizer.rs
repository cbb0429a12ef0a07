use bitflags::bitflags;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub const HORIZONTAL_WHITESPACE_REGEX: &str = r"[ \t]+";

static HORIZONTAL_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HORIZONTAL_WHITESPACE_REGEX).expect("horizontal whitespace regex is valid")
});

bitflags! {
    /// Folding rules applied to a buffer before tokenization
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Normalization: u8 {
        const IGNORE_CASE = 0b01;
        const IGNORE_WHITESPACE = 0b10;
    }
}

impl Normalization {
    pub fn from_flags(ignore_case: bool, ignore_whitespace: bool) -> Self {
        let mut normalization = Self::empty();
        normalization.set(Self::IGNORE_CASE, ignore_case);
        normalization.set(Self::IGNORE_WHITESPACE, ignore_whitespace);
        normalization
    }
}

/// Folds insignificant differences out of `text`
///
/// - `IGNORE_CASE` lowercases the whole buffer. Lowercasing is not
///   locale-aware, so scripts with context-dependent casing rules may still
///   compare unequal.
/// - `IGNORE_WHITESPACE` collapses every run of spaces and tabs into a single
///   space, then trims the buffer as a whole. Individual lines are not trimmed.
///
/// The text is borrowed untouched when no rule applies.
pub fn normalize(text: &str, options: Normalization) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(text);

    if options.contains(Normalization::IGNORE_CASE) {
        text = Cow::Owned(text.to_lowercase());
    }

    if options.contains(Normalization::IGNORE_WHITESPACE) {
        let folded = {
            let collapsed = HORIZONTAL_WHITESPACE.replace_all(&text, " ");
            let trimmed = collapsed.trim();
            (trimmed != text.as_ref()).then(|| trimmed.to_string())
        };

        if let Some(folded) = folded {
            text = Cow::Owned(folded);
        }
    }

    text
}
