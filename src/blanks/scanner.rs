use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of consecutive underscores that make up a blank.
pub const MIN_BLANK_LEN: usize = 3;

static BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{3,}").unwrap());

/// One blank inside a question template, borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankMarker<'a> {
    /// Position among the blanks of the text, starting at 0.
    pub ordinal: usize,
    /// Byte offset of the first underscore.
    pub start: usize,
    pub text: &'a str,
}

impl<'a> BlankMarker<'a> {
    /// Byte offset one past the last underscore.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Find every maximal underscore run of length >= 3, left to right.
pub fn scan(text: &str) -> Vec<BlankMarker<'_>> {
    BLANK_RE
        .find_iter(text)
        .enumerate()
        .map(|(ordinal, m)| BlankMarker { ordinal, start: m.start(), text: m.as_str() })
        .collect()
}

pub fn count_blanks(text: &str) -> usize {
    BLANK_RE.find_iter(text).count()
}
