// crates/shared-kernel/src/value_objects/tally.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::counts::{CharCount, LineCount, WordCount};

/// Ratios derived from a finished [`Tally`].
///
/// A ratio is `None` when its divisor was zero and the run chose to skip it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratios {
    pub chars_per_word: Option<usize>,
    pub chars_per_line: Option<usize>,
}

/// Character/word/line counts for one file.
///
/// A `Tally` is never mutated after construction. Derived values are attached by
/// [`Tally::with_ratios`], which consumes the tally and returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    path: PathBuf,
    chars: CharCount,
    words: WordCount,
    lines: LineCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ratios: Option<Ratios>,
}

impl Tally {
    pub fn new(path: impl Into<PathBuf>, chars: usize, words: usize, lines: usize) -> Self {
        Self {
            path: path.into(),
            chars: CharCount::new(chars),
            words: WordCount::new(words),
            lines: LineCount::new(lines),
            ratios: None,
        }
    }

    /// An all-zero tally, as produced for an empty file.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::new(path, 0, 0, 0)
    }

    #[must_use]
    pub fn with_ratios(self, ratios: Ratios) -> Self {
        Self {
            ratios: Some(ratios),
            ..self
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn chars(&self) -> CharCount {
        self.chars
    }

    pub const fn words(&self) -> WordCount {
        self.words
    }

    pub const fn lines(&self) -> LineCount {
        self.lines
    }

    pub const fn ratios(&self) -> Option<Ratios> {
        self.ratios
    }
}

/// Column sums over a set of tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub files: usize,
    pub chars: CharCount,
    pub words: WordCount,
    pub lines: LineCount,
}

impl<'a> FromIterator<&'a Tally> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a Tally>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, t| {
            acc.files += 1;
            acc.chars += t.chars;
            acc.words += t.words;
            acc.lines += t.lines;
            acc
        })
    }
}
