use crate::byte_source::ByteSource;
use crate::cancel::CancelToken;
use crate::config::ReadOptions;
use crate::error::Result;
use filecount_shared_kernel::{CharCount, LineCount, Tally, WordCount};
use std::path::Path;

/// Word/line automaton fed one byte at a time.
///
/// Only space, tab and newline end a word. Reaching the end of the input does
/// not, so `"ab"` scores zero words unless the caller asks for a final flush.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordClassifier {
    in_word: bool,
    chars: CharCount,
    words: WordCount,
    lines: LineCount,
}

impl WordClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn feed(&mut self, byte: u8) {
        self.chars.increment();
        match byte {
            b' ' | b'\t' => self.see_white(),
            b'\n' => {
                self.lines.increment();
                self.see_white();
            }
            _ => self.in_word = true,
        }
    }

    #[inline]
    fn see_white(&mut self) {
        if self.in_word {
            self.words.increment();
        }
        self.in_word = false;
    }

    pub const fn in_word(&self) -> bool {
        self.in_word
    }

    /// Freeze the counts into a [`Tally`] for `path`.
    pub fn finish(mut self, path: &Path, count_trailing_word: bool) -> Tally {
        if count_trailing_word {
            self.see_white();
        }
        Tally::new(
            path,
            self.chars.value(),
            self.words.value(),
            self.lines.value(),
        )
    }
}

/// Score an arbitrary byte stream, stopping at the first error.
pub fn score_bytes<I>(path: &Path, bytes: I, count_trailing_word: bool) -> Result<Tally>
where
    I: IntoIterator<Item = Result<u8>>,
{
    let mut classifier = WordClassifier::new();
    for byte in bytes {
        classifier.feed(byte?);
    }
    Ok(classifier.finish(path, count_trailing_word))
}

/// Score one file from disk.
///
/// # Errors
/// [`EngineError::FileRead`](crate::error::EngineError::FileRead) on open/read
/// failure, [`EngineError::Cancelled`](crate::error::EngineError::Cancelled) if
/// `cancel` was raised while the file was being read.
pub fn score_file(path: &Path, options: &ReadOptions, cancel: &CancelToken) -> Result<Tally> {
    let mut source = ByteSource::open(path, options.mode)?.with_cancel(cancel.clone());
    let tally = score_bytes(path, source.by_ref(), options.count_trailing_word)?;
    tracing::info!(path = %path.display(), reads = source.read_count(), "read count");
    Ok(tally)
}
