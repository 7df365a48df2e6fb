use crate::cancel::CancelToken;
use crate::error::{EngineError, Result};
use crate::options::ReadMode;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Lazy, in-order byte stream over one reader.
///
/// Iteration ends after the last byte; a read failure is yielded once as
/// `Some(Err(..))` and the stream is finished afterwards.
pub struct ByteSource<R> {
    path: PathBuf,
    reader: R,
    mode: ReadMode,
    buf: Vec<u8>,
    pos: usize,
    len: usize,
    reads: usize,
    finished: bool,
    cancel: Option<CancelToken>,
}

impl ByteSource<File> {
    /// Open `path` for reading.
    ///
    /// # Errors
    /// Returns [`EngineError::FileRead`] if the file cannot be opened.
    pub fn open(path: &Path, mode: ReadMode) -> Result<Self> {
        let file = File::open(path).map_err(|e| EngineError::file_read(path, e))?;
        Ok(Self::new(path, file, mode))
    }
}

impl<R: Read> ByteSource<R> {
    pub fn new(path: impl Into<PathBuf>, reader: R, mode: ReadMode) -> Self {
        let buf = match mode {
            ReadMode::Chunked(size) => vec![0; size],
            ReadMode::Whole => Vec::new(),
        };
        Self {
            path: path.into(),
            reader,
            mode,
            buf,
            pos: 0,
            len: 0,
            reads: 0,
            finished: false,
            cancel: None,
        }
    }

    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Number of read calls that returned data so far.
    pub const fn read_count(&self) -> usize {
        self.reads
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the next block into `buf`. Returns `false` at end of input.
    fn refill(&mut self) -> Result<bool> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(EngineError::Cancelled {
                path: self.path.clone(),
            });
        }

        self.pos = 0;
        self.len = match self.mode {
            ReadMode::Whole if self.reads > 0 => 0,
            ReadMode::Whole => {
                self.buf.clear();
                self.reader
                    .read_to_end(&mut self.buf)
                    .map_err(|e| EngineError::file_read(&self.path, e))?
            }
            ReadMode::Chunked(_) => loop {
                match self.reader.read(&mut self.buf) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == ErrorKind::Interrupted => {}
                    Err(e) => return Err(EngineError::file_read(&self.path, e)),
                }
            },
        };

        if self.len == 0 {
            return Ok(false);
        }
        self.reads += 1;
        Ok(true)
    }
}

impl<R: Read> Iterator for ByteSource<R> {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.len {
            if self.finished {
                return None;
            }
            match self.refill() {
                Ok(true) => {}
                Ok(false) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Some(Ok(byte))
    }
}
