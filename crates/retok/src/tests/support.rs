//! Test sources with controllable delivery and failure behavior.

use std::io;

use crate::source::CharSource;

/// Delivers at most `chunk` characters per read, regardless of how many are
/// requested. Used to force boundary-touching matches at arbitrary offsets.
pub(crate) struct ChunkSource {
    text: String,
    pos: usize,
    chunk: usize,
}

impl ChunkSource {
    pub(crate) fn new(text: impl Into<String>, chunk: usize) -> Self {
        assert!(chunk > 0, "chunk size must be non-zero");
        Self {
            text: text.into(),
            pos: 0,
            chunk,
        }
    }
}

impl CharSource for ChunkSource {
    fn read_chars(&mut self, dst: &mut String, max: usize) -> io::Result<usize> {
        let budget = self.chunk.min(max);
        let rest = &self.text[self.pos..];
        let mut chars = 0;
        let mut bytes = 0;
        for ch in rest.chars().take(budget) {
            chars += 1;
            bytes += ch.len_utf8();
        }
        dst.push_str(&rest[..bytes]);
        self.pos += bytes;
        Ok(chars)
    }
}

/// Yields its text on the first read, then fails every read after that.
pub(crate) struct FailingSource {
    text: Option<String>,
}

impl FailingSource {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Fails on the very first read, before any data is delivered.
    pub(crate) fn immediate() -> Self {
        Self { text: None }
    }
}

impl CharSource for FailingSource {
    fn read_chars(&mut self, dst: &mut String, _max: usize) -> io::Result<usize> {
        match self.text.take() {
            Some(text) => {
                let chars = text.chars().count();
                dst.push_str(&text);
                Ok(chars)
            }
            None => Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "simulated read failure",
            )),
        }
    }
}
