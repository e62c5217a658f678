use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::buffer::GrowBuffer;
use crate::cache::MatchCache;
use crate::error::ScanError;
use crate::outcome::SearchOutcome;
use crate::source::{CharSource, StringSource, Utf8Source};

/// Delimiter used until [`Scanner::use_delimiter`] replaces it.
fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE
        .get_or_init(|| Regex::new(r"\s+").expect("could not compile whitespace delimiter"))
}

/// A pull-based tokenizer over a character stream of unknown length.
///
/// Tokens are maximal spans of text between matches of the active delimiter
/// pattern (one-or-more whitespace by default). The scanner buffers input
/// incrementally: a candidate match that touches the edge of the buffered
/// data is treated as provisional, and the buffer is grown and re-searched
/// until the result is definitive or the source is exhausted.
///
/// Extracted tokens are owned copies; the scanner never hands out references
/// into its internal storage.
#[derive(Debug)]
pub struct Scanner<S> {
    buffer: GrowBuffer<S>,
    cache: MatchCache,
    delimiter: Regex,
}

impl Scanner<StringSource> {
    /// Creates a scanner over an in-memory string.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(StringSource::new(text))
    }
}

impl<R: Read> Scanner<Utf8Source<R>> {
    /// Creates a scanner that decodes UTF-8 from a byte reader.
    pub fn from_reader(reader: R) -> Self {
        Self::new(Utf8Source::new(reader))
    }
}

impl Scanner<Utf8Source<File>> {
    /// Creates a scanner over the contents of a file.
    ///
    /// # Errors
    ///
    /// Returns the error from opening the file. Read failures after
    /// construction are recorded instead; see [`Scanner::last_error`].
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::from_reader(File::open(path)?))
    }
}

impl<S: CharSource> Scanner<S> {
    /// Creates a scanner pulling from `source`, splitting on whitespace.
    pub fn new(source: S) -> Self {
        Self {
            buffer: GrowBuffer::new(source),
            cache: MatchCache::default(),
            delimiter: whitespace().clone(),
        }
    }

    /// Replaces the active delimiter, compiling `pattern`.
    ///
    /// Takes effect on the next search; no search is performed here.
    ///
    /// # Errors
    ///
    /// [`ScanError::Pattern`] if `pattern` is not a valid regular expression.
    pub fn use_delimiter(&mut self, pattern: &str) -> Result<&mut Self, ScanError> {
        Ok(self.use_delimiter_regex(Regex::new(pattern)?))
    }

    /// Replaces the active delimiter with a precompiled pattern.
    pub fn use_delimiter_regex(&mut self, pattern: Regex) -> &mut Self {
        self.delimiter = pattern;
        self
    }

    /// Whether another token can be extracted.
    ///
    /// Repeated calls without an intervening [`next_token`](Self::next_token)
    /// or [`skip`](Self::skip) return the same answer and re-use the cached
    /// search.
    pub fn has_next(&mut self) -> bool {
        let delimiter = self.delimiter.clone();
        let outcome = self.find(&delimiter);
        if !outcome.is_found() {
            // A trailing non-delimited remainder still counts as a token.
            self.buffer.has_remaining()
        } else if outcome.start() == 0 {
            // A delimiter leading the window only precedes a token if
            // something follows the match.
            outcome.end() != self.buffer.window().len()
        } else {
            true
        }
    }

    /// Extracts the next token, consuming it and the delimiter after it.
    ///
    /// A delimiter match at the current position is stepped over rather than
    /// producing an empty leading token. Input after the last delimiter still
    /// counts as a token.
    ///
    /// # Errors
    ///
    /// [`ScanError::Exhausted`] if no token remains.
    pub fn next_token(&mut self) -> Result<String, ScanError> {
        let delimiter = self.delimiter.clone();
        let token = match self.find(&delimiter) {
            SearchOutcome::NotFound => {
                if !self.buffer.has_remaining() {
                    return Err(ScanError::Exhausted);
                }
                self.take_remainder()
            }
            SearchOutcome::Found { start, end } if start > 0 => {
                let token = self.buffer.window()[..start].to_owned();
                self.consume(end);
                token
            }
            SearchOutcome::Found { end, .. } if end != self.buffer.window().len() => {
                // Delimiter at the window start: step over it, then find the
                // next occurrence to bound the token.
                self.consume(end);
                match self.find(&delimiter) {
                    SearchOutcome::Found { start, end } => {
                        let token = self.buffer.window()[..start].to_owned();
                        self.consume(end);
                        token
                    }
                    SearchOutcome::NotFound => self.take_remainder(),
                }
            }
            SearchOutcome::Found { .. } => return Err(ScanError::Exhausted),
        };
        self.cache.clear();
        self.buffer.compact();
        Ok(token)
    }

    /// Skips over `pattern`, which must match at the current position.
    ///
    /// # Errors
    ///
    /// [`ScanError::Pattern`] if `pattern` does not compile, or
    /// [`ScanError::Exhausted`] if it does not match at the current position;
    /// in the latter case the position is unchanged.
    pub fn skip(&mut self, pattern: &str) -> Result<&mut Self, ScanError> {
        let compiled = Regex::new(pattern)?;
        self.skip_regex(&compiled)
    }

    /// Skips over a precompiled pattern matching at the current position.
    ///
    /// # Errors
    ///
    /// [`ScanError::Exhausted`] if the pattern does not match at the current
    /// position; the position is unchanged.
    pub fn skip_regex(&mut self, pattern: &Regex) -> Result<&mut Self, ScanError> {
        match self.find(pattern) {
            SearchOutcome::Found { start: 0, end } => {
                self.consume(end);
                self.buffer.compact();
                Ok(self)
            }
            _ => Err(ScanError::Exhausted),
        }
    }

    /// The first read failure encountered, if any.
    ///
    /// A failure degrades the stream to exhausted rather than aborting the
    /// call that hit it, so tokens already buffered remain extractable; check
    /// here once iteration stops.
    pub fn last_error(&self) -> Option<&io::Error> {
        self.buffer.last_error()
    }

    /// Iterates over the remaining tokens.
    pub fn tokens(&mut self) -> Tokens<'_, S> {
        Tokens { scanner: self }
    }

    /// Locates `pattern` in the window, growing the buffer while the result
    /// is provisional.
    ///
    /// A hit whose end touches the window limit could lengthen with more
    /// input, and a miss could become a hit, so neither is trusted until the
    /// source is exhausted. Each successful extension at least doubles the
    /// window, keeping total re-scan work linear in the characters examined.
    fn find(&mut self, pattern: &Regex) -> SearchOutcome {
        if let Some(outcome) = self.cache.lookup(pattern) {
            return outcome;
        }
        let outcome = loop {
            let window = self.buffer.window();
            let hit = pattern.find(window).map(|m| (m.start(), m.end()));
            let provisional = match hit {
                Some((_, end)) => end == window.len(),
                None => true,
            };
            if provisional && self.buffer.extend() {
                // New data invalidates every cached outcome.
                self.cache.clear();
                continue;
            }
            break match hit {
                Some((start, end)) => SearchOutcome::found(start, end),
                None => SearchOutcome::NotFound,
            };
        };
        self.cache.record(pattern, outcome);
        outcome
    }

    /// Advances past `n` window bytes, invalidating cached searches.
    fn consume(&mut self, n: usize) {
        self.buffer.advance(n);
        self.cache.clear();
    }

    fn take_remainder(&mut self) -> String {
        let token = self.buffer.window().to_owned();
        self.consume(token.len());
        token
    }
}

/// Borrowing iterator over a scanner's remaining tokens.
///
/// Returned by [`Scanner::tokens`]. Iteration stops at exhaustion; a read
/// failure also ends iteration and is reported by
/// [`Scanner::last_error`] afterwards.
#[derive(Debug)]
pub struct Tokens<'a, S> {
    scanner: &'a mut Scanner<S>,
}

impl<S: CharSource> Iterator for Tokens<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.scanner.has_next() {
            self.scanner.next_token().ok()
        } else {
            None
        }
    }
}
