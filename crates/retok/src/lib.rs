//! A streaming, regex-delimited tokenizer.
//!
//! [`Scanner`] pulls characters on demand from a [`CharSource`] and splits
//! them into tokens separated by a configurable regular-expression delimiter
//! (one-or-more whitespace by default). Input of unknown, unbounded length is
//! supported: the scanner buffers only as much of the stream as the current
//! search needs, growing the buffer whenever a candidate match touches the
//! edge of the data read so far.
//!
//! ```
//! use retok::Scanner;
//!
//! let mut scanner = Scanner::from_text("Hello World  Goodbye");
//! assert_eq!(scanner.next_token().unwrap(), "Hello");
//! assert_eq!(scanner.next_token().unwrap(), "World");
//! assert_eq!(scanner.next_token().unwrap(), "Goodbye");
//! assert!(!scanner.has_next());
//! ```

mod buffer;
mod cache;
mod error;
mod outcome;
mod scanner;
mod source;

#[cfg(test)]
mod tests;

pub use error::ScanError;
pub use scanner::{Scanner, Tokens};
pub use source::{CharSource, StringSource, Utf8Source};
