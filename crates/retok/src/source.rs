use std::io::{self, ErrorKind, Read};

/// Supplies raw characters to a [`Scanner`](crate::Scanner).
///
/// This is the transport seam: the scanner is agnostic to whether characters
/// come from memory, a file, or a socket, as long as the implementation
/// honors the `read_chars` contract. Character decoding above this level is
/// the implementation's responsibility.
pub trait CharSource {
    /// Reads up to `max` characters from the stream, appending them to `dst`.
    ///
    /// Returns the number of characters appended. `Ok(0)` signals end of
    /// stream; an implementation may return fewer than `max` characters, but
    /// must append at least one unless the stream has ended.
    ///
    /// # Errors
    ///
    /// Any underlying I/O failure. The scanner records the first failure,
    /// drops the source, and never calls `read_chars` again.
    fn read_chars(&mut self, dst: &mut String, max: usize) -> io::Result<usize>;
}

/// An in-memory [`CharSource`] over an owned string.
#[derive(Debug)]
pub struct StringSource {
    text: String,
    pos: usize,
}

impl StringSource {
    /// Creates a source that yields the characters of `text` in order.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
        }
    }
}

impl CharSource for StringSource {
    fn read_chars(&mut self, dst: &mut String, max: usize) -> io::Result<usize> {
        let rest = &self.text[self.pos..];
        let mut chars = 0;
        let mut bytes = 0;
        for ch in rest.chars().take(max) {
            chars += 1;
            bytes += ch.len_utf8();
        }
        dst.push_str(&rest[..bytes]);
        self.pos += bytes;
        Ok(chars)
    }
}

/// A [`CharSource`] that incrementally decodes UTF-8 from any [`Read`].
///
/// Reads are sized in bytes, so a multi-byte scalar can be cut off at the end
/// of a read. The undecodable suffix (at most three bytes) is carried over
/// and prepended to the next read rather than reported as an error.
#[derive(Debug)]
pub struct Utf8Source<R> {
    inner: R,
    carry: [u8; 4],
    carry_len: usize,
}

impl<R: Read> Utf8Source<R> {
    /// Wraps a byte reader producing UTF-8 text.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            carry: [0; 4],
            carry_len: 0,
        }
    }
}

impl<R: Read> CharSource for Utf8Source<R> {
    fn read_chars(&mut self, dst: &mut String, max: usize) -> io::Result<usize> {
        debug_assert!(max > 0, "read_chars requires a non-zero request");
        let mut appended = 0;
        // A read may deliver only continuation bytes; keep pulling until at
        // least one whole scalar decodes or the stream ends.
        while appended == 0 {
            let mut raw = Vec::with_capacity(self.carry_len + max);
            raw.extend_from_slice(&self.carry[..self.carry_len]);
            let filled = raw.len();
            raw.resize(filled + max, 0);
            let read = self.inner.read(&mut raw[filled..])?;
            raw.truncate(filled + read);
            if read == 0 {
                if self.carry_len == 0 {
                    return Ok(0);
                }
                return Err(io::Error::new(
                    ErrorKind::InvalidData,
                    "stream ended inside a multi-byte sequence",
                ));
            }
            self.carry_len = 0;
            let (text, rest) = split_valid(&raw)?;
            appended += text.chars().count();
            dst.push_str(text);
            self.carry[..rest.len()].copy_from_slice(rest);
            self.carry_len = rest.len();
        }
        Ok(appended)
    }
}

/// Splits `raw` into its longest valid UTF-8 prefix and an incomplete scalar
/// suffix. A byte sequence that can never become valid is an error.
fn split_valid(raw: &[u8]) -> io::Result<(&str, &[u8])> {
    match std::str::from_utf8(raw) {
        Ok(text) => Ok((text, &[][..])),
        Err(err) if err.error_len().is_none() => {
            let (head, tail) = raw.split_at(err.valid_up_to());
            let text = std::str::from_utf8(head).map_err(|_| invalid_utf8())?;
            Ok((text, tail))
        }
        Err(_) => Err(invalid_utf8()),
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(ErrorKind::InvalidData, "source is not valid UTF-8")
}
