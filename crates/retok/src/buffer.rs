use std::io;

use tracing::warn;

use crate::source::CharSource;

/// Minimum number of characters requested from the source per extension.
pub(crate) const BASE_CAPACITY: usize = 1024;

/// Contiguous character storage with a read cursor and on-demand growth.
///
/// The unconsumed window is `buf[pos..]`. The buffer owns the source handle:
/// once the stream ends or a read fails the handle is dropped, which also
/// closes it, and every later extension attempt reports exhaustion.
#[derive(Debug)]
pub(crate) struct GrowBuffer<S> {
    buf: String,
    pos: usize,
    source: Option<S>,
    last_error: Option<io::Error>,
}

impl<S: CharSource> GrowBuffer<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            buf: String::new(),
            pos: 0,
            source: Some(source),
            last_error: None,
        }
    }

    /// The unconsumed, currently available characters.
    pub(crate) fn window(&self) -> &str {
        &self.buf[self.pos..]
    }

    pub(crate) fn has_remaining(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// Pulls more characters from the source, at least doubling the window.
    ///
    /// Returns whether new data was appended. The consumed prefix is dropped
    /// first, so after a successful extension `pos` is zero and the window
    /// holds old-then-new data in order. End of stream and read failures both
    /// mark the buffer exhausted; a failure is additionally recorded for
    /// [`last_error`](Self::last_error) and logged.
    pub(crate) fn extend(&mut self) -> bool {
        let Some(source) = self.source.as_mut() else {
            return false;
        };
        let want = usize::max(self.buf.len() - self.pos, BASE_CAPACITY);
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
        self.buf.reserve(want);
        match source.read_chars(&mut self.buf, want) {
            Ok(0) => {
                self.source = None;
                false
            }
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "read from source failed; treating stream as exhausted");
                self.last_error = Some(err);
                self.source = None;
                false
            }
        }
    }

    /// Moves the cursor forward by `n` bytes of the window.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.buf.len(), "advance beyond the window");
        self.pos += n;
    }

    /// Reclaims storage once the window is fully drained.
    ///
    /// A partially consumed window is left alone so that mid-token data is
    /// never recopied; `extend` drops the consumed prefix on the next growth.
    pub(crate) fn compact(&mut self) {
        if self.pos >= self.buf.len() {
            self.buf.clear();
            self.pos = 0;
        }
    }

    /// Whether the source will yield no more data.
    pub(crate) fn exhausted(&self) -> bool {
        self.source.is_none()
    }

    pub(crate) fn last_error(&self) -> Option<&io::Error> {
        self.last_error.as_ref()
    }
}
