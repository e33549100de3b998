//! Output sink used while rendering a statement

use std::fmt::Write;

use crate::Result;

/// Wraps a caller-supplied character sink and latches once anything
/// non-empty has been written through it.
///
/// The latch only tracks writes made through this wrapper, so a sink that
/// already holds text when rendering starts still counts as empty.
pub struct OutputSink<'a, W: Write + ?Sized> {
    out: &'a mut W,
    empty: bool,
}

impl<'a, W: Write + ?Sized> OutputSink<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out, empty: true }
    }

    /// Append text. A write failure is returned as [`crate::Error::Sink`].
    pub fn append(&mut self, s: &str) -> Result<&mut Self> {
        if self.empty && !s.is_empty() {
            self.empty = false;
        }
        self.out.write_str(s)?;
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }
}
