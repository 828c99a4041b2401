//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use super::{CURSOR_COLUMN_RESET, CURSOR_DOWN, CURSOR_UP};
use std::io::Write;

/// Pre-allocated buffer for building the redraw program of one frame.
///
/// All output is accumulated here, then flushed in a single `write()` call
/// to keep the terminal from showing a half-drawn frame.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical frame (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write `count` copies of `c`.
    pub fn write_repeated(&mut self, c: char, count: usize) {
        let mut encoded = [0u8; 4];
        let bytes = c.encode_utf8(&mut encoded).as_bytes();
        for _ in 0..count {
            self.data.extend_from_slice(bytes);
        }
    }

    /// Move cursor to column 1.
    #[inline]
    pub fn cursor_column_reset(&mut self) {
        self.write_str(CURSOR_COLUMN_RESET);
    }

    /// Move cursor up `lines` lines, one sequence per line.
    #[inline]
    pub fn cursor_up(&mut self, lines: usize) {
        for _ in 0..lines {
            self.write_str(CURSOR_UP);
        }
    }

    /// Move cursor down one line.
    #[inline]
    pub fn cursor_down(&mut self) {
        self.write_str(CURSOR_DOWN);
    }

    /// Write all bytes to `writer`, then flush it.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_sequences() {
        let mut out = OutputBuffer::new();
        out.cursor_up(2);
        out.cursor_column_reset();
        out.cursor_down();
        assert_eq!(out.as_bytes(), b"\x1b[A\x1b[A\x1b[G\x1b[B");
    }

    #[test]
    fn test_write_repeated() {
        let mut out = OutputBuffer::new();
        out.write_repeated('\u{200b}', 2);
        out.write_repeated('x', 0);
        assert_eq!(out.as_bytes(), "\u{200b}\u{200b}".as_bytes());
    }

    #[test]
    fn test_clear_and_flush() {
        let mut out = OutputBuffer::with_capacity(16);
        out.write_str("abc");
        assert_eq!(out.len(), 3);

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"abc");

        out.clear();
        assert!(out.is_empty());
    }
}
