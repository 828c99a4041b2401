//! Writer configuration.

use crate::buffer::{Segmentation, LINE_SEPARATOR};
use crate::terminal::DEFAULT_FILLER;
use std::borrow::Cow;

/// Configuration for a [`FrameWriter`](crate::FrameWriter).
///
/// Width and height are fixed for the writer's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Frame width in cells.
    pub width: usize,
    /// Frame height in rows.
    pub height: usize,
    /// Separator between rows in frame text; also ends each row on the
    /// first draw.
    pub line_separator: Cow<'static, str>,
    /// Zero-width character written to wipe leftovers of a shrunken cell.
    pub filler: char,
    /// How plain text is split into cells.
    pub segmentation: Segmentation,
}

impl WriterConfig {
    /// Configuration for a `width` x `height` frame with default settings.
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            line_separator: Cow::Borrowed(LINE_SEPARATOR),
            filler: DEFAULT_FILLER,
            segmentation: Segmentation::Chars,
        }
    }

    /// Use a different row separator.
    #[must_use]
    pub fn with_line_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// Use a different filler character.
    #[must_use]
    pub fn with_filler(mut self, filler: char) -> Self {
        self.filler = filler;
        self
    }

    /// Use a different segmentation for plain text.
    #[must_use]
    pub fn with_segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation = segmentation;
        self
    }
}
