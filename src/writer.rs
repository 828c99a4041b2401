//! Frame writer: owns the sink and the previous/current frame pair.
//!
//! Every call to [`FrameWriter::write_frame`] validates the incoming frame,
//! commits it as the current frame, builds the redraw program in an
//! [`OutputBuffer`] and hands it to the sink in one write followed by a
//! flush.

use crate::buffer::diff::{render_diff, render_full};
use crate::buffer::{Frame, FrameDiff, RenderStats};
use crate::config::WriterConfig;
use crate::error::{Error, Result};
use crate::terminal::{OutputBuffer, CURSOR_COLUMN_RESET};
use std::borrow::Cow;
use std::io::{self, Stdout, Write};

/// Input accepted by [`FrameWriter::write_frame`].
#[derive(Debug, Clone)]
pub enum FrameSource<'a> {
    /// Frame text, tokenized with the writer's settings.
    Text(&'a str),
    /// A borrowed frame; cloned once it passes the size check.
    Borrowed(&'a Frame),
    /// An owned frame; moved into the writer.
    Owned(Frame),
}

impl<'a> From<&'a str> for FrameSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for FrameSource<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a Frame> for FrameSource<'a> {
    fn from(frame: &'a Frame) -> Self {
        Self::Borrowed(frame)
    }
}

impl From<Frame> for FrameSource<'_> {
    fn from(frame: Frame) -> Self {
        Self::Owned(frame)
    }
}

/// Whether the writer has drawn anything yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// No frame accepted yet; the next write draws everything.
    Empty,
    /// A frame is on screen; the next write redraws changes only.
    Primed,
}

/// Writes frames to a sink, redrawing only what changed.
pub struct FrameWriter<W: Write> {
    /// Configuration.
    config: WriterConfig,
    /// Output sink.
    sink: W,
    /// Reused program buffer.
    output: OutputBuffer,
    /// Frame before the current one.
    previous: Option<Frame>,
    /// Frame on screen.
    current: Option<Frame>,
}

impl FrameWriter<Stdout> {
    /// Create a writer for standard output.
    pub fn stdout(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, io::stdout())
    }
}

impl<W: Write> FrameWriter<W> {
    /// Create a writer with default settings.
    pub fn new(width: usize, height: usize, sink: W) -> Result<Self> {
        Self::with_config(WriterConfig::new(width, height), sink)
    }

    /// Create a writer with a custom configuration.
    ///
    /// Fails with [`Error::InvalidDimensions`] if width or height is zero.
    pub fn with_config(config: WriterConfig, sink: W) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(Error::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        Ok(Self {
            output: OutputBuffer::with_capacity(initial_capacity(&config)),
            config,
            sink,
            previous: None,
            current: None,
        })
    }

    /// Frame width in cells.
    #[inline]
    pub const fn width(&self) -> usize {
        self.config.width
    }

    /// Frame height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.config.height
    }

    /// The writer's configuration.
    #[inline]
    pub const fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Current state.
    pub const fn state(&self) -> WriterState {
        if self.current.is_some() {
            WriterState::Primed
        } else {
            WriterState::Empty
        }
    }

    /// The last accepted frame.
    #[inline]
    pub const fn current_frame(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    /// The frame accepted before the current one.
    #[inline]
    pub const fn previous_frame(&self) -> Option<&Frame> {
        self.previous.as_ref()
    }

    /// Reference to the sink.
    #[inline]
    pub const fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutable reference to the sink.
    ///
    /// Writing to the sink directly desynchronizes the cursor from the
    /// frame region.
    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Parse frame text with this writer's separator and segmentation.
    pub fn prepare_frame(&self, source: &str) -> Frame {
        Frame::parse(source, &self.config.line_separator, self.config.segmentation)
    }

    /// Write a frame.
    ///
    /// The first frame is drawn in full; later frames redraw only the
    /// changed prefix of each row. A frame of the wrong size is rejected
    /// with [`Error::SizeMismatch`] before anything is written or retained.
    /// Sink errors are returned as [`Error::Io`] and are not retried; the
    /// frame has already been committed by then.
    pub fn write_frame<'a>(&mut self, source: impl Into<FrameSource<'a>>) -> Result<RenderStats> {
        let span = tracing::debug_span!(
            "write_frame",
            width = self.config.width,
            height = self.config.height
        );
        let _guard = span.enter();

        let frame: Cow<'a, Frame> = match source.into() {
            FrameSource::Text(text) => Cow::Owned(self.prepare_frame(text)),
            FrameSource::Borrowed(frame) => Cow::Borrowed(frame),
            FrameSource::Owned(frame) => Cow::Owned(frame),
        };

        if let Err(err) = frame.check_size(self.config.width, self.config.height) {
            tracing::warn!(%err, "frame rejected");
            return Err(err);
        }
        let frame = frame.into_owned();

        self.output.clear();
        let stats = match self.current.as_ref() {
            None => {
                tracing::debug!("first frame, drawing in full");
                render_full(&frame, &mut self.output, &self.config.line_separator)
            }
            Some(previous) => {
                let diff = FrameDiff::compute(previous, &frame);
                render_diff(previous, &frame, &diff, &mut self.output, self.config.filler)
            }
        };
        self.previous = self.current.replace(frame);

        tracing::trace!(
            rows = stats.rows_redrawn,
            cells = stats.cells_written,
            fillers = stats.fillers,
            bytes = stats.bytes,
            "frame emitted"
        );

        self.output.flush_to(&mut self.sink)?;
        Ok(stats)
    }
}

/// Upper bound on the program buffer reserved up front.
const MAX_INITIAL_CAPACITY: usize = 64 * 1024;

/// Program buffer size for a full draw of plain cells, capped.
fn initial_capacity(config: &WriterConfig) -> usize {
    config
        .width
        .saturating_add(CURSOR_COLUMN_RESET.len() + config.line_separator.len())
        .saturating_mul(config.height)
        .min(MAX_INITIAL_CAPACITY)
}

impl<W: Write> std::fmt::Debug for FrameWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameWriter")
            .field("config", &self.config)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
