//! # ansiwriter
//!
//! Write fixed-size text frames to a terminal, redrawing only what changed.
//!
//! ansiwriter is meant for terminal animations such as ASCII-art players:
//! a bounded region is updated frame after frame with plain ANSI cursor
//! movement, no screen clears and no alternate buffer.
//!
//! ## Core Concepts
//!
//! - **Cells**: Frame text is tokenized into grid cells; escape sequences
//!   travel with the character they decorate
//! - **Row boundaries**: Each row's rightmost change decides how much of it
//!   is rewritten
//! - **Single write**: The redraw program for a frame is built in memory and
//!   written to the sink in one call, then flushed
//!
//! ## Example
//!
//! ```rust
//! use ansiwriter::FrameWriter;
//!
//! let mut writer = FrameWriter::new(3, 1, Vec::new()).unwrap();
//! writer.write_frame(" . ").unwrap();
//! writer.write_frame(" * ").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod terminal;
pub mod writer;

// Re-exports for convenience
pub use buffer::{tokenize, Cell, Frame, FrameDiff, RenderStats, Row, Segmentation};
pub use config::WriterConfig;
pub use error::{Error, Mismatch, Result};
pub use writer::{FrameSource, FrameWriter, WriterState};
