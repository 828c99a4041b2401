//! Buffer module: Core data structures for incremental frame rendering.
//!
//! This module contains:
//! - [`Cell`]: The content of one grid position, escape sequences included
//! - [`tokenize`]: Splitting raw text into cells
//! - [`Frame`]: A grid of cells representing one snapshot
//! - [`diff`]: Change boundaries and the ANSI redraw program

mod cell;
pub mod diff;
mod frame;
pub mod tokenize;

pub use cell::{contains_printable, is_printable, Cell};
pub use diff::{FrameDiff, RenderStats};
pub use frame::{Frame, Row, LINE_SEPARATOR};
pub use tokenize::{tokenize, tokenize_with, Cells, Segmentation};
