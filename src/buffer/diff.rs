//! Diffing Engine: find changed rows and emit the redraw program.
//!
//! The strategy is deliberately coarse. For each row only the rightmost
//! differing column is recorded, and the redraw rewrites the whole prefix
//! `0..=boundary`. Columns right of the boundary already show the right
//! content and are left alone.
//!
//! Two programs are produced:
//! 1. [`render_full`] for the first frame: every row is written and ended
//!    with a line break, which also reserves the lines on screen
//! 2. [`render_diff`] for every later frame: the cursor walks back up to the
//!    top of the frame and each changed row prefix is rewritten in place

use super::{Cell, Frame};
use crate::terminal::OutputBuffer;

/// Per-row change boundaries between two frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameDiff {
    /// Rightmost differing column for each row; `None` if the row is unchanged.
    boundaries: Vec<Option<usize>>,
}

impl FrameDiff {
    /// Compute the diff between two frames.
    ///
    /// Both frames must have the same shape.
    pub fn compute(previous: &Frame, current: &Frame) -> Self {
        debug_assert_eq!(previous.height(), current.height(), "frame heights must match");

        let boundaries = previous
            .rows()
            .iter()
            .zip(current.rows())
            .map(|(old, new)| {
                debug_assert_eq!(old.len(), new.len(), "row widths must match");
                old.iter().zip(new).rposition(|(a, b)| a != b)
            })
            .collect();

        let diff = Self { boundaries };
        tracing::trace!(changed_rows = diff.changed_rows(), "diff computed");
        diff
    }

    /// Change boundary of row `y`.
    ///
    /// `None` if the row is unchanged or out of range.
    #[inline]
    pub fn boundary(&self, y: usize) -> Option<usize> {
        self.boundaries.get(y).copied().flatten()
    }

    /// Boundaries for every row, top to bottom.
    #[inline]
    pub fn boundaries(&self) -> &[Option<usize>] {
        &self.boundaries
    }

    /// Number of rows that need redrawing.
    pub fn changed_rows(&self) -> usize {
        self.boundaries.iter().flatten().count()
    }

    /// Check if no row changed.
    pub fn is_empty(&self) -> bool {
        self.boundaries.iter().all(Option::is_none)
    }
}

/// Statistics about one emitted program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Rows whose content was written.
    pub rows_redrawn: usize,
    /// Cells written.
    pub cells_written: usize,
    /// Filler characters written to cover shrunken cells.
    pub fillers: usize,
    /// Total bytes in the program.
    pub bytes: usize,
}

/// Emit the program for the first frame.
///
/// Each row is `ESC [ G`, its cells, then `line_terminator`. A newline is
/// used rather than a cursor-down move because there may be no line below
/// the cursor yet.
pub fn render_full(frame: &Frame, output: &mut OutputBuffer, line_terminator: &str) -> RenderStats {
    let start = output.len();
    let mut stats = RenderStats::default();

    for row in frame.rows() {
        output.cursor_column_reset();
        for cell in row {
            output.write_str(cell.as_str());
        }
        output.write_str(line_terminator);
        stats.rows_redrawn += 1;
        stats.cells_written += row.len();
    }

    stats.bytes = output.len() - start;
    stats
}

/// Emit the program that turns `previous` into `current` on screen.
///
/// Assumes the cursor sits on the line just below the frame, where both
/// programs leave it. The program moves up `height` lines, then for each row
/// resets to column 1, rewrites `0..=boundary` if the row changed, and moves
/// down one line.
pub fn render_diff(
    previous: &Frame,
    current: &Frame,
    diff: &FrameDiff,
    output: &mut OutputBuffer,
    filler: char,
) -> RenderStats {
    let start = output.len();
    let mut stats = RenderStats::default();

    output.cursor_up(current.height());

    for (y, (old, new)) in previous.rows().iter().zip(current.rows()).enumerate() {
        output.cursor_column_reset();

        if let Some(boundary) = diff.boundary(y) {
            for (old_cell, new_cell) in old.iter().zip(new).take(boundary + 1) {
                stats.fillers += emit_cell(output, old_cell, new_cell, filler);
                stats.cells_written += 1;
            }
            stats.rows_redrawn += 1;
        }

        output.cursor_down();
    }

    stats.bytes = output.len() - start;
    stats
}

/// Emit one cell, preceded by a filler for every character it lost.
///
/// Returns the number of fillers written. A cell that grew or kept its
/// length needs none.
#[inline]
fn emit_cell(output: &mut OutputBuffer, old: &Cell, new: &Cell, filler: char) -> usize {
    let shrink = old.char_len().saturating_sub(new.char_len());
    output.write_repeated(filler, shrink);
    output.write_str(new.as_str());
    shrink
}
