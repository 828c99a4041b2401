//! Frame: A grid of cells representing one renderable snapshot.
//!
//! Rows are stored separately rather than in one flat vector: a frame
//! built from text may be ragged until it is checked against a writer's
//! size, and the check has to be able to report which row is off.

use super::cell::Cell;
use super::tokenize::{tokenize_with, Segmentation};
use crate::error::{Error, Mismatch, Result};

/// One row of cells.
pub type Row = Vec<Cell>;

/// Platform line terminator, used to split frame text and to end rows on
/// the first draw.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Platform line terminator, used to split frame text and to end rows on
/// the first draw.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// A grid of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    rows: Vec<Row>,
}

impl Frame {
    /// Create a frame from rows of cells.
    pub const fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parse text into a frame.
    ///
    /// `source` is split on `separator` and each line is tokenized into
    /// cells. An empty source yields a single empty row.
    pub fn parse(source: &str, separator: &str, segmentation: Segmentation) -> Self {
        let rows = source
            .split(separator)
            .map(|line| tokenize_with(line, segmentation))
            .collect();
        Self { rows }
    }

    /// Parse text using the platform line separator and one cell per `char`.
    pub fn from_text(source: &str) -> Self {
        Self::parse(source, LINE_SEPARATOR, Segmentation::Chars)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell count of the first row, or 0 for a frame without rows.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// All rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row at `y`.
    #[inline]
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// The cell at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y)?.get(x)
    }

    /// Mutable access to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.rows.get_mut(y)?.get_mut(x)
    }

    /// Replace the cell at (x, y).
    ///
    /// Returns `false` if the position is outside the frame.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the frame has exactly `height` rows of `width`
    /// cells each.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.check_size(width, height).is_ok()
    }

    /// Check the frame against a `width` x `height` grid.
    ///
    /// Nothing is clipped or padded: any difference is an error naming the
    /// first mismatch.
    pub fn check_size(&self, width: usize, height: usize) -> Result<()> {
        let mismatch = if self.rows.len() == height {
            self.rows
                .iter()
                .position(|row| row.len() != width)
                .map(|row| Mismatch::RowWidth {
                    row,
                    actual: self.rows[row].len(),
                })
        } else {
            Some(Mismatch::RowCount {
                actual: self.rows.len(),
            })
        };

        match mismatch {
            None => Ok(()),
            Some(mismatch) => Err(Error::SizeMismatch {
                width,
                height,
                mismatch,
            }),
        }
    }

    /// Join the frame back into text, rows separated by `separator`.
    pub fn to_text(&self, separator: &str) -> String {
        let mut text = String::new();
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                text.push_str(separator);
            }
            for cell in row {
                text.push_str(cell.as_str());
            }
        }
        text
    }

    /// Consume the frame and return its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl From<Vec<Row>> for Frame {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for Frame {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let frame = Frame::parse("ab\ncd\nef", "\n", Segmentation::Chars);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.get(1, 2).map(Cell::as_str), Some("f"));
        assert!(frame.get(2, 0).is_none());
    }

    #[test]
    fn test_parse_custom_separator() {
        let frame = Frame::parse("ab|cd", "|", Segmentation::Chars);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.to_text("|"), "ab|cd");
    }

    #[test]
    fn test_parse_empty_source() {
        let frame = Frame::parse("", "\n", Segmentation::Chars);
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.width(), 0);
        assert!(!frame.fits(1, 1));
    }

    #[test]
    fn test_check_size_ok() {
        let frame = Frame::parse("   \n . \n   ", "\n", Segmentation::Chars);
        assert!(frame.fits(3, 3));
        assert!(frame.check_size(3, 3).is_ok());
    }

    #[test]
    fn test_check_size_row_count() {
        let frame = Frame::parse("   \n   ", "\n", Segmentation::Chars);
        match frame.check_size(3, 3) {
            Err(Error::SizeMismatch { mismatch, .. }) => {
                assert_eq!(mismatch, Mismatch::RowCount { actual: 2 });
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_check_size_row_width() {
        let frame = Frame::parse("   \n    \n  ", "\n", Segmentation::Chars);
        match frame.check_size(3, 3) {
            Err(Error::SizeMismatch { mismatch, .. }) => {
                assert_eq!(mismatch, Mismatch::RowWidth { row: 1, actual: 4 });
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_escapes_do_not_count_toward_width() {
        let frame = Frame::parse("\x1b[31m*\x1b[0m..", "\n", Segmentation::Chars);
        assert!(frame.fits(3, 1));
    }

    #[test]
    fn test_set_and_bounds() {
        let mut frame = Frame::from_text("..");
        assert!(frame.set(1, 0, Cell::from('*')));
        assert!(!frame.set(2, 0, Cell::from('*')));
        assert_eq!(frame.to_text("\n"), ".*");
    }

    #[test]
    fn test_from_rows() {
        let frame: Frame = vec![vec![Cell::from('a')], vec![Cell::from('b')]]
            .into_iter()
            .collect();
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.row(1), Some(&[Cell::from('b')][..]));
        assert_eq!(frame.into_rows().len(), 2);
    }
}
