//! Cell: The atomic unit of frame display.
//!
//! A cell holds the text for one grid position. Usually that is a single
//! printable character, but escape sequences embedded in the input travel
//! with the character they decorate:
//!
//! ```text
//! input:  ESC[31m *  ESC[0m  ·  .
//!         └────┬───┘ └──┬───┘   │
//! cells:  "ESC[31m*" "ESC[0m "  "."
//! ```
//!
//! Diffing compares whole cells, so a color change on an otherwise equal
//! glyph still counts as a change.

use super::tokenize::{Segmentation, Tokens};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Returns `true` if `c` renders as something on a terminal.
///
/// Not printable: control characters, format characters, line and
/// paragraph separators, space separators other than ASCII space, private
/// use code points and noncharacters.
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    let code = u32::from(c);
    !(c.is_control()
        || is_separator(c)
        || is_format(c)
        || matches!(code, 0xE000..=0xF8FF | 0xF_0000..=0xF_FFFD | 0x10_0000..=0x10_FFFD)
        || matches!(code, 0xFDD0..=0xFDEF)
        || code & 0xFFFE == 0xFFFE)
}

/// Space, line and paragraph separators.
const fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

/// Invisible format characters.
const fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{890}'..='\u{891}'
            | '\u{8e2}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{110cd}'
            | '\u{13430}'..='\u{1343f}'
            | '\u{1bca0}'..='\u{1bca3}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}

/// Returns `true` if any character of `s` is printable.
#[inline]
pub fn contains_printable(s: &str) -> bool {
    s.chars().any(is_printable)
}

/// A single frame cell.
///
/// Cells compare by their exact text, escape sequences included.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    content: String,
}

impl Cell {
    /// Create a cell from its text.
    ///
    /// No tokenizing is done here: the text is taken as one cell as-is.
    #[inline]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Create a cell holding one character.
    #[inline]
    pub fn from_char(c: char) -> Self {
        Self {
            content: c.to_string(),
        }
    }

    /// The cell's raw text, including escape sequences.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length of the cell text in characters.
    ///
    /// This is what the writer compares when deciding how many filler
    /// characters a shrinking cell needs.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Terminal columns the cell occupies, ignoring escape sequences.
    pub fn display_width(&self) -> usize {
        Tokens::new(&self.content, Segmentation::Chars)
            .map(|token| token.visible().width())
            .sum()
    }

    /// Consume the cell and return its text.
    #[inline]
    pub fn into_string(self) -> String {
        self.content
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({:?})", self.content)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<char> for Cell {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<&str> for Cell {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Cell {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Cell {
    fn as_ref(&self) -> &str {
        &self.content
    }
}
