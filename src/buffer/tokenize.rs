//! Cell Tokenizer: split a line of text into display cells.
//!
//! Tokenizing happens in two layers:
//!
//! 1. [`Tokens`] scans the line left to right and yields raw tokens, trying
//!    in order:
//!    - a CSI sequence: `ESC [`, digits, an optional `;` and more digits, one
//!      ASCII letter, then optionally one more unit of text
//!    - `ESC` followed by one of `N O P [ \ ] X ^ _`, then optionally one
//!      more unit of text
//!    - a single unit of text (one `char`, or one grapheme cluster in
//!      [`Segmentation::Graphemes`] mode)
//! 2. [`Cells`] folds tokens without printable content into their
//!    neighbours: forward into the next token, or backward into the previous
//!    cell when nothing printable follows.
//!
//! Malformed or truncated escape sequences are not rejected; they fall
//! through to single-unit tokens.

use super::cell::{contains_printable, Cell};
use super::frame::Row;
use unicode_segmentation::UnicodeSegmentation;

const ESC: char = '\x1b';

/// Second characters that introduce a two-character escape.
const ESCAPE_INTRODUCERS: [char; 9] = ['N', 'O', 'P', '[', '\\', ']', 'X', '^', '_'];

/// What counts as one unit of plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Segmentation {
    /// One Unicode scalar value per unit.
    #[default]
    Chars,
    /// One extended grapheme cluster per unit.
    Graphemes,
}

/// Kind of a raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `ESC [ params letter`.
    Csi,
    /// `ESC` plus one introducer character.
    Escape,
    /// Plain text.
    Text,
}

/// A raw token borrowed from the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Full token text, including any trailing decorated unit.
    pub text: &'a str,
    /// Token classification.
    pub kind: TokenKind,
    /// Byte length of the escape part; equals `text.len()` for `Text`.
    pub sequence_len: usize,
}

impl<'a> Token<'a> {
    /// The visible part of the token.
    pub fn visible(&self) -> &'a str {
        match self.kind {
            TokenKind::Text => self.text,
            TokenKind::Csi | TokenKind::Escape => &self.text[self.sequence_len..],
        }
    }
}

/// Scanner over the raw tokens of a line.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    segmentation: Segmentation,
}

impl<'a> Tokens<'a> {
    /// Create a scanner over `line`.
    pub const fn new(line: &'a str, segmentation: Segmentation) -> Self {
        Self {
            rest: line,
            segmentation,
        }
    }

    /// Byte length of the unit of text at the start of `s`, or 0 if empty.
    fn unit_len(&self, s: &str) -> usize {
        match self.segmentation {
            Segmentation::Chars => s.chars().next().map_or(0, char::len_utf8),
            Segmentation::Graphemes => s.graphemes(true).next().map_or(0, str::len),
        }
    }

    /// Byte length of a CSI sequence at the start of `rest`, if any.
    fn match_csi(rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        if !rest.starts_with("\x1b[") {
            return None;
        }
        let mut i = 2;
        let digits_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == digits_start {
            return None;
        }
        if bytes.get(i) == Some(&b';') {
            i += 1;
            while bytes.get(i).is_some_and(u8::is_ascii_digit) {
                i += 1;
            }
        }
        bytes
            .get(i)
            .filter(|b| b.is_ascii_alphabetic())
            .map(|_| i + 1)
    }

    /// Byte length of a two-character escape at the start of `rest`, if any.
    fn match_escape(rest: &str) -> Option<usize> {
        let mut chars = rest.chars();
        if chars.next() != Some(ESC) {
            return None;
        }
        chars
            .next()
            .filter(|c| ESCAPE_INTRODUCERS.contains(c))
            .map(|c| ESC.len_utf8() + c.len_utf8())
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let escape = Self::match_csi(self.rest)
            .map(|len| (TokenKind::Csi, len))
            .or_else(|| Self::match_escape(self.rest).map(|len| (TokenKind::Escape, len)));

        let (kind, sequence_len, len) = match escape {
            Some((kind, sequence_len)) => {
                // The sequence swallows at most one following unit.
                let trailing = self.unit_len(&self.rest[sequence_len..]);
                (kind, sequence_len, sequence_len + trailing)
            }
            None => {
                let len = self.unit_len(self.rest);
                (TokenKind::Text, len, len)
            }
        };

        let (text, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(Token {
            text,
            kind,
            sequence_len,
        })
    }
}

/// Lazy iterator over the cells of a line.
///
/// Built per line; not restartable.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    tokens: Tokens<'a>,
    /// Last complete cell, held back so a trailing decoration can join it.
    held: Option<String>,
    done: bool,
}

impl<'a> Cells<'a> {
    /// Create a cell iterator over `line`.
    pub const fn new(line: &'a str, segmentation: Segmentation) -> Self {
        Self {
            tokens: Tokens::new(line, segmentation),
            held: None,
            done: false,
        }
    }
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return self.held.take().map(Cell::new);
            }

            // Only the visible part of a token counts: the `[`, digits and
            // letter of an escape sequence are printable ASCII but never shown.
            let mut pending = String::new();
            let mut complete = false;
            for token in self.tokens.by_ref() {
                pending.push_str(token.text);
                if contains_printable(token.visible()) {
                    complete = true;
                    break;
                }
            }

            if complete {
                if let Some(previous) = self.held.replace(pending) {
                    return Some(Cell::new(previous));
                }
                continue;
            }

            // Out of tokens: whatever is pending has nothing printable after it.
            self.done = true;
            if !pending.is_empty() {
                match self.held.as_mut() {
                    Some(held) => held.push_str(&pending),
                    None => self.held = Some(pending),
                }
            }
        }
    }
}

/// Tokenize a line into a row of cells, one `char` per plain-text unit.
pub fn tokenize(line: &str) -> Row {
    tokenize_with(line, Segmentation::Chars)
}

/// Tokenize a line into a row of cells with the given segmentation.
pub fn tokenize_with(line: &str, segmentation: Segmentation) -> Row {
    Cells::new(line, segmentation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        tokenize(line)
            .iter()
            .map(|cell| cell.as_str().to_owned())
            .collect()
    }

    fn kinds(line: &str) -> Vec<(TokenKind, &str)> {
        Tokens::new(line, Segmentation::Chars)
            .map(|token| (token.kind, token.text))
            .collect()
    }

    #[test]
    fn test_plain_text_one_cell_per_char() {
        assert_eq!(texts(" . "), vec![" ", ".", " "]);
        assert_eq!(texts("héllo"), vec!["h", "é", "l", "l", "o"]);
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_csi_takes_following_char() {
        assert_eq!(
            kinds("\x1b[31mred"),
            vec![
                (TokenKind::Csi, "\x1b[31mr"),
                (TokenKind::Text, "e"),
                (TokenKind::Text, "d"),
            ]
        );
    }

    #[test]
    fn test_csi_with_two_params() {
        assert_eq!(
            kinds("\x1b[1;32mX"),
            vec![(TokenKind::Csi, "\x1b[1;32mX")]
        );
        assert_eq!(kinds("\x1b[1;mX"), vec![(TokenKind::Csi, "\x1b[1;mX")]);
    }

    #[test]
    fn test_csi_without_digits_falls_to_escape() {
        // `ESC [ G` has no parameter, so it is an introducer escape.
        assert_eq!(kinds("\x1b[G"), vec![(TokenKind::Escape, "\x1b[G")]);
    }

    #[test]
    fn test_escape_introducers() {
        assert_eq!(kinds("\x1bNa"), vec![(TokenKind::Escape, "\x1bNa")]);
        assert_eq!(kinds("\x1b]"), vec![(TokenKind::Escape, "\x1b]")]);
        assert_eq!(kinds("\x1b_x"), vec![(TokenKind::Escape, "\x1b_x")]);
    }

    #[test]
    fn test_lone_escape_is_text() {
        assert_eq!(
            kinds("\x1bq"),
            vec![(TokenKind::Text, "\x1b"), (TokenKind::Text, "q")]
        );
    }

    #[test]
    fn test_malformed_csi_degrades() {
        // Missing terminator letter: `ESC [` matches as an introducer escape
        // and swallows the first digit.
        assert_eq!(
            kinds("\x1b[12"),
            vec![(TokenKind::Escape, "\x1b[1"), (TokenKind::Text, "2")]
        );
    }

    #[test]
    fn test_token_parts() {
        let token = Tokens::new("\x1b[31mr", Segmentation::Chars).next().unwrap();
        assert_eq!(token.sequence_len, "\x1b[31m".len());
        assert_eq!(token.visible(), "r");
    }

    #[test]
    fn test_decoration_merges_forward() {
        assert_eq!(texts("\x07\x07ab"), vec!["\x07\x07a", "b"]);
        assert_eq!(texts("\x07a"), vec!["\x07a"]);
    }

    #[test]
    fn test_csi_swallows_next_escape_char() {
        // The optional trailing unit may itself be an ESC.
        assert_eq!(
            kinds("\x1b[0m\x1b[1m"),
            vec![
                (TokenKind::Csi, "\x1b[0m\x1b"),
                (TokenKind::Text, "["),
                (TokenKind::Text, "1"),
                (TokenKind::Text, "m"),
            ]
        );
        assert_eq!(texts("\x1b[0m\x1b[1mab"), vec!["\x1b[0m\x1b[", "1", "m", "a", "b"]);
    }

    #[test]
    fn test_trailing_decoration_merges_backward() {
        let row = tokenize("a\x1b[0m");
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].as_str(), "a\x1b[0m");

        assert_eq!(texts("ab\x07\x07"), vec!["a", "b\x07\x07"]);
    }

    #[test]
    fn test_escape_parameters_are_not_visible() {
        assert_eq!(texts("x\x1b[1;32m"), vec!["x\x1b[1;32m"]);
        assert_eq!(texts("ab\x1b[0m"), vec!["a", "b\x1b[0m"]);
        assert_eq!(texts("\x1b[0m\x07x"), vec!["\x1b[0m\x07x"]);
        assert_eq!(texts("\x1bN \x1b_"), vec!["\x1bN \x1b_"]);
    }

    #[test]
    fn test_lone_decoration_stays() {
        assert_eq!(texts("\x1b[0m"), vec!["\x1b[0m"]);
        assert_eq!(texts("\x07"), vec!["\x07"]);
    }

    #[test]
    fn test_colored_row() {
        let row = tokenize("\x1b[31m*\x1b[0m \x1b[32m.\x1b[0m");
        assert_eq!(row.len(), 3);
        assert_eq!(row[0].as_str(), "\x1b[31m*");
        assert_eq!(row[1].as_str(), "\x1b[0m ");
        assert_eq!(row[2].as_str(), "\x1b[32m.\x1b[0m");
    }

    #[test]
    fn test_zero_width_space_merges() {
        assert_eq!(texts("\u{200b}x"), vec!["\u{200b}x"]);
    }

    #[test]
    fn test_grapheme_segmentation() {
        let line = "e\u{301}x";
        assert_eq!(tokenize(line).len(), 3);
        let row = tokenize_with(line, Segmentation::Graphemes);
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].as_str(), "e\u{301}");

        let family = "👨\u{200d}👩\u{200d}👧";
        assert_eq!(tokenize_with(family, Segmentation::Graphemes).len(), 1);
    }

    #[test]
    fn test_grapheme_mode_csi_trailing_unit() {
        let row = tokenize_with("\x1b[1me\u{301}", Segmentation::Graphemes);
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].as_str(), "\x1b[1me\u{301}");
    }
}
