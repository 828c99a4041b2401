//! Terminal module: ANSI output primitives.
//!
//! Only three control sequences are ever written:
//! - `ESC [ G` moves the cursor to column 1
//! - `ESC [ A` moves the cursor up one line
//! - `ESC [ B` moves the cursor down one line

mod output;

pub use output::OutputBuffer;

/// Move the cursor to column 1 of the current line.
pub const CURSOR_COLUMN_RESET: &str = "\x1b[G";
/// Move the cursor up one line.
pub const CURSOR_UP: &str = "\x1b[A";
/// Move the cursor down one line.
pub const CURSOR_DOWN: &str = "\x1b[B";
/// Zero-width character written to wipe stale glyphs without moving the
/// cursor.
pub const DEFAULT_FILLER: char = '\u{200b}';
