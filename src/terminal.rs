//! Terminal state and the character placement algorithm.
//!
//! Features:
//! - Cursor tracking over a fixed grid, one byte per cell.
//! - Line wrap at the right edge and after `\n`.
//! - Wrap-around to row 0 past the last row; there is no scrolling and
//!   overwritten rows are gone.
//! - The newline byte is itself stored as a glyph before the cursor moves.
//!
//! The hot path (`put_char_at`, `put_char`, `write`) does no runtime
//! validation. Coordinates handed to `put_char_at` must be inside the grid;
//! debug builds assert it.

use core::ffi::CStr;
use core::fmt;

use crate::vga::{cell_index, ColorCode, ScreenChar, TextSurface};

/// Length of the zero-terminated prefix of `data`.
///
/// A slice with no zero byte counts as terminated at its end, so the scan
/// never leaves the slice.
#[inline]
pub fn nul_terminated_len(data: &[u8]) -> usize {
    data.iter().position(|&b| b == 0).unwrap_or(data.len())
}

pub struct Terminal<S: TextSurface> {
    surface: S,
    row: usize,
    column: usize,
    color: ColorCode,
    default_color: ColorCode,
}

impl<S: TextSurface> Terminal<S> {
    /// Take ownership of `surface`, clear it to blanks in `default_color`
    /// and home the cursor.
    pub fn initialize(surface: S, default_color: ColorCode) -> Self {
        let mut term = Self {
            surface,
            row: 0,
            column: 0,
            color: default_color,
            default_color,
        };
        term.reinitialize();
        term
    }

    /// Repeat the full reset: cursor home, default color, every cell blank.
    pub fn reinitialize(&mut self) {
        self.row = 0;
        self.column = 0;
        self.color = self.default_color;
        self.surface.fill(ScreenChar::new(b' ', self.color));
    }

    pub fn width(&self) -> usize {
        self.surface.width()
    }

    pub fn height(&self) -> usize {
        self.surface.height()
    }

    /// Current `(column, row)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    pub fn color(&self) -> ColorCode {
        self.color
    }

    /// Color for every later write; cells already on screen keep theirs.
    pub fn set_color(&mut self, color: ColorCode) {
        self.color = color;
    }

    /// Store `c` at `(column, row)` in `color`, leaving the cursor alone.
    #[inline]
    pub fn put_char_at(&mut self, c: u8, color: ColorCode, column: usize, row: usize) {
        debug_assert!(column < self.surface.width(), "column {} off grid", column);
        debug_assert!(row < self.surface.height(), "row {} off grid", row);
        let index = cell_index(column, row, self.surface.width());
        self.surface.write_cell(index, ScreenChar::new(c, color));
    }

    /// Write `c` at the cursor and advance.
    pub fn put_char(&mut self, c: u8) {
        self.put_char_at(c, self.color, self.column, self.row);

        self.column += 1;
        if self.column == self.surface.width() || c == b'\n' {
            self.column = 0;
            self.row += 1;
            if self.row == self.surface.height() {
                self.row = 0;
            }
        }
    }

    /// `put_char` over the first `length` bytes of `data`.
    pub fn write(&mut self, data: &[u8], length: usize) {
        debug_assert!(length <= data.len(), "length {} past end of {} bytes", length, data.len());
        for &byte in &data[..length] {
            self.put_char(byte);
        }
    }

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.write(data, data.len());
    }

    /// Write `data` up to (not including) its first zero byte.
    pub fn write_string(&mut self, data: &[u8]) {
        self.write(data, nul_terminated_len(data));
    }

    pub fn write_cstr(&mut self, s: &CStr) {
        self.write_bytes(s.to_bytes());
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: TextSurface> fmt::Write for Terminal<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
