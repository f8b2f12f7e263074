//! Backing stores for the cell grid.
//!
//! The grid is a flat run of `width * height` cells addressed row-major.
//! Neither implementation bounds-checks on write: offsets come from the
//! terminal's wrap logic, which never produces one outside the grid.

use core::ptr::NonNull;
use volatile::Volatile;

use super::cell::ScreenChar;

/// Flat offset of `(column, row)` in a grid `width` cells wide.
#[inline]
pub const fn cell_index(column: usize, row: usize, width: usize) -> usize {
    row * width + column
}

/// A fixed-geometry run of cells.
pub trait TextSurface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Store `cell` at `offset`. `offset` must be below `width * height`.
    fn write_cell(&mut self, offset: usize, cell: ScreenChar);

    fn read_cell(&self, offset: usize) -> ScreenChar;

    #[inline]
    fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Overwrite every cell with `cell`.
    fn fill(&mut self, cell: ScreenChar) {
        for offset in 0..self.cell_count() {
            self.write_cell(offset, cell);
        }
    }
}

/// Memory-mapped text buffer (0xb8000 on PC hardware).
pub struct MmioSurface {
    base: NonNull<Volatile<ScreenChar>>,
    width: usize,
    height: usize,
}

// SAFETY: the surface owns its mapping exclusively; see `MmioSurface::new`.
unsafe impl Send for MmioSurface {}

impl MmioSurface {
    /// # Safety
    /// `base` must be non-null, aligned for `u16`, and point to
    /// `width * height` writable cells that nothing else aliases for the
    /// lifetime of the returned value.
    pub const unsafe fn new(base: usize, width: usize, height: usize) -> Self {
        Self {
            base: NonNull::new_unchecked(base as *mut Volatile<ScreenChar>),
            width,
            height,
        }
    }

    pub fn base_address(&self) -> usize {
        self.base.as_ptr() as usize
    }
}

impl TextSurface for MmioSurface {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn write_cell(&mut self, offset: usize, cell: ScreenChar) {
        debug_assert!(offset < self.cell_count());
        unsafe { (*self.base.as_ptr().add(offset)).write(cell) }
    }

    #[inline]
    fn read_cell(&self, offset: usize) -> ScreenChar {
        debug_assert!(offset < self.cell_count());
        unsafe { (*self.base.as_ptr().add(offset)).read() }
    }
}

/// In-memory grid with the same layout as the hardware buffer.
pub struct SliceSurface<'a> {
    cells: &'a mut [ScreenChar],
    width: usize,
    height: usize,
}

impl<'a> SliceSurface<'a> {
    pub fn new(
        cells: &'a mut [ScreenChar],
        width: usize,
        height: usize,
    ) -> Result<Self, &'static str> {
        let needed = width.checked_mul(height).ok_or("surface geometry overflow")?;
        if width == 0 || height == 0 {
            return Err("surface has zero dimension");
        }
        if cells.len() < needed {
            return Err("surface slice shorter than width * height");
        }
        Ok(Self { cells, width, height })
    }

    /// Cells in row-major order, limited to the grid.
    pub fn cells(&self) -> &[ScreenChar] {
        &self.cells[..self.width * self.height]
    }

    /// One grid row.
    pub fn row(&self, row: usize) -> &[ScreenChar] {
        let start = cell_index(0, row, self.width);
        &self.cells[start..start + self.width]
    }
}

impl TextSurface for SliceSurface<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn write_cell(&mut self, offset: usize, cell: ScreenChar) {
        self.cells[offset] = cell;
    }

    #[inline]
    fn read_cell(&self, offset: usize) -> ScreenChar {
        self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vga::color::{Color, ColorCode};

    #[test]
    fn index_is_row_major() {
        let width = 80;
        for row in 0..25 {
            for column in 0..width {
                assert_eq!(cell_index(column, row, width), row * width + column);
            }
        }
    }

    #[test]
    fn index_continues_across_rows() {
        let width = 80;
        for row in 0..24 {
            for column in 1..width {
                assert!(cell_index(column, row, width) > cell_index(column - 1, row, width));
            }
            assert_eq!(cell_index(0, row + 1, width), cell_index(width - 1, row, width) + 1);
        }
    }

    #[test]
    fn slice_surface_rejects_short_buffer() {
        let mut cells = [ScreenChar::BLANK; 10];
        assert!(SliceSurface::new(&mut cells, 4, 3).is_err());
        assert!(SliceSurface::new(&mut cells, 0, 3).is_err());
        assert!(SliceSurface::new(&mut cells, usize::MAX, 2).is_err());
        assert!(SliceSurface::new(&mut cells, 5, 2).is_ok());
    }

    #[test]
    fn slice_surface_fill_and_rows() {
        let mut cells = [ScreenChar::BLANK; 12];
        let mut surface = SliceSurface::new(&mut cells, 4, 3).unwrap();
        let x = ScreenChar::new(b'x', ColorCode::new(Color::Green, Color::Black));
        surface.fill(x);
        assert!(surface.cells().iter().all(|c| *c == x));

        let y = ScreenChar::new(b'y', ColorCode::DEFAULT);
        surface.write_cell(cell_index(2, 1, 4), y);
        assert_eq!(surface.row(1)[2], y);
        assert_eq!(surface.read_cell(6), y);
        assert_eq!(surface.row(0), &[x; 4]);
    }

    #[test]
    fn mmio_surface_writes_through_base() {
        let mut backing = [0u16; 6];
        let mut surface = unsafe { MmioSurface::new(backing.as_mut_ptr() as usize, 3, 2) };
        let cell = ScreenChar::new(b'Q', ColorCode::new(Color::White, Color::Red));
        surface.write_cell(4, cell);
        assert_eq!(surface.read_cell(4), cell);
        assert_eq!(surface.base_address(), backing.as_ptr() as usize);
        drop(surface);
        assert_eq!(backing[4], 0x4f51);
        assert_eq!(backing[0], 0);
    }
}
