//! Text-mode display surface model: palette, cell encoding, grid storage.

pub mod cell;
pub mod color;
pub mod surface;

pub use cell::{encode_cell, ScreenChar};
pub use color::{encode_color, Color, ColorCode};
pub use surface::{cell_index, MmioSurface, SliceSurface, TextSurface};

pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_WIDTH: usize = 80;
pub const VGA_ADDRESS: usize = 0xb8000;
