//! Console geometry and placement.
//!
//! The hardware contract is a fixed base address plus fixed dimensions; both
//! are carried here instead of being baked into the terminal so the same
//! code runs against an in-memory grid off-hardware.

use crate::vga::{ColorCode, MmioSurface, BUFFER_HEIGHT, BUFFER_WIDTH, VGA_ADDRESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    pub base_address: usize,
    pub width: usize,
    pub height: usize,
    pub default_color: ColorCode,
}

impl TerminalConfig {
    /// Colour text mode 3: 80x25 at 0xb8000, light grey on black.
    pub const VGA: TerminalConfig = TerminalConfig {
        base_address: VGA_ADDRESS,
        width: BUFFER_WIDTH,
        height: BUFFER_HEIGHT,
        default_color: ColorCode::DEFAULT,
    };

    pub const fn with_default_color(mut self, color: ColorCode) -> Self {
        self.default_color = color;
        self
    }

    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.width == 0 || self.height == 0 {
            return Err("zero-sized console");
        }
        if self.base_address == 0 {
            return Err("null console base address");
        }
        if self.base_address % core::mem::align_of::<u16>() != 0 {
            return Err("misaligned console base address");
        }

        let bytes = self
            .width
            .checked_mul(self.height)
            .and_then(|cells| cells.checked_mul(core::mem::size_of::<u16>()))
            .ok_or("console geometry overflow")?;
        self.base_address.checked_add(bytes).ok_or("console range overflows address space")?;

        Ok(())
    }

    /// Map the configured range as a text surface.
    ///
    /// # Safety
    /// The configured range must be mapped, writable and owned by the caller
    /// (see [`MmioSurface::new`]).
    pub unsafe fn surface(&self) -> Result<MmioSurface, &'static str> {
        self.validate()?;
        Ok(MmioSurface::new(self.base_address, self.width, self.height))
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self::VGA
    }
}
