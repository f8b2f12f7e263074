//! Text-mode console for freestanding boot code.
//!
//! Renders a byte stream into the 80x25 grid of character+attribute cells
//! behind the legacy text buffer at 0xb8000:
//! - `vga`: palette, 16-bit cell encoding, grid storage (MMIO or in-memory)
//! - `terminal`: cursor, active color and the placement/wrap algorithm
//! - `console`: one terminal over the hardware buffer behind a spinlock
//! - `config`: base address and geometry, so tests can swap the buffer
//! - `klog`: `log` backend (COM1 and/or the console)
//!
//! There is no scrolling: output past the last row wraps to row 0 and
//! overwrites what was there.

#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod config;
pub mod console;
pub mod klog;
pub mod terminal;
pub mod vga;

pub use config::TerminalConfig;
pub use terminal::{nul_terminated_len, Terminal};
pub use vga::{Color, ColorCode, ScreenChar, TextSurface};

/// Greeting written by [`kernel_main`].
pub const GREETING: &[u8] = b"Hello, kernel World!\n\0";

/// Bring up logging and the console on the standard text buffer, then greet.
///
/// Must only run on hardware (or an emulator) where 0xb8000 is the text
/// buffer.
pub fn kernel_main() {
    #[cfg(all(feature = "log-serial", target_arch = "x86_64"))]
    arch::x86_64::serial::init();

    // SAFETY: boot code owns the text buffer; nothing else maps it.
    if let Err(e) = unsafe { boot(TerminalConfig::VGA) } {
        log::error!("console bring-up failed: {}", e);
    }
}

/// Install the logger, map and clear the console described by `config`,
/// then write [`GREETING`]. An already installed logger is kept and
/// reported once the console is up.
///
/// # Safety
/// Same contract as [`console::init`].
pub unsafe fn boot(config: TerminalConfig) -> Result<(), &'static str> {
    let logger = klog::init(log::LevelFilter::Info);

    console::init(config)?;
    if let Err(e) = logger {
        log::warn!("keeping existing logger: {}", e);
    }
    log::info!("console up: {}x{} at {:#x}", config.width, config.height, config.base_address);

    console::with_terminal(|term| term.write_string(GREETING))
}
