//! Process-wide text console.
//!
//! The terminal itself is a plain value; this module parks one instance over
//! the hardware buffer behind a spinlock so every producer (entry code, log
//! sink, panic handler) serializes whole `put_char` sequences.

use core::fmt::{self, Write};
use spin::Mutex;

use crate::config::TerminalConfig;
use crate::terminal::Terminal;
use crate::vga::{ColorCode, MmioSurface};

static CONSOLE: Mutex<Option<Terminal<MmioSurface>>> = Mutex::new(None);

/// Map the configured buffer and clear it. Calling again resets the console.
///
/// # Safety
/// The configured range must be the text buffer (or other writable memory of
/// the same layout) and must not be written by anything but this module.
pub unsafe fn init(config: TerminalConfig) -> Result<(), &'static str> {
    let surface = config.surface()?;
    *CONSOLE.lock() = Some(Terminal::initialize(surface, config.default_color));
    Ok(())
}

pub fn is_initialized() -> bool {
    CONSOLE.lock().is_some()
}

/// Run `f` with the console locked.
pub fn with_terminal<R>(
    f: impl FnOnce(&mut Terminal<MmioSurface>) -> R,
) -> Result<R, &'static str> {
    match CONSOLE.lock().as_mut() {
        Some(term) => Ok(f(term)),
        None => Err("console not initialized"),
    }
}

/// Print to the console (locks). Dropped if the console is not up yet.
pub fn print(s: &str) {
    let _ = with_terminal(|term| term.write_bytes(s.as_bytes()));
}

pub fn write_bytes(data: &[u8]) {
    let _ = with_terminal(|term| term.write_bytes(data));
}

pub fn set_color(color: ColorCode) {
    let _ = with_terminal(|term| term.set_color(color));
}

/// Like [`with_terminal`] but never spins: `None` when the console is
/// locked or not initialized.
pub fn try_with_terminal<R>(f: impl FnOnce(&mut Terminal<MmioSurface>) -> R) -> Option<R> {
    let mut guard = CONSOLE.try_lock()?;
    guard.as_mut().map(f)
}

/// Print without waiting on the lock (panic path). Output is dropped when
/// the lock is already held, since the holder may be the code that panicked.
pub fn print_critical(s: &str) {
    let _ = try_with_terminal(|term| term.write_bytes(s.as_bytes()));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    let _ = with_terminal(|term| term.write_fmt(args));
}

#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {
        $crate::console::_print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! kprintln {
    () => ($crate::kprint!("\n"));
    ($($arg:tt)*) => {
        $crate::kprint!("{}\n", format_args!($($arg)*))
    };
}
