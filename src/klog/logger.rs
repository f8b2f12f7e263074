//! `log` backend for freestanding builds.
//!
//! Lines look like `[INFO] textmode::console: console up`. Sinks are picked
//! at compile time:
//! - `log-serial`: COM1 (x86_64 only, once `serial::init` has run).
//! - `log-vga`: the text console, colored per level. Never blocks; a line is
//!   dropped when the console is busy or not up.

use core::fmt::{self, Write};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::vga::{Color, ColorCode};

pub struct KernelLogger;

static LOGGER: KernelLogger = KernelLogger;

/// Short tag printed in front of every line.
pub const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DBG",
        Level::Trace => "TRACE",
    }
}

/// Console color for lines at `level`.
pub const fn level_color(level: Level) -> ColorCode {
    match level {
        Level::Error => ColorCode::new(Color::LightRed, Color::Black),
        Level::Warn => ColorCode::new(Color::LightBrown, Color::Black),
        Level::Info => ColorCode::new(Color::LightGreen, Color::Black),
        Level::Debug => ColorCode::new(Color::LightCyan, Color::Black),
        Level::Trace => ColorCode::new(Color::DarkGrey, Color::Black),
    }
}

/// Render one line, newline included.
pub fn format_line<W: Write>(
    out: &mut W,
    level: Level,
    target: &str,
    args: &fmt::Arguments,
) -> fmt::Result {
    writeln!(out, "[{}] {}: {}", level_tag(level), target, args)
}

impl Log for KernelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit_serial(record);
        emit_console(record);
    }

    fn flush(&self) {}
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "log-serial", target_arch = "x86_64"))] {
        fn emit_serial(record: &Record) {
            crate::arch::x86_64::serial::write_fmt(format_args!(
                "[{}] {}: {}\n",
                level_tag(record.level()),
                record.target(),
                record.args()
            ));
        }
    } else {
        fn emit_serial(_record: &Record) {}
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "log-vga")] {
        fn emit_console(record: &Record) {
            let _ = crate::console::try_with_terminal(|term| {
                let saved = term.color();
                term.set_color(level_color(record.level()));
                let _ = format_line(term, record.level(), record.target(), record.args());
                term.set_color(saved);
            });
        }
    } else {
        fn emit_console(_record: &Record) {}
    }
}

/// Install the logger. Fails if any `log` backend is already installed.
pub fn init(level: LevelFilter) -> Result<(), &'static str> {
    log::set_logger(&LOGGER).map_err(|_| "logger already installed")?;
    log::set_max_level(level);
    Ok(())
}

pub fn try_get_logger() -> Option<&'static KernelLogger> {
    if log::max_level() == LevelFilter::Off {
        None
    } else {
        Some(&LOGGER)
    }
}
