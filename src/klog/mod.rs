//! Kernel logging subsystem

pub mod logger;

pub use logger::{format_line, init, level_color, level_tag, try_get_logger, KernelLogger};
