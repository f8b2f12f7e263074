//! x86_64 Architecture Support

pub mod serial;
