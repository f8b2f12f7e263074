//! Freestanding entry point.
//!
//! Built only with `--features kernel-bin` for a bare-metal target; the
//! loader jumps to `_start` with the text buffer identity-mapped.

#![no_std]
#![no_main]

#[cfg(not(target_os = "none"))]
compile_error!(
    "textmode_kernel must be built with a freestanding cross target (target_os = \"none\")"
);

use core::fmt::Write;
use core::panic::PanicInfo;

#[no_mangle]
pub extern "C" fn _start() -> ! {
    textmode::kernel_main();
    halt()
}

struct Critical;

impl Write for Critical {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        textmode::console::print_critical(s);
        Ok(())
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    let _ = write!(Critical, "\n[PANIC] {}\n", info);
    halt()
}

fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
