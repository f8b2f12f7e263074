//! 16550 UART on COM1, used as the log sink.
//!
//! The text console has no scrollback, so log lines go out here where a
//! host-side emulator can capture them.

use core::fmt;
use spin::Mutex;
use x86_64::instructions::port::Port;

pub const COM1: u16 = 0x3f8;

/// UART input clock divided by 16.
const BASE_BAUD: u32 = 115_200;
const BAUD: u32 = 38_400;

/// Line control: divisor latch access bit.
const LCR_DLAB: u8 = 0x80;
/// Line control: 8 data bits, no parity, one stop bit.
const LCR_8N1: u8 = 0x03;
/// FIFO control: enable, clear both queues, 14-byte trigger level.
const FCR_ENABLE_CLEAR_14: u8 = 0xc7;
/// Modem control: DTR, RTS, OUT2.
const MCR_DTR_RTS_OUT2: u8 = 0x0b;
/// Line status: transmit holding register empty.
const LSR_THR_EMPTY: u8 = 0x20;

/// Divisor latch value for `baud`.
pub const fn divisor_for(baud: u32) -> u16 {
    (BASE_BAUD / baud) as u16
}

pub struct SerialPort {
    data: Port<u8>,
    int_enable: Port<u8>,
    fifo_ctrl: Port<u8>,
    line_ctrl: Port<u8>,
    modem_ctrl: Port<u8>,
    line_status: Port<u8>,
}

impl SerialPort {
    /// # Safety
    /// `base` must be the I/O base of a 16550-compatible UART owned by the
    /// caller.
    pub unsafe fn new(base: u16) -> Self {
        SerialPort {
            data: Port::new(base),
            int_enable: Port::new(base + 1),
            fifo_ctrl: Port::new(base + 2),
            line_ctrl: Port::new(base + 3),
            modem_ctrl: Port::new(base + 4),
            line_status: Port::new(base + 5),
        }
    }

    /// 38400 baud, 8N1, FIFO on, interrupts off (we only poll).
    pub fn init(&mut self) {
        unsafe {
            // Disable interrupts
            self.int_enable.write(0x00);

            // With DLAB set, data/int_enable are the divisor lo/hi bytes
            let [lo, hi] = divisor_for(BAUD).to_le_bytes();
            self.line_ctrl.write(LCR_DLAB);
            self.data.write(lo);
            self.int_enable.write(hi);

            self.line_ctrl.write(LCR_8N1);
            self.fifo_ctrl.write(FCR_ENABLE_CLEAR_14);
            self.modem_ctrl.write(MCR_DTR_RTS_OUT2);
        }
    }

    fn is_transmit_empty(&mut self) -> bool {
        unsafe { self.line_status.read() & LSR_THR_EMPTY != 0 }
    }

    pub fn send(&mut self, data: u8) {
        while !self.is_transmit_empty() {
            core::hint::spin_loop();
        }
        unsafe {
            self.data.write(data);
        }
    }
}

impl fmt::Write for SerialPort {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.send(byte);
        }
        Ok(())
    }
}

static SERIAL1: Mutex<Option<SerialPort>> = Mutex::new(None);

pub fn init() {
    let mut serial = unsafe { SerialPort::new(COM1) };
    serial.init();
    *SERIAL1.lock() = Some(serial);
}

/// Write to COM1 if it has been brought up; silently dropped otherwise.
pub fn write_fmt(args: fmt::Arguments) {
    use core::fmt::Write;
    if let Some(serial) = SERIAL1.lock().as_mut() {
        let _ = serial.write_fmt(args);
    }
}
