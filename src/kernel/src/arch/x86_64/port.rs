//! Port I/O over real hardware.

use ember_hal::PortIo;
use x86_64::instructions::port::Port;

/// PS/2 controller data port, read by the keyboard interrupt handler.
pub const KEYBOARD_DATA_PORT: u16 = 0x60;

/// `PortIo` implementation backed by real `in`/`out` instructions.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealPortIo;

impl RealPortIo {
    /// Creates a new port capability.
    pub const fn new() -> Self {
        RealPortIo
    }
}

impl PortIo for RealPortIo {
    fn read(&mut self, port: u16) -> u8 {
        // SAFETY: port reads have no memory safety impact; callers pick ports
        // whose side effects they own (PS/2 data, CRT registers).
        unsafe { Port::new(port).read() }
    }

    fn write(&mut self, port: u16, value: u8) {
        // SAFETY: as above, the caller owns the device behind the port.
        unsafe { Port::new(port).write(value) }
    }
}
