//! x86_64 architecture support.
//!
//! Provides the VGA text console, serial port, interrupt bring-up, and the
//! port I/O and power-control primitives for x86_64 platforms.

#[cfg(target_os = "none")]
pub mod interrupts;
pub mod pic;
pub mod port;
pub mod power;
pub mod serial;
pub mod vga;

pub use port::RealPortIo;
pub use vga::{Color, Writer};

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors and as the tail of the power-control
/// actions.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
