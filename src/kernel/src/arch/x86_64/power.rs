//! Reboot and shutdown triggers.
//!
//! Both actions are fire-and-forget port writes followed by a halt loop in
//! case the hardware does not react.

use x86_64::instructions::port::Port;

use super::halt_loop;

/// PS/2 controller command port; the reset pulse command goes here.
const PS2_COMMAND_PORT: u16 = 0x64;

/// PS/2 controller command that pulses the CPU reset line.
const PS2_RESET_COMMAND: u8 = 0xFE;

/// QEMU isa-debug-exit style port, kept for older emulator setups.
const DEBUG_EXIT_PORT: u16 = 0xF4;

/// QEMU ACPI PM1a control port.
const ACPI_SHUTDOWN_PORT: u16 = 0x604;

/// Value that moves the ACPI sleep state to S5 (power off) on QEMU.
const ACPI_SHUTDOWN_VALUE: u16 = 0x2000;

/// Resets the machine via the PS/2 controller reset line.
pub fn reboot() -> ! {
    log::info!("reboot requested");
    // SAFETY: writing the reset command to the PS/2 controller is the
    // documented way to pulse the CPU reset line; there is no state left to
    // corrupt at this point.
    unsafe {
        Port::new(PS2_COMMAND_PORT).write(PS2_RESET_COMMAND);
    }
    halt_loop();
}

/// Powers the machine off via the emulator's ACPI port.
pub fn shutdown() -> ! {
    log::info!("shutdown requested");
    // SAFETY: both ports are emulator power-control registers with no memory
    // side effects; on real hardware the writes are ignored and we halt.
    unsafe {
        Port::new(DEBUG_EXIT_PORT).write(0x00u8);
        Port::new(ACPI_SHUTDOWN_PORT).write(ACPI_SHUTDOWN_VALUE);
    }
    halt_loop();
}
