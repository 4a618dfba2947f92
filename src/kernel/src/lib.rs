//! EmberOS Kernel
//!
//! A minimal interrupt-driven console kernel targeting x86_64 platforms.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `arch`: Platform-specific code (VGA, serial, interrupts, port I/O)
//! - `console`: The interactive console (decoder, line editor, dispatcher)
//! - `boot`: Boot banner and colored status logging
//! - `logger`: Serial-backed `log` facade implementation
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_os = "none", feature(abi_x86_interrupt))]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod console;
pub mod logger;
pub mod tests;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process, before any output is produced and
/// before interrupts are enabled.
pub fn init() {
    arch::x86_64::serial::init();
    logger::init();
    console::init();
}
