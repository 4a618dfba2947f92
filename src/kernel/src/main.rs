//! EmberOS Kernel Entry Point
//!
//! Boots the console: banner, self tests, prompt, then the interrupt-driven
//! idle loop. All input handling happens in the keyboard interrupt handler.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use bootloader::{entry_point, BootInfo};
#[cfg(target_os = "none")]
use ember_kernel::arch::x86_64::{self, Color};
#[cfg(target_os = "none")]
use ember_kernel::boot::{self, Status};
#[cfg(target_os = "none")]
use ember_kernel::{console, println, serial_println};

#[cfg(target_os = "none")]
entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
#[cfg(target_os = "none")]
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    ember_kernel::init();

    console::clear_screen();
    boot::banner::print_banner();

    boot::log(Status::Ok, "Serial port initialized");
    boot::log(Status::Ok, "VGA console ready");

    ember_kernel::tests::run_all();
    boot::log(Status::Ok, "Kernel self tests passed");
    boot::log_detail("full results on the serial console");

    console::set_color(Color::Cyan, Color::Black);
    println!("\n Type 'help' for available commands.\n");
    console::set_color(Color::White, Color::Black);

    // The prompt goes up before the keyboard line is unmasked, so the boot
    // path and the interrupt handler never contend for the console.
    console::prompt();
    x86_64::interrupts::init();
    log::info!("boot complete");

    x86_64::halt_loop()
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    // Use the already-initialized serial port
    serial_println!("KERNEL PANIC: {}", info);

    console::set_color(Color::LightRed, Color::Black);
    println!("\n\n!!! KERNEL PANIC !!!");
    console::set_color(Color::White, Color::Black);
    println!("{}", info);

    x86_64::halt_loop()
}

#[cfg(not(target_os = "none"))]
fn main() {}
