//! Interrupt Descriptor Table (IDT) and exception handlers for x86_64.
//!
//! The keyboard line is the only unmasked device interrupt; its handler runs
//! the whole console reaction synchronously before acknowledging the PIC, so
//! console state is never touched from two contexts at once.

use crate::arch::x86_64::pic::{InterruptIndex, PICS, PIC_1_MASK, PIC_2_MASK};
use crate::arch::x86_64::port::KEYBOARD_DATA_PORT;
use crate::arch::x86_64::RealPortIo;
use crate::println;
use ember_hal::PortIo;
use lazy_static::lazy_static;
use x86_64::structures::idt::{InterruptDescriptorTable, InterruptStackFrame};

lazy_static! {
    /// The Interrupt Descriptor Table (IDT).
    static ref IDT: InterruptDescriptorTable = {
        let mut idt = InterruptDescriptorTable::new();
        idt.breakpoint.set_handler_fn(breakpoint_handler);
        idt.double_fault.set_handler_fn(double_fault_handler);
        idt.page_fault.set_handler_fn(page_fault_handler);
        idt.general_protection_fault.set_handler_fn(general_protection_fault_handler);
        idt.divide_error.set_handler_fn(divide_error_handler);

        // Hardware interrupts
        idt[InterruptIndex::Keyboard.as_usize()]
            .set_handler_fn(keyboard_interrupt_handler);

        idt
    };
}

/// Initializes the IDT, remaps the PICs, and enables hardware interrupts.
///
/// All device lines except the keyboard stay masked.
pub fn init() {
    IDT.load();
    unsafe {
        PICS.lock().initialize();
        PICS.lock().write_masks(PIC_1_MASK, PIC_2_MASK);
    }
    x86_64::instructions::interrupts::enable();
    log::info!("interrupts enabled, keyboard line unmasked");
}

/// Handler for the keyboard interrupt.
///
/// Reads the scancode, drives the console, then acknowledges the PIC exactly
/// once.
extern "x86-interrupt" fn keyboard_interrupt_handler(_stack_frame: InterruptStackFrame) {
    let scancode = RealPortIo::new().read(KEYBOARD_DATA_PORT);
    crate::console::handle_scancode(scancode);

    unsafe {
        PICS.lock()
            .notify_end_of_interrupt(InterruptIndex::Keyboard.as_u8());
    }
}

/// Handler for the breakpoint exception (INT3).
extern "x86-interrupt" fn breakpoint_handler(stack_frame: InterruptStackFrame) {
    println!("EXCEPTION: BREAKPOINT\n{:#?}", stack_frame);
}

/// Handler for the double fault exception.
extern "x86-interrupt" fn double_fault_handler(
    stack_frame: InterruptStackFrame,
    _error_code: u64,
) -> ! {
    panic!("EXCEPTION: DOUBLE FAULT\n{:#?}", stack_frame);
}

/// Handler for the page fault exception.
extern "x86-interrupt" fn page_fault_handler(
    stack_frame: InterruptStackFrame,
    error_code: x86_64::structures::idt::PageFaultErrorCode,
) {
    use x86_64::registers::control::Cr2;

    println!("EXCEPTION: PAGE FAULT");
    println!("Accessed Address: {:?}", Cr2::read());
    println!("Error Code: {:?}", error_code);
    println!("{:#?}", stack_frame);
    crate::arch::x86_64::halt_loop();
}

/// Handler for the general protection fault exception.
extern "x86-interrupt" fn general_protection_fault_handler(
    stack_frame: InterruptStackFrame,
    error_code: u64,
) {
    println!("EXCEPTION: GENERAL PROTECTION FAULT");
    println!("Error Code: {:#x}", error_code);
    println!("{:#?}", stack_frame);
    crate::arch::x86_64::halt_loop();
}

/// Handler for the divide error exception.
extern "x86-interrupt" fn divide_error_handler(stack_frame: InterruptStackFrame) {
    println!("EXCEPTION: DIVIDE ERROR\n{:#?}", stack_frame);
    crate::arch::x86_64::halt_loop();
}
