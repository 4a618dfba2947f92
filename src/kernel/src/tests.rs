//! Kernel-level self tests, run once at boot.
//!
//! These exercise the pure console plumbing on the target itself and report
//! over serial. The host test suite covers the same code in more depth.

use crate::console::keyboard::{decode, ConsoleEvent};
use crate::console::line::{LineEditor, CMD_BUFFER_SIZE, MAX_HISTORY};
use crate::serial_println;

/// Runs all kernel self tests.
pub fn run_all() {
    serial_println!("Running kernel tests...");

    test_decode();
    test_line_capacity();
    test_history_eviction();

    serial_println!("All kernel tests passed!");
}

fn test_decode() {
    serial_println!("test_decode... ");
    assert_eq!(decode(0x1E), Some(ConsoleEvent::Char(b'a')));
    assert_eq!(decode(0x1C), Some(ConsoleEvent::Enter));
    assert_eq!(decode(0x9E), None);
    serial_println!("[ok]");
}

fn test_line_capacity() {
    serial_println!("test_line_capacity... ");
    let mut editor = LineEditor::new();
    for _ in 0..CMD_BUFFER_SIZE + 10 {
        editor.insert(b'x');
    }
    assert_eq!(editor.len(), CMD_BUFFER_SIZE - 1);
    serial_println!("[ok]");
}

fn test_history_eviction() {
    serial_println!("test_history_eviction... ");
    let mut editor = LineEditor::new();
    let mut out = [0u8; CMD_BUFFER_SIZE];
    for _ in 0..MAX_HISTORY + 2 {
        editor.insert(b'h');
        editor.take_line(&mut out);
    }
    assert_eq!(editor.history().len(), MAX_HISTORY);
    serial_println!("[ok]");
}
