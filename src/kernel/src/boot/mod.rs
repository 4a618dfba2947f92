//! Boot logging with colored status indicators.
//!
//! Linux-style boot messages with colored status brackets, rendered on the
//! VGA console.

pub mod banner;

use crate::arch::x86_64::Color;
use crate::console;
use crate::{print, println};

/// Boot status indicators.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    /// Success - `[ OK ]` in green
    Ok,
    /// Failure - `[FAIL]` in red
    Fail,
    /// Warning - `[WARN]` in yellow
    Warn,
    /// Informational - `[INFO]` in cyan
    Info,
}

/// Log a boot stage with status.
///
/// Format: `[ OK ] Message text`
pub fn log(status: Status, message: &str) {
    print_status(status);
    println!(" {}", message);
}

/// Log an indented detail line (for sub-items).
pub fn log_detail(message: &str) {
    println!("       {}", message);
}

fn print_status(status: Status) {
    let (text, color) = match status {
        Status::Ok => ("[ OK ]", Color::LightGreen),
        Status::Fail => ("[FAIL]", Color::LightRed),
        Status::Warn => ("[WARN]", Color::Yellow),
        Status::Info => ("[INFO]", Color::LightCyan),
    };
    console::set_color(color, Color::Black);
    print!("{}", text);
    console::set_color(Color::White, Color::Black);
}
