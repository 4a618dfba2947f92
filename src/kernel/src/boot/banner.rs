//! Boot banner and branding.

use crate::arch::x86_64::Color;
use crate::console;
use crate::println;

/// Print the EmberOS boot banner.
pub fn print_banner() {
    console::set_color(Color::LightRed, Color::Black);
    println!("  _____           _                ___  ____  ");
    println!(" | ____|_ __ ___ | |__   ___ _ __ / _ \\/ ___| ");
    println!(" |  _| | '_ ` _ \\| '_ \\ / _ \\ '__| | | \\___ \\ ");
    println!(" | |___| | | | | | |_) |  __/ |  | |_| |___) |");
    println!(" |_____|_| |_| |_|_.__/ \\___|_|   \\___/|____/ ");
    println!();
    console::set_color(Color::White, Color::Black);
    println!(" EmberOS v2.0 - Terminal Edition");
    println!();
}
