//! The interactive console.
//!
//! Ties the display driver, scancode decoder, line editor, and command
//! dispatcher together behind one owned state object. A single global
//! instance drives the VGA console; the keyboard interrupt handler feeds it
//! scancodes through [`handle_scancode`].
//!
//! Locking: console state is only mutated from the keyboard handler once
//! interrupts are enabled, and all other device lines stay masked, so the
//! spinlock is uncontended in practice. It still makes the shared access
//! sound for the boot path, which prints before interrupts are turned on.

pub mod commands;
pub mod keyboard;
pub mod line;

use core::fmt;
use core::fmt::Write as _;

use spin::{Mutex, Once};

use crate::arch::x86_64::{power, Color, RealPortIo, Writer};
use self::commands::Command;
use self::keyboard::ConsoleEvent;
use self::line::{LineEditor, CMD_BUFFER_SIZE};
use ember_hal::PortIo;

/// Login-style prefix shown before each input line.
pub(crate) const PROMPT: &str = "root~ember:~ ";

/// The global console, created by [`init`].
pub static CONSOLE: Once<Mutex<Console<RealPortIo>>> = Once::new();

/// Creates the global console over the hardware VGA buffer.
pub fn init() {
    CONSOLE.call_once(|| Mutex::new(Console::new(Writer::new(RealPortIo::new()))));
}

/// Feeds a raw scancode to the global console.
///
/// Called from the keyboard interrupt handler. Release events and unmapped
/// keys are dropped before the console lock is taken.
pub fn handle_scancode(scancode: u8) {
    if let Some(event) = keyboard::decode(scancode) {
        if let Some(console) = CONSOLE.get() {
            console.lock().handle_event(event);
        }
    }
}

/// Console state: the display writer plus the line editor and its history.
pub struct Console<P: PortIo> {
    writer: Writer<P>,
    line: LineEditor,
}

impl<P: PortIo> Console<P> {
    /// Creates a console over the given display writer.
    pub fn new(writer: Writer<P>) -> Self {
        Console {
            writer,
            line: LineEditor::new(),
        }
    }

    /// Reacts to one decoded key event.
    ///
    /// Accepted characters are echoed; input the editor rejects (buffer full,
    /// backspace on an empty line) produces no output at all.
    pub fn handle_event(&mut self, event: ConsoleEvent) {
        match event {
            ConsoleEvent::Char(ch) => {
                if self.line.insert(ch) {
                    self.writer.write_byte(ch);
                }
            }
            ConsoleEvent::Backspace => {
                if self.line.backspace() {
                    self.writer.write_byte(0x08);
                }
            }
            ConsoleEvent::Enter => self.commit_line(),
        }
    }

    /// Commits the pending line: echoes the newline, records history, and
    /// dispatches. An empty line just gets a fresh prompt.
    fn commit_line(&mut self) {
        self.writer.write_byte(b'\n');
        if self.line.is_empty() {
            self.prompt();
            return;
        }

        let mut buf = [0u8; CMD_BUFFER_SIZE];
        let len = self.line.take_line(&mut buf);
        // Decoded input is printable ASCII, so this conversion cannot fail.
        let line = core::str::from_utf8(&buf[..len]).unwrap_or("");
        match commands::parse(line) {
            Some(command) => self.run(command),
            None => self.prompt(),
        }
    }

    /// Executes a parsed command.
    ///
    /// Every branch re-displays the prompt except `exit`, which shows its own
    /// after clearing the screen, and the power actions, which never return.
    pub fn run(&mut self, command: Command<'_>) {
        match command {
            Command::Help => self.puts(commands::HELP_TEXT),
            Command::Clear => self.writer.clear_screen(),
            Command::Echo(args) => {
                self.writer.write_byte(b'\n');
                self.puts(args);
            }
            Command::Reboot => {
                self.puts("\nRebooting...");
                power::reboot();
            }
            Command::Shutdown => {
                self.puts("\nShutting down...");
                power::shutdown();
            }
            Command::Version => self.puts(commands::VERSION_TEXT),
            Command::Color(args) => self.change_color(args),
            Command::List => self.puts(commands::LS_TEXT),
            Command::Time => self.puts(commands::TIME_TEXT),
            Command::Date => self.puts(commands::DATE_TEXT),
            Command::Calc => self.puts(commands::CALC_TEXT),
            Command::Mem => self.puts(commands::MEM_TEXT),
            Command::Exit => {
                self.puts("\nLogging out...");
                self.writer.clear_screen();
                self.prompt();
                return;
            }
            Command::Unknown(word) => {
                let _ = write!(self.writer, "\nCommand not found: {}", word);
                self.puts("\nType 'help' for available commands");
            }
        }
        self.prompt();
    }

    /// Handles the `color` command: a leading ASCII digit selects the
    /// foreground, background stays black. Anything else is ignored.
    fn change_color(&mut self, args: &str) {
        if let Some(digit) = args.bytes().next().filter(u8::is_ascii_digit) {
            self.writer.set_color(Color::from_index(digit - b'0'), Color::Black);
            self.puts("\nColor changed");
        }
    }

    /// Shows the prompt and readies the editor for new input.
    ///
    /// The prefix is drawn in the prompt color; typed input after it uses the
    /// normal color, which also undoes any `color` command.
    pub fn prompt(&mut self) {
        self.writer.set_color(Color::Green, Color::Black);
        self.puts(PROMPT);
        self.writer.set_color(Color::LightGray, Color::Black);
        self.line.reset();
    }

    fn puts(&mut self, s: &str) {
        let _ = self.writer.write_str(s);
    }

    /// Mutable access to the display writer.
    pub fn writer_mut(&mut self) -> &mut Writer<P> {
        &mut self.writer
    }

    /// Read access to the line editor.
    pub fn line(&self) -> &LineEditor {
        &self.line
    }
}

/// Writes formatted output to the global console.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    if let Some(console) = CONSOLE.get() {
        let _ = console.lock().writer_mut().write_fmt(args);
    }
}

/// Sets the foreground and background colors of the global console.
pub fn set_color(foreground: Color, background: Color) {
    if let Some(console) = CONSOLE.get() {
        console.lock().writer_mut().set_color(foreground, background);
    }
}

/// Clears the global console screen.
pub fn clear_screen() {
    if let Some(console) = CONSOLE.get() {
        console.lock().writer_mut().clear_screen();
    }
}

/// Shows a prompt on the global console.
pub fn prompt() {
    if let Some(console) = CONSOLE.get() {
        console.lock().prompt();
    }
}

/// Prints to the VGA console.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::console::_print(format_args!($($arg)*)));
}

/// Prints to the VGA console, with a trailing newline.
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)));
}
