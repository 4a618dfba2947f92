//! VGA text mode driver for x86_64.
//!
//! Owns the 80x25 text grid at 0xB8000, the cursor position, and the current
//! color attribute. Output scrolls when it would pass the last row, and the
//! hardware cursor is mirrored through the CRT controller ports after every
//! cursor-affecting operation.

use core::fmt;
use core::ptr;
use ember_hal::PortIo;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// Number of rows in VGA text mode.
pub const BUFFER_HEIGHT: usize = 25;

/// Number of columns in VGA text mode.
pub const BUFFER_WIDTH: usize = 80;

/// CRT controller index register.
const CRT_INDEX_PORT: u16 = 0x3D4;

/// CRT controller data register.
const CRT_DATA_PORT: u16 = 0x3D5;

/// CRT register index of the cursor position low byte.
const CURSOR_LOW: u8 = 0x0F;

/// CRT register index of the cursor position high byte.
const CURSOR_HIGH: u8 = 0x0E;

/// Placeholder glyph for bytes outside printable ASCII.
const PLACEHOLDER: u8 = 0xFE;

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

impl Color {
    /// Maps a palette index to its color, for the `color` console command.
    pub fn from_index(index: u8) -> Color {
        match index {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Brown,
            7 => Color::LightGray,
            8 => Color::DarkGray,
            9 => Color::LightBlue,
            10 => Color::LightGreen,
            11 => Color::LightCyan,
            12 => Color::LightRed,
            13 => Color::Pink,
            14 => Color::Yellow,
            _ => Color::White,
        }
    }
}

/// Combined foreground and background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
struct ColorCode(u8);

impl ColorCode {
    /// Creates a new color code from foreground and background colors.
    const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }
}

/// A single character cell in the VGA buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
struct ScreenChar {
    ascii_character: u8,
    color_code: ColorCode,
}

/// The VGA text buffer layout.
#[repr(transparent)]
pub(crate) struct Buffer {
    chars: [[ScreenChar; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

/// VGA text mode writer.
///
/// Manages the cursor position and color state for writing to the text grid.
/// The hardware cursor registers are reached through the injected `PortIo`
/// capability, so tests can assert the exact cursor-sync byte sequence.
pub struct Writer<P: PortIo> {
    /// Current column position (0 to BUFFER_WIDTH-1).
    x: usize,
    /// Current row position (0 to BUFFER_HEIGHT-1).
    y: usize,
    /// Current color code for new characters.
    color_code: ColorCode,
    /// Pointer to the text buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the writer. In
    /// production it is the VGA buffer at 0xB8000, which is always mapped in
    /// x86 protected mode; tests point it at a heap allocation instead.
    buffer: *mut Buffer,
    /// Port capability used for hardware cursor synchronization.
    ports: P,
}

// SAFETY: Writer only accesses the text buffer through volatile operations.
// In production the buffer is memory-mapped hardware that exists for the
// kernel's lifetime, and access is serialized by the console lock.
unsafe impl<P: PortIo + Send> Send for Writer<P> {}

impl<P: PortIo> Writer<P> {
    /// Creates a writer over the hardware VGA buffer.
    pub fn new(ports: P) -> Self {
        // SAFETY: VGA_BUFFER_ADDR (0xB8000) is the standard VGA text buffer
        // address on x86 systems. This memory is always present and mapped
        // when running on x86 hardware or in QEMU.
        Self::with_buffer(VGA_BUFFER_ADDR as *mut Buffer, ports)
    }

    /// Creates a writer over an arbitrary buffer. Used by tests.
    pub(crate) fn with_buffer(buffer: *mut Buffer, ports: P) -> Self {
        Writer {
            x: 0,
            y: 0,
            color_code: ColorCode::new(Color::White, Color::Black),
            buffer,
            ports,
        }
    }

    /// Sets the foreground and background colors for subsequent writes.
    ///
    /// Has no immediate visual effect; the attribute applies to every cell
    /// written afterwards, including blanks produced by scrolling, clearing,
    /// and backspace erasure.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color_code = ColorCode::new(foreground, background);
    }

    /// Returns the current packed attribute byte.
    pub(crate) fn attribute(&self) -> u8 {
        self.color_code.0
    }

    /// Returns the current cursor position as `(x, y)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Writes a single byte and syncs the hardware cursor.
    ///
    /// `\n`, `\r`, `\t` and backspace (0x08) move the cursor instead of
    /// printing; any other byte is written at the cursor cell. Output that
    /// passes the last column wraps, and output that passes the last row
    /// scrolls.
    pub fn write_byte(&mut self, byte: u8) {
        self.put_byte(byte);
        self.sync_cursor();
    }

    fn put_byte(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.x = 0;
                self.advance_row();
            }
            0x08 => self.erase_backwards(),
            b'\r' => self.x = 0,
            b'\t' => {
                // Next multiple of four, no cell written.
                self.x = (self.x + 4) & !3;
                if self.x >= BUFFER_WIDTH {
                    self.x = 0;
                    self.advance_row();
                }
            }
            byte => {
                self.write_cell(
                    self.y,
                    self.x,
                    ScreenChar {
                        ascii_character: byte,
                        color_code: self.color_code,
                    },
                );
                self.x += 1;
                if self.x >= BUFFER_WIDTH {
                    self.x = 0;
                    self.advance_row();
                }
            }
        }
    }

    /// Moves to the next row, scrolling when the cursor would leave the grid.
    fn advance_row(&mut self) {
        self.y += 1;
        if self.y >= BUFFER_HEIGHT {
            self.y = BUFFER_HEIGHT - 1;
            self.scroll();
        }
    }

    /// Scrolls the grid up by one row and blanks the last row.
    fn scroll(&mut self) {
        for row in 1..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                // SAFETY: row is in range [1, BUFFER_HEIGHT), col is in range
                // [0, BUFFER_WIDTH), so both indices are valid. Volatile
                // operations because the buffer is memory-mapped I/O.
                unsafe {
                    let character = ptr::read_volatile(&(*self.buffer).chars[row][col]);
                    ptr::write_volatile(&mut (*self.buffer).chars[row - 1][col], character);
                }
            }
        }
        self.clear_row(BUFFER_HEIGHT - 1);
    }

    /// Moves the cursor one cell back (wrapping to the end of the previous
    /// row) and blanks the cell it lands on.
    fn erase_backwards(&mut self) {
        if self.x > 0 {
            self.x -= 1;
        } else if self.y > 0 {
            self.y -= 1;
            self.x = BUFFER_WIDTH - 1;
        }
        let blank = self.blank();
        self.write_cell(self.y, self.x, blank);
    }

    fn blank(&self) -> ScreenChar {
        ScreenChar {
            ascii_character: b' ',
            color_code: self.color_code,
        }
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar) {
        debug_assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH, "cell out of bounds");

        // SAFETY: the cursor invariant keeps row < BUFFER_HEIGHT and
        // col < BUFFER_WIDTH; the buffer pointer was validated at
        // construction time. Volatile write because the VGA buffer is
        // memory-mapped I/O that may be read by hardware at any time.
        unsafe {
            ptr::write_volatile(&mut (*self.buffer).chars[row][col], cell);
        }
    }

    /// Clears a single row by filling it with blanks in the current attribute.
    fn clear_row(&mut self, row: usize) {
        let blank = self.blank();
        for col in 0..BUFFER_WIDTH {
            self.write_cell(row, col, blank);
        }
    }

    /// Clears the entire screen and homes the cursor.
    pub fn clear_screen(&mut self) {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.x = 0;
        self.y = 0;
        self.sync_cursor();
    }

    /// Pushes the cursor position to the CRT controller.
    ///
    /// The position is written as two index/data pairs: low byte under
    /// register 0x0F, then high byte under register 0x0E. This is the only
    /// externally observable effect on the physical cursor indicator.
    fn sync_cursor(&mut self) {
        let position = (self.y * BUFFER_WIDTH + self.x) as u16;
        self.ports.write(CRT_INDEX_PORT, CURSOR_LOW);
        self.ports.write(CRT_DATA_PORT, (position & 0xFF) as u8);
        self.ports.write(CRT_INDEX_PORT, CURSOR_HIGH);
        self.ports.write(CRT_DATA_PORT, (position >> 8) as u8);
    }

    /// Returns the port capability, for test inspection.
    #[cfg(test)]
    pub(crate) fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }
}

impl<P: PortIo> fmt::Write for Writer<P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                // Printable ASCII or a cursor-moving control byte
                0x20..=0x7e | b'\n' | b'\r' | b'\t' | 0x08 => self.put_byte(byte),
                // Non-printable: show placeholder
                _ => self.put_byte(PLACEHOLDER),
            }
        }
        self.sync_cursor();
        Ok(())
    }
}
