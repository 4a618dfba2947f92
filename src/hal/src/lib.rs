//! EmberOS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines the port I/O capability that platform drivers are
//! written against. Production code implements it over real x86 I/O
//! instructions; tests substitute [`FakePortIo`] to assert the exact byte
//! sequences a driver emits.

#![cfg_attr(not(test), no_std)]

/// Trait for byte-wide x86-style port I/O.
///
/// Implementations must complete each operation synchronously before
/// returning.
pub trait PortIo {
    /// Reads a byte from an I/O port.
    fn read(&mut self, port: u16) -> u8;
    /// Writes a byte to an I/O port.
    fn write(&mut self, port: u16, value: u8);
}

/// Capacity of the scripted-read and captured-write logs in [`FakePortIo`].
const FAKE_LOG_CAPACITY: usize = 4096;

/// In-memory port I/O double for tests.
///
/// Reads are scripted in advance and must be consumed in order from the
/// expected port; writes are captured for later inspection. Exceeding a log
/// or reading off-script panics, which surfaces driver protocol bugs
/// directly in the failing test.
pub struct FakePortIo {
    reads: [(u16, u8); FAKE_LOG_CAPACITY],
    read_len: usize,
    read_index: usize,
    writes: [(u16, u8); FAKE_LOG_CAPACITY],
    write_len: usize,
}

impl FakePortIo {
    /// Creates an empty fake with no scripted reads and no captured writes.
    pub const fn new() -> Self {
        FakePortIo {
            reads: [(0, 0); FAKE_LOG_CAPACITY],
            read_len: 0,
            read_index: 0,
            writes: [(0, 0); FAKE_LOG_CAPACITY],
            write_len: 0,
        }
    }

    /// Scripts the next read: `read(port)` will return `value`.
    pub fn script_read(&mut self, port: u16, value: u8) {
        assert!(
            self.read_len < FAKE_LOG_CAPACITY,
            "FakePortIo: read script full"
        );
        self.reads[self.read_len] = (port, value);
        self.read_len += 1;
    }

    /// Returns the number of scripted reads not yet consumed.
    pub fn remaining_reads(&self) -> usize {
        self.read_len - self.read_index
    }

    /// Returns all captured writes in issue order.
    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes[..self.write_len]
    }

    /// Discards the captured writes.
    pub fn clear_writes(&mut self) {
        self.write_len = 0;
    }
}

impl Default for FakePortIo {
    fn default() -> Self {
        Self::new()
    }
}

impl PortIo for FakePortIo {
    fn read(&mut self, port: u16) -> u8 {
        if self.read_index >= self.read_len {
            panic!("FakePortIo: no scripted read for port {:#06x}", port);
        }
        let (expected_port, value) = self.reads[self.read_index];
        if port != expected_port {
            panic!(
                "FakePortIo: read {} expected port {:#06x}, got {:#06x}",
                self.read_index, expected_port, port
            );
        }
        self.read_index += 1;
        value
    }

    fn write(&mut self, port: u16, value: u8) {
        assert!(
            self.write_len < FAKE_LOG_CAPACITY,
            "FakePortIo: write log full"
        );
        self.writes[self.write_len] = (port, value);
        self.write_len += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_reads_consumed_in_order() {
        let mut io = FakePortIo::new();
        io.script_read(0x64, 0x01);
        io.script_read(0x60, 0x1E);

        assert_eq!(io.remaining_reads(), 2);
        assert_eq!(io.read(0x64), 0x01);
        assert_eq!(io.read(0x60), 0x1E);
        assert_eq!(io.remaining_reads(), 0);
    }

    #[test]
    fn writes_are_captured_in_order() {
        let mut io = FakePortIo::new();
        io.write(0x3D4, 0x0F);
        io.write(0x3D5, 0x50);

        assert_eq!(io.writes(), &[(0x3D4, 0x0F), (0x3D5, 0x50)]);
    }

    #[test]
    fn clear_writes_resets_the_log() {
        let mut io = FakePortIo::new();
        io.write(0x60, 0xFF);
        assert_eq!(io.writes().len(), 1);

        io.clear_writes();
        assert!(io.writes().is_empty());
    }

    #[test]
    #[should_panic(expected = "no scripted read")]
    fn unscripted_read_panics() {
        let mut io = FakePortIo::new();
        io.read(0x60);
    }

    #[test]
    #[should_panic(expected = "expected port")]
    fn read_from_wrong_port_panics() {
        let mut io = FakePortIo::new();
        io.script_read(0x64, 0x01);
        io.read(0x60);
    }
}
