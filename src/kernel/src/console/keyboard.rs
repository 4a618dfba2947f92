//! PS/2 scancode decoding.
//!
//! A pure translation from raw scancode-set-1 bytes to console events; the
//! interrupt handler feeds bytes in and performs the hardware acknowledgment
//! itself, so this module carries no side effects.

/// Key events the console reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// A printable ASCII character was typed.
    Char(u8),
    /// The backspace key was pressed.
    Backspace,
    /// The enter key was pressed.
    Enter,
}

/// Key-release events carry the top bit in scancode set 1.
const RELEASE_BIT: u8 = 0x80;

/// Make code of the enter key.
const SCANCODE_ENTER: u8 = 0x1C;

/// Make code of the backspace key.
const SCANCODE_BACKSPACE: u8 = 0x0E;

/// Scancode-set-1 make codes to lowercase ASCII. Zero marks keys the console
/// does not recognize (escape, modifiers, function keys).
const KEYMAP: &[u8] =
    b"\0\01234567890-=\0\0qwertyuiop[]\0\0asdfghjkl;'`\0\\zxcvbnm,./\0*\0 ";

/// Decodes a raw scancode into a console event.
///
/// Release events and unmapped or out-of-range codes yield `None`.
pub fn decode(scancode: u8) -> Option<ConsoleEvent> {
    if scancode & RELEASE_BIT != 0 {
        return None;
    }
    match scancode {
        SCANCODE_ENTER => Some(ConsoleEvent::Enter),
        SCANCODE_BACKSPACE => Some(ConsoleEvent::Backspace),
        code => match KEYMAP.get(code as usize) {
            Some(&ch) if ch != 0 => Some(ConsoleEvent::Char(ch)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_decode_to_lowercase_ascii() {
        assert_eq!(decode(0x1E), Some(ConsoleEvent::Char(b'a')));
        assert_eq!(decode(0x10), Some(ConsoleEvent::Char(b'q')));
        assert_eq!(decode(0x2C), Some(ConsoleEvent::Char(b'z')));
    }

    #[test]
    fn digits_and_punctuation_decode() {
        assert_eq!(decode(0x02), Some(ConsoleEvent::Char(b'1')));
        assert_eq!(decode(0x0B), Some(ConsoleEvent::Char(b'0')));
        assert_eq!(decode(0x0C), Some(ConsoleEvent::Char(b'-')));
        assert_eq!(decode(0x35), Some(ConsoleEvent::Char(b'/')));
        assert_eq!(decode(0x39), Some(ConsoleEvent::Char(b' ')));
    }

    #[test]
    fn enter_and_backspace_are_events() {
        assert_eq!(decode(0x1C), Some(ConsoleEvent::Enter));
        assert_eq!(decode(0x0E), Some(ConsoleEvent::Backspace));
    }

    #[test]
    fn release_events_are_filtered() {
        assert_eq!(decode(0x9E), None);
        assert_eq!(decode(0x80), None);
        assert_eq!(decode(0xFF), None);
    }

    #[test]
    fn unmapped_and_out_of_range_codes_yield_none() {
        assert_eq!(decode(0x00), None);
        assert_eq!(decode(0x01), None); // escape
        assert_eq!(decode(0x1D), None); // left ctrl
        assert_eq!(decode(0x2A), None); // left shift
        assert_eq!(decode(0x3B), None); // F1, past the table
        assert_eq!(decode(0x7F), None);
    }
}
