//! Bounded line editing and command history.

/// Command buffer capacity. One slot is reserved, so a completed line holds
/// at most `CMD_BUFFER_SIZE - 1` bytes; input past that is silently dropped.
pub const CMD_BUFFER_SIZE: usize = 128;

/// Maximum number of remembered command lines.
pub const MAX_HISTORY: usize = 10;

/// Fixed-capacity store of past command lines.
///
/// Entries are immutable copies taken at commit time, kept in insertion
/// order; once full, the oldest entry is evicted. Write-only for now: the
/// navigation cursor exists for future recall keys and is reset to the entry
/// count on every commit.
pub struct History {
    entries: [[u8; CMD_BUFFER_SIZE]; MAX_HISTORY],
    lengths: [usize; MAX_HISTORY],
    count: usize,
    cursor: usize,
}

impl History {
    const fn new() -> Self {
        History {
            entries: [[0; CMD_BUFFER_SIZE]; MAX_HISTORY],
            lengths: [0; MAX_HISTORY],
            count: 0,
            cursor: 0,
        }
    }

    fn push(&mut self, line: &[u8]) {
        if self.count == MAX_HISTORY {
            // Shift everything down one slot, discarding the oldest entry.
            for i in 0..MAX_HISTORY - 1 {
                self.entries[i] = self.entries[i + 1];
                self.lengths[i] = self.lengths[i + 1];
            }
            self.count -= 1;
        }
        let len = line.len().min(CMD_BUFFER_SIZE - 1);
        self.entries[self.count][..len].copy_from_slice(&line[..len]);
        self.lengths[self.count] = len;
        self.count += 1;
        self.cursor = self.count;
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the history holds no entries.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Position of the navigation cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the entry at `index`, oldest first.
    pub fn entry(&self, index: usize) -> Option<&str> {
        if index >= self.count {
            return None;
        }
        core::str::from_utf8(&self.entries[index][..self.lengths[index]]).ok()
    }
}

/// Accumulates decoded characters into a bounded command buffer.
///
/// The caller echoes accepted input and erasures to the display; this type
/// only tracks buffer state and the history.
pub struct LineEditor {
    buf: [u8; CMD_BUFFER_SIZE],
    len: usize,
    history: History,
}

impl LineEditor {
    /// Creates an empty line editor with empty history.
    pub const fn new() -> Self {
        LineEditor {
            buf: [0; CMD_BUFFER_SIZE],
            len: 0,
            history: History::new(),
        }
    }

    /// Appends a byte, reporting whether it was accepted.
    ///
    /// At capacity the byte is silently dropped and `false` is returned so
    /// the caller skips the echo.
    pub fn insert(&mut self, byte: u8) -> bool {
        if self.len < CMD_BUFFER_SIZE - 1 {
            self.buf[self.len] = byte;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Drops the last byte, reporting whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        if self.len > 0 {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Whether the buffer currently holds no input.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current input length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Discards any pending input.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Commits the current line: copies it into `out`, records it in the
    /// history, and resets the buffer. Returns the line length.
    pub fn take_line(&mut self, out: &mut [u8; CMD_BUFFER_SIZE]) -> usize {
        let len = self.len;
        out[..len].copy_from_slice(&self.buf[..len]);
        self.history.push(&self.buf[..len]);
        self.len = 0;
        len
    }

    /// Read access to the command history.
    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(editor: &mut LineEditor, s: &str) {
        for byte in s.bytes() {
            editor.insert(byte);
        }
    }

    fn commit(editor: &mut LineEditor) -> usize {
        let mut out = [0u8; CMD_BUFFER_SIZE];
        editor.take_line(&mut out)
    }

    #[test]
    fn committed_line_matches_typed_input() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "echo hello");

        let mut out = [0u8; CMD_BUFFER_SIZE];
        let len = editor.take_line(&mut out);

        assert_eq!(&out[..len], b"echo hello");
        assert!(editor.is_empty());
        assert_eq!(editor.history().entry(0), Some("echo hello"));
    }

    #[test]
    fn overflow_keeps_first_capacity_minus_one_bytes() {
        let mut editor = LineEditor::new();
        for i in 0..CMD_BUFFER_SIZE {
            let accepted = editor.insert(b'a' + (i % 26) as u8);
            assert_eq!(accepted, i < CMD_BUFFER_SIZE - 1);
        }

        assert_eq!(editor.len(), CMD_BUFFER_SIZE - 1);

        let mut out = [0u8; CMD_BUFFER_SIZE];
        let len = editor.take_line(&mut out);
        assert_eq!(len, CMD_BUFFER_SIZE - 1);
        assert_eq!(out[0], b'a');
    }

    #[test]
    fn backspace_on_empty_buffer_is_a_no_op() {
        let mut editor = LineEditor::new();

        assert!(!editor.backspace());
        assert!(editor.is_empty());
    }

    #[test]
    fn backspace_drops_last_byte() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "ab");

        assert!(editor.backspace());
        assert_eq!(editor.len(), 1);

        let mut out = [0u8; CMD_BUFFER_SIZE];
        let len = editor.take_line(&mut out);
        assert_eq!(&out[..len], b"a");
    }

    #[test]
    fn history_keeps_the_ten_most_recent_entries() {
        let mut editor = LineEditor::new();
        for i in 0..MAX_HISTORY + 3 {
            type_str(&mut editor, &format!("cmd{}", i));
            commit(&mut editor);
        }

        let history = editor.history();
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entry(0), Some("cmd3"));
        assert_eq!(history.entry(MAX_HISTORY - 1), Some("cmd12"));
        assert_eq!(history.entry(MAX_HISTORY), None);
    }

    #[test]
    fn history_cursor_resets_to_count_on_commit() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "ver");
        commit(&mut editor);
        assert_eq!(editor.history().cursor(), 1);

        type_str(&mut editor, "help");
        commit(&mut editor);
        assert_eq!(editor.history().cursor(), 2);
    }

    #[test]
    fn reset_discards_pending_input() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "half a comm");

        editor.reset();

        assert!(editor.is_empty());
        assert!(editor.history().is_empty());
    }
}
