//! Command-line parsing.
//!
//! A committed line is split into a command word and an argument tail, both
//! bounded. The command word is matched case-sensitively against the built-in
//! table; anything else becomes [`Command::Unknown`].

/// Maximum length of the command word. Longer words are cut here and the
/// remainder spills into the argument tail.
pub const MAX_COMMAND: usize = 31;

/// Maximum length of the argument tail. Anything past it is dropped.
pub const MAX_ARGS: usize = 95;

/// A parsed console command. Borrowed slices point into the committed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Print the list of available commands.
    Help,
    /// Clear the screen.
    Clear,
    /// Print the argument tail.
    Echo(&'a str),
    /// Reset the machine.
    Reboot,
    /// Power the machine off.
    Shutdown,
    /// Print the kernel version line.
    Version,
    /// Change the text color; the tail names the color index.
    Color(&'a str),
    /// Print the directory listing.
    List,
    /// Print the current time.
    Time,
    /// Print the current date.
    Date,
    /// Print the calculator placeholder line.
    Calc,
    /// Print the memory summary line.
    Mem,
    /// Clear the screen and log out.
    Exit,
    /// Anything that matched no built-in; carries the command word.
    Unknown(&'a str),
}

/// Splits a line into its command word and argument tail.
///
/// Returns `None` when the line holds no command word at all. The word is
/// capped at [`MAX_COMMAND`] bytes and the tail at [`MAX_ARGS`] bytes, both
/// cut silently.
pub fn parse(line: &str) -> Option<Command<'_>> {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }

    let word_start = i;
    while i < bytes.len() && bytes[i] != b' ' && i - word_start < MAX_COMMAND {
        i += 1;
    }
    let word = &line[word_start..i];
    if word.is_empty() {
        return None;
    }

    while i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }

    let args_end = (i + MAX_ARGS).min(bytes.len());
    let args = &line[i..args_end];

    Some(match word {
        "help" => Command::Help,
        "clear" | "cls" => Command::Clear,
        "echo" => Command::Echo(args),
        "reboot" => Command::Reboot,
        "shutdown" => Command::Shutdown,
        "ver" => Command::Version,
        "color" => Command::Color(args),
        "ls" => Command::List,
        "time" => Command::Time,
        "date" => Command::Date,
        "calc" => Command::Calc,
        "mem" => Command::Mem,
        "exit" => Command::Exit,
        _ => Command::Unknown(word),
    })
}

pub(crate) const HELP_TEXT: &str = "\nAvailable commands:\n\
    \x20 clear     - Clear screen\n\
    \x20 echo      - Display message\n\
    \x20 reboot    - Restart system\n\
    \x20 shutdown  - Power off\n\
    \x20 ver       - Show version\n\
    \x20 color     - Change color\n\
    \x20 ls        - List files\n\
    \x20 time      - Show time\n\
    \x20 date      - Show date\n\
    \x20 calc      - Calculator\n\
    \x20 mem       - Memory info\n\
    \x20 cls       - Clear screen\n\
    \x20 exit      - Exit shell\n";

pub(crate) const VERSION_TEXT: &str = "\nEmberOS v2.0 - Terminal Edition";

pub(crate) const LS_TEXT: &str = "\nbin/    dev/    etc/    home/\n\
    lib/    proc/   root/   tmp/\n\
    usr/    var/    boot/   sys/";

pub(crate) const TIME_TEXT: &str = "\n00:00:00 UTC";

pub(crate) const DATE_TEXT: &str = "\n2024-01-01";

pub(crate) const CALC_TEXT: &str = "\nCalculator: Enter expression";

pub(crate) const MEM_TEXT: &str = "\nMemory: 64MB total, 32MB free";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_commands_parse() {
        assert_eq!(parse("help"), Some(Command::Help));
        assert_eq!(parse("clear"), Some(Command::Clear));
        assert_eq!(parse("cls"), Some(Command::Clear));
        assert_eq!(parse("ver"), Some(Command::Version));
        assert_eq!(parse("exit"), Some(Command::Exit));
    }

    #[test]
    fn leading_spaces_are_skipped() {
        assert_eq!(parse("   reboot"), Some(Command::Reboot));
    }

    #[test]
    fn blank_lines_yield_none() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("     "), None);
    }

    #[test]
    fn echo_captures_the_argument_tail() {
        assert_eq!(parse("echo hello world"), Some(Command::Echo("hello world")));
        assert_eq!(parse("echo"), Some(Command::Echo("")));
        assert_eq!(parse("echo    spaced"), Some(Command::Echo("spaced")));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(parse("Help"), Some(Command::Unknown("Help")));
        assert_eq!(parse("ECHO hi"), Some(Command::Unknown("ECHO")));
    }

    #[test]
    fn unknown_carries_the_command_word_only() {
        assert_eq!(parse("frobnicate now"), Some(Command::Unknown("frobnicate")));
    }

    #[test]
    fn long_words_are_cut_and_spill_into_the_tail() {
        // 40 x's: the word is the first 31, the rest lands in the tail.
        let line = "x".repeat(40);
        match parse(&line) {
            Some(Command::Unknown(word)) => assert_eq!(word.len(), MAX_COMMAND),
            other => panic!("unexpected parse: {:?}", other),
        }

        let echo_line = format!("{} tail", "echo".to_owned() + &"y".repeat(35));
        match parse(&echo_line) {
            Some(Command::Unknown(word)) => {
                assert_eq!(word.len(), MAX_COMMAND);
                assert!(word.starts_with("echo"));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn argument_tail_is_capped() {
        let line = format!("echo {}", "a".repeat(200));
        match parse(&line) {
            Some(Command::Echo(args)) => assert_eq!(args.len(), MAX_ARGS),
            other => panic!("unexpected parse: {:?}", other),
        }
    }
}
