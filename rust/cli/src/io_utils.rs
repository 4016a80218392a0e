//! Input helpers for interactive commands.
//!
//! Interactive play reads one line per decision. Setting `MAUMAU_TEST_INPUT`
//! replaces stdin with the variable's content, which lets tests and scripts
//! drive a game without a terminal.

use std::io::{BufRead, Cursor};

/// Environment variable holding scripted input (lines separated by `\n`).
pub const TEST_INPUT_ENV: &str = "MAUMAU_TEST_INPUT";

/// Reads a line of input from a buffered reader, blocking until available.
///
/// It trims whitespace from the input and returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use maumau_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  3 \nx\n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("3"));
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("x"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

/// Scripted input from `MAUMAU_TEST_INPUT`, if set.
///
/// A literal `\n` sequence in the variable is accepted as a line break so that
/// scripts can pass the whole input on one line.
pub fn scripted_input() -> Option<Cursor<Vec<u8>>> {
    let raw = std::env::var(TEST_INPUT_ENV).ok()?;
    let text = raw.replace("\\n", "\n");
    Some(Cursor::new(text.into_bytes()))
}
