//! Line-oriented terminal input and output.

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Source of player input, one line per move attempt.
pub trait LineReader {
    /// Blocks until a full line is available and returns it.
    ///
    /// End of input is an error: a game cannot continue without its players.
    fn read_line(&mut self) -> Result<String, TerminalError>;
}

/// Destination for everything the game shows the players.
pub trait LineWriter {
    /// Writes `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<(), TerminalError>;
}

/// Terminal I/O failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Terminal error: {} at {}:{}", message, file, line)]
pub struct TerminalError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TerminalError {
    /// Creates a new terminal error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for TerminalError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Reads lines from `R` and writes lines to `W`.
///
/// In the binary these are locked stdin and stdout; tests hand in byte
/// buffers.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream, dropping the input.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LineReader for Terminal<R, W> {
    fn read_line(&mut self) -> Result<String, TerminalError> {
        let mut buf = Vec::new();
        let read = self.input.read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Err(TerminalError::new("Input closed before the game finished"));
        }
        // Undecodable bytes stay in the line so validation rejects it like any other typo.
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        debug!(line = %line, "Read input line");
        Ok(line)
    }
}

impl<R: BufRead, W: Write> LineWriter for Terminal<R, W> {
    fn write_line(&mut self, line: &str) -> Result<(), TerminalError> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_without_newline() {
        let mut term = Terminal::new(Cursor::new("4\r\n hello \n"), Vec::new());
        assert_eq!(term.read_line().unwrap(), "4");
        assert_eq!(term.read_line().unwrap(), " hello ");
    }

    #[test]
    fn test_non_utf8_line_is_read_lossily() {
        let mut term = Terminal::new(Cursor::new(&b"\xff\xfe\n4\n"[..]), Vec::new());
        let garbled = term.read_line().unwrap();
        assert!(garbled.chars().all(|c| c == char::REPLACEMENT_CHARACTER));
        assert_eq!(term.read_line().unwrap(), "4");
    }

    #[test]
    fn test_end_of_input_is_error() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        let err = term.read_line().unwrap_err();
        assert!(err.message.contains("Input closed"));
    }

    #[test]
    fn test_writes_one_line_per_call() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        term.write_line("X | - | -").unwrap();
        term.write_line("Draw!").unwrap();
        let out = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(out, "X | - | -\nDraw!\n");
    }
}
