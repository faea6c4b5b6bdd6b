//! Line-oriented terminal used by the game and the menu.

use crate::GameError;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::trace;

/// Prompt/print terminal over any reader and writer.
///
/// The binary uses [`Console::stdio`]; tests drive it with a
/// `Cursor` of scripted input and a `Vec<u8>` for output.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console from an input and an output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), GameError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes `text` without a newline and reads one line of input.
    ///
    /// Returns `None` once input is exhausted. The trailing line ending is
    /// stripped; other whitespace is kept.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, GameError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!(prompt = text, "input exhausted");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        trace!(prompt = text, answer = trimmed, "read line");
        Ok(Some(trimmed.to_string()))
    }

    /// Borrows the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_ending() {
        let mut console = Console::new(Cursor::new("hello\r\nworld"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("world"));
        assert_eq!(console.prompt("> ").unwrap(), None);
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> > > ");
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("Good bye").unwrap();
        assert_eq!(console.output().as_slice(), b"Good bye\n");
    }
}
