use std::io::{BufRead, Write};

use catalog_core::error::{Error, Result};
use catalog_core::interpolation::render_message;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use log::debug;

use super::fields::FieldParser;
use super::{DEFAULT_INDENTATION, PAUSE_MESSAGE};

/// Line-oriented console helper over any reader and writer.
///
/// Every read goes through [`Prompter::ask`], which reports end of input as
/// [`Error::Interrupted`]. That error is the only way out of a prompt loop
/// besides valid input, so callers should let it bubble up to `main`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    indent: usize,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            indent: DEFAULT_INDENTATION,
            clear_screen: true,
        }
    }

    #[must_use]
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Prints the message and reads one line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] at end of input, or an IO error.
    pub fn ask(&mut self, msg: &str) -> Result<String> {
        write!(self.writer, "{}{}", self.padding(), msg)?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(Error::Interrupted);
        }

        Ok(input.trim_end_matches(&['\n', '\r'][..]).to_string())
    }

    /// Asks until the field parser accepts the input.
    ///
    /// `error_msg` may use a `{value}` placeholder for the rejected input. There
    /// is no retry limit; the loop only ends early on [`Error::Interrupted`].
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed or the error message template is invalid.
    pub fn accept<F: FieldParser>(
        &mut self,
        msg: &str,
        error_msg: &str,
        field: &F,
    ) -> Result<F::Output> {
        loop {
            let value = self.ask(msg)?;
            match field.parse(&value) {
                Ok(parsed) => return Ok(parsed),
                Err(e) => {
                    debug!("Rejected input `{}`: {}", value, e);
                    let message = render_message(error_msg, &value)?;
                    self.show_msg(&message)?;
                }
            }
        }
    }

    pub fn show_msg(&mut self, msg: &str) -> Result<()> {
        writeln!(self.writer, "{}{}", self.padding(), msg)?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// Waits for the user to press ENTER.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] at end of input, or an IO error.
    pub fn pause(&mut self) -> Result<()> {
        self.ask(PAUSE_MESSAGE)?;
        Ok(())
    }

    /// Clears the terminal, unless screen clearing is turned off.
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
            self.writer.flush()?;
        }
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn padding(&self) -> String {
        " ".repeat(self.indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::fields::IntegerField;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).with_clear_screen(false)
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_writer()).unwrap()
    }

    #[test]
    fn test_ask_strips_line_ending() {
        let mut prompter = prompter("pt\r\n");
        assert_eq!(prompter.ask("OPÇÃO> ").unwrap(), "pt");
        assert_eq!(output(prompter), "   OPÇÃO> ");
    }

    #[test]
    fn test_ask_end_of_input() {
        let mut prompter = prompter("");
        assert!(matches!(prompter.ask("> "), Err(Error::Interrupted)));
    }

    #[test]
    fn test_accept_retries_until_valid() {
        let mut prompter = prompter("abc\n-3\n7\n");
        let value = prompter
            .accept("ID: ", "ID {value} inválido!", &IntegerField)
            .unwrap();

        assert_eq!(value, 7);
        let printed = output(prompter);
        assert!(printed.contains("ID abc inválido!"));
        assert!(printed.contains("ID -3 inválido!"));
        assert_eq!(printed.matches("ID: ").count(), 3);
    }

    #[test]
    fn test_accept_interrupted_while_retrying() {
        let mut prompter = prompter("abc\n");
        let result = prompter.accept("ID: ", "ID {value} inválido!", &IntegerField);
        assert!(matches!(result, Err(Error::Interrupted)));
    }

    #[test]
    fn test_clear_disabled_writes_nothing() {
        let mut prompter = prompter("");
        prompter.clear().unwrap();
        assert!(output(prompter).is_empty());
    }

    #[test]
    fn test_clear_enabled_writes_escape_sequence() {
        let mut prompter =
            Prompter::new(Cursor::new(Vec::new()), Vec::new()).with_clear_screen(true);
        prompter.clear().unwrap();
        assert!(output(prompter).starts_with('\u{1b}'));
    }
}
