//! The text boundary between the game and whoever is playing it.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::GameError;

/// Line-based request and response channel used by the game.
///
/// The game never touches stdin or stdout directly, so a scripted table can
/// stand in for the console.
pub trait Table {
    /// Shows `prompt` and blocks until a line of input is available.
    ///
    /// The returned line has surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InputClosed`] at end of input, or an I/O error.
    fn ask(&mut self, prompt: &str) -> Result<String, GameError>;

    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn say(&mut self, line: &str) -> Result<(), GameError>;
}

/// A [`Table`] over any buffered reader and writer.
///
/// # Example
///
/// ```
/// use blackjack_round::{Console, Table};
///
/// let mut console = Console::new(&b"hit\n"[..], Vec::new());
/// assert_eq!(console.ask("Action: ").unwrap(), "hit");
/// assert_eq!(console.output(), b"Action: ");
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Creates a console on the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Table for Console<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, line: &str) -> Result<(), GameError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
