use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::InputError;

/// Line-oriented terminal wrapper. Generic over its streams so sessions can
/// be driven from in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Shows `label` and reads one line, without its line terminator.
    ///
    /// # Errors
    /// [`InputError::EndOfInput`] once the input stream is exhausted.
    pub fn prompt(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompts until the answer parses as a `T`.
    ///
    /// Unparseable answers are reported and asked again; only end of input
    /// and I/O failures escape.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<T, InputError> {
        loop {
            let raw = self.prompt(label)?;
            match parse_number(&raw) {
                Ok(value) => return Ok(value),
                Err(err @ InputError::NotANumber { .. }) => {
                    debug!(error = %err, "Rejected numeric input");
                    self.say(format!("{err}. Please enter a number."))?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a number, ignoring surrounding whitespace.
pub fn parse_number<T: FromStr>(raw: &str) -> Result<T, InputError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })
}
