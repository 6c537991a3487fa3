//! Interactive line prompts.

use std::io::{BufRead, Write};

use tracing::debug;

/// Error type for prompting.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Input ended before a line was read.
    #[error("input closed while waiting for {0:?}")]
    Closed(String),

    /// Reading or writing the console failed.
    #[error("console i/o error")]
    Io(#[from] std::io::Error),
}

/// Writes a prompt, then reads one line of input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `text` and return the next line without its line terminator.
    ///
    /// Surrounding whitespace other than the terminator is preserved.
    pub fn prompt(&mut self, text: &str) -> Result<String, PromptError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed(text.to_string()));
        }
        strip_line_ending(&mut line);
        debug!(prompt = text, answer = %line, "read line");
        Ok(line)
    }

    /// Give back the output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
