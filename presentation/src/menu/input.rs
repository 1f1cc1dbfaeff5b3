//! Line-oriented input parsing

use std::io::{self, BufRead};
use thiserror::Error;

/// Errors that can occur while reading user input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input closed")]
    Closed,

    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reads one answer per line
pub struct LineInput<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    /// Next line without its line terminator
    pub fn read_line(&mut self) -> Result<&str, InputError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(self.buf.trim_end_matches(['\n', '\r']))
    }

    /// Next line as owned text
    pub fn read_text(&mut self) -> Result<String, InputError> {
        self.read_line().map(str::to_string)
    }

    /// Integer at the start of the next non-blank line
    ///
    /// Only the leading `[+-]digits` of the first word count, so `2x`
    /// reads as 2. Anything after it is discarded.
    pub fn read_number(&mut self) -> Result<i64, InputError> {
        loop {
            let line = self.read_line()?;
            let Some(word) = line.split_whitespace().next() else {
                continue;
            };
            return leading_integer(word)
                .ok_or_else(|| InputError::NotANumber(word.to_string()));
        }
    }
}

fn leading_integer(word: &str) -> Option<i64> {
    let unsigned = word.strip_prefix(['+', '-']).unwrap_or(word);
    let sign = word.len() - unsigned.len();
    let digits = unsigned.len()
        - unsigned
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();
    word[..sign + digits].parse().ok()
}
