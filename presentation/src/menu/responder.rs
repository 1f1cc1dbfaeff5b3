//! Interactive response provider

use super::input::{InputError, LineInput};
use std::io::{BufRead, Write};
use tally_application::{Answer, ResponseProvider, ResponseProviderError};
use tally_domain::Question;
use tracing::debug;

/// Asks the user for one choice per question
pub struct InteractiveResponder<'a, R, W> {
    input: &'a mut LineInput<R>,
    out: &'a mut W,
}

impl<'a, R: BufRead, W: Write> InteractiveResponder<'a, R, W> {
    pub fn new(input: &'a mut LineInput<R>, out: &'a mut W) -> Self {
        Self { input, out }
    }

    fn prompt(&mut self, question: &Question) -> std::io::Result<()> {
        writeln!(self.out, "\nQ: {}", question.text())?;
        for (i, option) in question.options().iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, option)?;
        }
        write!(
            self.out,
            "Enter your choice (1-{}): ",
            question.num_options()
        )?;
        self.out.flush()
    }

    fn reject(&mut self) -> Result<Answer, ResponseProviderError> {
        writeln!(self.out, "Invalid input. Skipping question.").map_err(io_error)?;
        Ok(Answer::NoAnswer)
    }
}

impl<R: BufRead, W: Write> ResponseProvider for InteractiveResponder<'_, R, W> {
    fn answer(
        &mut self,
        position: usize,
        question: &Question,
    ) -> Result<Answer, ResponseProviderError> {
        self.prompt(question).map_err(io_error)?;

        match self.input.read_number() {
            Ok(choice) if (1..=question.num_options() as i64).contains(&choice) => {
                Ok(Answer::Choice(choice as usize - 1))
            }
            Ok(choice) => {
                debug!("Question {}: choice {} out of range", position + 1, choice);
                self.reject()
            }
            Err(InputError::NotANumber(word)) => {
                debug!("Question {}: {:?} is not a number", position + 1, word);
                self.reject()
            }
            Err(InputError::Closed) => Err(ResponseProviderError::Closed),
            Err(InputError::Io(e)) => Err(io_error(e)),
        }
    }
}

fn io_error(e: std::io::Error) -> ResponseProviderError {
    ResponseProviderError::Io(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(script: &str, question: &Question) -> (Result<Answer, ResponseProviderError>, String) {
        let mut input = LineInput::new(Cursor::new(script.as_bytes().to_vec()));
        let mut out = Vec::new();
        let answer = InteractiveResponder::new(&mut input, &mut out).answer(0, question);
        (answer, String::from_utf8(out).unwrap())
    }

    fn question() -> Question {
        Question::new("Favorite?", &["Red", "Blue", "Green"]).unwrap()
    }

    #[test]
    fn test_valid_choice_is_zero_based() {
        let (answer, out) = ask("2\n", &question());
        assert_eq!(answer.unwrap(), Answer::Choice(1));
        assert_eq!(
            out,
            "\nQ: Favorite?\n1. Red\n2. Blue\n3. Green\nEnter your choice (1-3): "
        );
    }

    #[test]
    fn test_out_of_range_is_no_answer() {
        for script in ["0\n", "4\n", "-1\n", "red\n"] {
            let (answer, out) = ask(script, &question());
            assert_eq!(answer.unwrap(), Answer::NoAnswer, "script {:?}", script);
            assert!(out.ends_with("Invalid input. Skipping question.\n"));
        }
    }

    #[test]
    fn test_closed_input() {
        let (answer, _) = ask("", &question());
        assert_eq!(answer.unwrap_err(), ResponseProviderError::Closed);
    }
}
