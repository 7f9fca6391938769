/// Line-based prompting
///
/// Generic over the reader and writer so sessions can be driven from
/// memory in tests.

use crate::error::Result;
use std::io::{self, BufRead, ErrorKind, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Ask a question and read one line back
    ///
    /// A line that isn't valid UTF-8 is rejected and the question asked again.
    ///
    /// # Returns
    /// * `Ok(Some(line))` - The answer, without its line ending
    /// * `Ok(None)` - Input is closed
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            // read_line consumes the bad line before reporting InvalidData
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    let answer = line.trim_end_matches(['\n', '\r']).to_string();
                    return Ok(Some(answer));
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.say("That line wasn't valid text. Please try again.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Keep asking until `parse` accepts the answer
    ///
    /// Each rejection is explained to the user before asking again.
    /// Returns `Ok(None)` if input closes first.
    pub fn ask_until<T, F>(&mut self, question: &str, mut parse: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T>,
    {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };

            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(&e.user_message())?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
