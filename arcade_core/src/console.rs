use std::io::{BufRead, Write};

use thiserror::Error;

/// Corrective message shared by every numeric prompt when the reply is not
/// made of decimal digits.
pub const NOT_A_NUMBER: &str = "Please enter a number.";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Prompt/reply surface over an injectable input source and output sink, so
/// sessions run against real stdin/stdout or scripted buffers alike.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` without a newline and reads one reply line, with the
    /// line terminator stripped. End of input is `InputError::Closed`.
    pub fn read_reply(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    pub fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// The one numeric prompt loop used everywhere: re-prompts with
    /// [`NOT_A_NUMBER`] until the reply is all decimal digits, then with
    /// `hint` until the parsed value lands in `[min, max]`. Values too large
    /// for u64 re-prompt through `hint` as well.
    pub fn prompt_int(
        &mut self,
        prompt: &str,
        min: u64,
        max: u64,
        hint: &str,
    ) -> Result<u64, InputError> {
        loop {
            let reply = self.read_reply(prompt)?;
            if !is_digits(&reply) {
                self.say(NOT_A_NUMBER)?;
                continue;
            }
            match reply.parse::<u64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => self.say(hint)?,
            }
        }
    }
}

pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_check() {
        assert!(is_digits("100"));
        assert!(is_digits("007"));
        assert!(!is_digits(""));
        assert!(!is_digits("12a"));
        assert!(!is_digits(" 12"));
        assert!(!is_digits("-5"));
    }
}
