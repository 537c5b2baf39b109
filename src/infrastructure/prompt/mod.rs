//! Line-based confirmation prompt
//!
//! Used when stdin is not a terminal (piped answers, CI). Reads one line;
//! `y` or `yes` (any case) continues, anything else declines, end of input
//! declines.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::domain::ports::Confirm;

pub struct LineConfirm<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl LineConfirm<io::StdinLock<'static>, io::Stderr> {
    /// Read answers from stdin, print prompts to stderr
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&self, prompt: &str) -> Result<bool, String> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{} [y/N] ", prompt).map_err(|e| e.to_string())?;
            out.flush().map_err(|e| e.to_string())?;
        }

        let mut line = String::new();
        let read = self
            .input
            .borrow_mut()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            return Ok(false);
        }

        Ok(is_yes(&line))
    }
}

/// `y`/`yes`, ignoring case and surrounding whitespace
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
