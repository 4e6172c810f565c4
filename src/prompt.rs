use std::io::{self, BufRead, Stdout, Write};

use anyhow::Context;

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool>;
}

/// `yes` or `y`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// Prompts on a writer and reads one line of the answer from a reader.
pub struct ConsoleConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsoleConfirm<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for ConsoleConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        write!(self.output, "{question}").context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;

        let mut answer = String::new();
        // EOF leaves the answer empty, which declines.
        self.input
            .read_line(&mut answer)
            .context("reading confirmation answer")?;
        Ok(is_affirmative(&answer))
    }
}
