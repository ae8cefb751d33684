//! Console link prompt
//!
//! Implements the `LinkPrompt` trait on the terminal: candidates are
//! listed with numbers, the operator answers with a number or types a path.

use std::io::{BufRead, Write};

use crate::core::ports::LinkPrompt;

/// Prompt reading answers from `input` and writing the menu to `output`
#[derive(Debug)]
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Prompt over arbitrary streams
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn show(&mut self, task: &str, candidates: &[String]) -> std::io::Result<()> {
        writeln!(self.output, "Select path to task '{task}' or enter path manually:")?;
        for (index, candidate) in candidates.iter().enumerate() {
            writeln!(self.output, "{:2} {candidate}", index + 1)?;
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> LinkPrompt for ConsolePrompt<R, W> {
    fn choose(&mut self, task: &str, candidates: &[String]) -> Option<String> {
        self.show(task, candidates).ok()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer).ok()?;
        interpret_answer(&answer, candidates)
    }
}

/// Turn an answer into a choice
///
/// - a number picks the candidate with that (1-based) index; out of range cancels
/// - an empty answer picks the only candidate, or cancels when there are several
/// - anything else is taken as a manually entered path
#[must_use]
pub fn interpret_answer(answer: &str, candidates: &[String]) -> Option<String> {
    let answer = answer.trim();

    if answer.is_empty() {
        return match candidates {
            [only] => Some(only.clone()),
            _ => None,
        };
    }

    match answer.parse::<usize>() {
        Ok(index) if (1..=candidates.len()).contains(&index) => Some(candidates[index - 1].clone()),
        Ok(_) => None,
        Err(_) => Some(answer.to_string()),
    }
}
