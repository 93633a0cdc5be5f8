//! Interactive confirmation before installing anything

use inquire::error::InquireResult;
use std::io::{self, IsTerminal};

/// Asks the user a yes/no question
pub trait Confirm {
    /// Returns true only on an explicit affirmative answer
    fn confirm(&mut self, question: &str) -> bool;
}

/// Prompt on the process terminal
///
/// Declines without asking when stdin is not a terminal, since nobody can answer.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        if !io::stdin().is_terminal() {
            return false;
        }
        accepted(
            inquire::Confirm::new(question)
                .with_default(false)
                .with_help_message("Type 'y' to install, anything else cancels")
                .prompt(),
        )
    }
}

/// An escaped, interrupted or failed prompt counts as "no"
fn accepted(answer: InquireResult<bool>) -> bool {
    answer.unwrap_or(false)
}
