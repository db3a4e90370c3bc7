use crate::domain::ports::{Confirm, Prompt};
use dialoguer::console::Term;

/// Answers every prompt the same way without asking anybody.
///
/// Used for unattended replays and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, prompt: Prompt) -> bool {
        log::debug!("{prompt} -> {}", if self.0 { "yes" } else { "no" });
        self.0
    }
}

/// Asks on the terminal with a `y/N` dialog.
///
/// Escape counts as a refusal, and so does running without a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: Prompt) -> bool {
        let answer = dialoguer::Confirm::new()
            .with_prompt(prompt.to_string())
            .default(false)
            .report(false)
            .interact_on_opt(&Term::stderr());
        match answer {
            Ok(answer) => answer.unwrap_or(false),
            Err(e) => {
                log::warn!("could not ask {prompt:?}: {e}");
                false
            }
        }
    }
}
