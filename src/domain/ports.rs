use std::fmt;

/// Questions the session puts to the user before an irreversible step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Wipe the whole game, setup included.
    ResetGame,
    /// Settle a round in which nothing was bet.
    SettleEmptyPot,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::ResetGame => f.write_str("Reset the whole game?"),
            Prompt::SettleEmptyPot => {
                f.write_str("No bets placed. Do you still want to settle (no-op)?")
            }
        }
    }
}

/// The confirmation dialog, as seen from the session.
///
/// Implementations block until the user has answered.
pub trait Confirm {
    fn confirm(&mut self, prompt: Prompt) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(Prompt) -> bool,
{
    fn confirm(&mut self, prompt: Prompt) -> bool {
        self(prompt)
    }
}

pub type ConfirmBox = Box<dyn Confirm>;
