use super::session::PotSession;
use crate::domain::ports::{Confirm, Prompt};
use crate::domain::roster::PlayerSetupEntry;
use crate::error::Result;

/// A single user action, as the presentation layer hands it over.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Roster(usize),
    Setup {
        index: usize,
        entry: PlayerSetupEntry,
    },
    Start,
    Bet {
        row: usize,
        player: usize,
        value: String,
    },
    Winner(Option<String>),
    /// `Some(answer)` pre-answers the empty-pot prompt.
    Settle(Option<bool>),
    Undo,
    /// `Some(answer)` pre-answers the reset prompt.
    Reset(Option<bool>),
}

impl Intent {
    /// Routes the intent to the matching session operation.
    ///
    /// Prompts go to `confirm` unless the intent carries its own answer.
    pub fn apply(self, session: &mut PotSession, confirm: &mut dyn Confirm) -> Result<()> {
        match self {
            Intent::Roster(count) => {
                session.configure_roster(count);
            }
            Intent::Setup { index, entry } => session.edit_setup_entry(index, entry)?,
            Intent::Start => session.start_game()?,
            Intent::Bet { row, player, value } => {
                session.edit_bet(row, player, &value)?;
            }
            Intent::Winner(name) => session.select_winner(name.as_deref())?,
            Intent::Settle(answer) => {
                let settled = match answer {
                    Some(answer) => session.settle_round(&mut |_: Prompt| answer)?,
                    None => session.settle_round(confirm)?,
                };
                if settled.is_none() {
                    log::info!("settlement skipped");
                }
            }
            Intent::Undo => session.undo_last_round()?,
            Intent::Reset(answer) => {
                let reset = match answer {
                    Some(answer) => session.reset_game(&mut |_: Prompt| answer),
                    None => session.reset_game(confirm),
                };
                if !reset {
                    log::info!("reset skipped");
                }
            }
        }
        Ok(())
    }
}
