use super::session::{PotSession, Table};
use crate::domain::history::SettledRound;
use crate::domain::ledger::IterationRow;
use crate::domain::wallet::Balance;
use serde::Serialize;
use std::iter;

/// A seated player as the presentation layer shows them.
#[derive(Debug, Serialize, PartialEq)]
pub struct PlayerView<'a> {
    pub name: &'a str,
    pub wallet: Balance,
    pub reserved: Balance,
    pub available: Balance,
}

/// Read-only picture of a session, ready to render or serialize.
#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub started: bool,
    pub round_number: u32,
    pub pot: Balance,
    pub selected_winner: Option<&'a str>,
    pub can_undo: bool,
    pub players: Vec<PlayerView<'a>>,
    pub iterations: &'a [IterationRow],
    pub history: &'a [SettledRound],
}

impl<'a> From<&'a PotSession> for SessionView<'a> {
    fn from(session: &'a PotSession) -> Self {
        let reserved = session
            .table()
            .and_then(Table::reserved_totals)
            .unwrap_or_default();
        let players = session
            .players()
            .iter()
            .zip(reserved.into_iter().chain(iter::repeat(Balance::ZERO)))
            .map(|(player, reserved)| PlayerView {
                name: &player.name,
                wallet: player.wallet,
                reserved,
                available: player.wallet.remaining_after(reserved),
            })
            .collect();

        Self {
            started: session.is_started(),
            round_number: session.round_number(),
            pot: session.current_pot().unwrap_or(Balance::ZERO),
            selected_winner: session.selected_winner(),
            can_undo: session.can_undo(),
            players,
            iterations: session.iterations(),
            history: session.history(),
        }
    }
}
