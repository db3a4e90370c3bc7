use crate::config::SessionConfig;
use crate::domain::history::{Commitment, SettledRound};
use crate::domain::ledger::{BetInput, BetLedger, IterationRow};
use crate::domain::ports::{Confirm, Prompt};
use crate::domain::roster::{PlayerSetupEntry, default_roster};
use crate::domain::wallet::{Balance, Player};
use crate::error::{Result, SessionError};
use rust_decimal::Decimal;

/// How an accepted bet edit left the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetEdit {
    /// The value (or a blank) is now in the cell. `row_added` is set when
    /// the edit filled the last row and a fresh one was appended.
    Stored { row_added: bool },
    /// The input was negative; the cell was emptied instead.
    Cleared,
}

/// Everything one settlement can take back.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoSnapshot {
    pub players: Vec<Player>,
    pub history: Vec<SettledRound>,
    pub round_number: u32,
}

/// State that only exists while a game is running.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    players: Vec<Player>,
    ledger: BetLedger,
    round_number: u32,
    selected_winner: Option<String>,
    history: Vec<SettledRound>,
    undo: Option<UndoSnapshot>,
}

impl Table {
    fn new(players: Vec<Player>, config: &SessionConfig) -> Self {
        Self {
            ledger: BetLedger::new(players.len(), config.max_iterations),
            players,
            round_number: 1,
            selected_winner: None,
            history: Vec::new(),
            undo: None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iterations(&self) -> &[IterationRow] {
        self.ledger.rows()
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn selected_winner(&self) -> Option<&str> {
        self.selected_winner.as_deref()
    }

    /// Settled rounds, most recent first.
    pub fn history(&self) -> &[SettledRound] {
        &self.history
    }

    pub fn undo_snapshot(&self) -> Option<&UndoSnapshot> {
        self.undo.as_ref()
    }

    pub fn reserved_totals(&self) -> Result<Vec<Balance>> {
        self.ledger.reserved_totals()
    }

    pub fn pot(&self) -> Result<Balance> {
        self.ledger.pot()
    }

    /// First player whose reservations overdraw their wallet. A reserved
    /// total too large to add up counts as overdrawn.
    fn overdrawn(&self) -> Option<SessionError> {
        self.players.iter().enumerate().find_map(|(seat, player)| {
            let reserved = match self.ledger.reserved(seat) {
                Ok(reserved) if !reserved.exceeds(player.wallet) => return None,
                Ok(reserved) => reserved.value(),
                Err(_) => Decimal::MAX,
            };
            Some(SessionError::WalletExceeded {
                player: player.name.clone(),
                reserved,
                wallet: player.wallet.value(),
            })
        })
    }

    fn capture(&self) -> UndoSnapshot {
        UndoSnapshot {
            players: self.players.clone(),
            history: self.history.clone(),
            round_number: self.round_number,
        }
    }
}

/// The betting tracker.
///
/// `PotSession` owns the setup form, the seated players, the bet grid of the
/// round in play, the settled history and the single undo step. Every
/// mutation goes through one of its methods and either applies completely or
/// not at all.
pub struct PotSession {
    config: SessionConfig,
    roster: Vec<PlayerSetupEntry>,
    table: Option<Table>,
}

impl Default for PotSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl PotSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            roster: Vec::new(),
            table: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replaces the setup form with `count` default slots.
    pub fn configure_roster(&mut self, count: usize) -> &[PlayerSetupEntry] {
        self.roster = default_roster(count, &self.config);
        &self.roster
    }

    pub fn edit_setup_entry(&mut self, index: usize, entry: PlayerSetupEntry) -> Result<()> {
        let slot = self
            .roster
            .get_mut(index)
            .ok_or(SessionError::SetupSlotOutOfRange(index))?;
        *slot = entry;
        Ok(())
    }

    pub fn roster(&self) -> &[PlayerSetupEntry] {
        &self.roster
    }

    /// Seats the configured players and opens round 1.
    ///
    /// Replaces any game already running.
    pub fn start_game(&mut self) -> Result<()> {
        if self.roster.is_empty() {
            log::warn!("start rejected: no players configured");
            return Err(SessionError::EmptyRoster);
        }
        let players: Vec<Player> = self
            .roster
            .iter()
            .map(|entry| entry.to_player(&self.config))
            .collect();
        log::info!("game started with {} players", players.len());
        self.table = Some(Table::new(players, &self.config));
        Ok(())
    }

    /// Throws the whole game away, setup included, once the user agrees.
    ///
    /// Returns whether the reset happened. Cannot be undone.
    pub fn reset_game(&mut self, confirm: &mut dyn Confirm) -> bool {
        if !confirm.confirm(Prompt::ResetGame) {
            return false;
        }
        self.roster.clear();
        self.table = None;
        log::info!("game reset");
        true
    }

    pub fn is_started(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Result<&Table> {
        self.table.as_ref().ok_or(SessionError::NotStarted)
    }

    fn table_mut(&mut self) -> Result<&mut Table> {
        self.table.as_mut().ok_or(SessionError::NotStarted)
    }

    /// Writes `raw` into one bet cell.
    ///
    /// Negative input empties the cell. Unparseable input, or input that
    /// would let any player reserve more than their wallet, empties the
    /// cell and is reported as an error. Nothing else changes on rejection.
    pub fn edit_bet(&mut self, row: usize, player: usize, raw: &str) -> Result<BetEdit> {
        let table = self.table_mut()?;
        table.ledger.get(row, player)?;

        let value = match BetInput::parse(raw) {
            Ok(BetInput::Blank) => None,
            Ok(BetInput::Value(amount)) => Some(amount),
            Ok(BetInput::Negative) => {
                table.ledger.set(row, player, None)?;
                log::debug!("negative bet {raw:?} at ({row}, {player}) cleared");
                return Ok(BetEdit::Cleared);
            }
            Err(e) => {
                table.ledger.set(row, player, None)?;
                log::warn!("bet at ({row}, {player}) rejected: {e}");
                return Err(e);
            }
        };

        table.ledger.set(row, player, value)?;
        if let Some(e) = table.overdrawn() {
            table.ledger.set(row, player, None)?;
            log::warn!("bet at ({row}, {player}) rejected: {e}");
            return Err(e);
        }

        let row_added = table.ledger.is_last_row(row) && table.ledger.grow();
        log::debug!("bet {raw:?} stored at ({row}, {player}), row added: {row_added}");
        Ok(BetEdit::Stored { row_added })
    }

    /// What a player can still bet this round: wallet minus reservations,
    /// never below zero.
    pub fn available_balance(&self, player: usize) -> Result<Balance> {
        let table = self.table()?;
        let seated = table
            .players
            .get(player)
            .ok_or(SessionError::PlayerOutOfRange(player))?;
        Ok(seated.wallet.remaining_after(table.ledger.reserved(player)?))
    }

    pub fn current_pot(&self) -> Result<Balance> {
        self.table()?.pot()
    }

    /// Marks who takes the pot at the next settlement. `None` or a blank
    /// name clears the choice.
    pub fn select_winner(&mut self, name: Option<&str>) -> Result<()> {
        let table = self.table_mut()?;
        table.selected_winner = name.map(str::trim).filter(|n| !n.is_empty()).map(String::from);
        Ok(())
    }

    /// Closes the round: every player pays what they reserved and the
    /// selected winner collects the pot.
    ///
    /// All checks run before anything is touched, including that the pot
    /// and the winner's new wallet still fit in a `Decimal`. Settling an empty pot
    /// needs the user's consent; when it is refused `Ok(None)` is returned
    /// and the round stays open.
    pub fn settle_round(&mut self, confirm: &mut dyn Confirm) -> Result<Option<SettledRound>> {
        let table = self.table_mut()?;
        let winner_name = table
            .selected_winner
            .clone()
            .ok_or(SessionError::NoWinnerSelected)?;
        let winner = table
            .players
            .iter()
            .position(|p| p.name == winner_name)
            .ok_or_else(|| SessionError::WinnerNotFound(winner_name.clone()))?;
        if let Some(e) = table.overdrawn() {
            log::warn!("settlement of round {} rejected: {e}", table.round_number);
            return Err(e);
        }

        let reserved = table.ledger.reserved_totals()?;
        let pot = Balance::checked_sum(reserved.iter().copied())
            .ok_or(SessionError::AmountOverflow("pot"))?;
        let winner_wallet = table.players[winner]
            .wallet_after(reserved[winner], pot)
            .ok_or(SessionError::AmountOverflow("winner's wallet"))?;
        if pot == Balance::ZERO && !confirm.confirm(Prompt::SettleEmptyPot) {
            log::info!("empty settlement of round {} declined", table.round_number);
            return Ok(None);
        }

        table.undo = Some(table.capture());
        for (player, amount) in table.players.iter_mut().zip(&reserved) {
            player.debit(*amount);
        }
        table.players[winner].wallet = winner_wallet;

        let record = SettledRound {
            round: table.round_number,
            pot,
            winner: winner_name,
            committed: table
                .players
                .iter()
                .zip(reserved)
                .map(|(player, amount)| Commitment {
                    player: player.name.clone(),
                    amount,
                })
                .collect(),
        };
        table.history.insert(0, record.clone());
        table.ledger.reset();
        table.selected_winner = None;
        table.round_number += 1;

        log::info!(
            "round {} settled: {} wins {}",
            record.round,
            record.winner,
            record.pot
        );
        Ok(Some(record))
    }

    /// Reverts the most recent settlement. Only one step is kept; bets
    /// entered since that settlement are discarded.
    pub fn undo_last_round(&mut self) -> Result<()> {
        let table = self.table_mut()?;
        let snapshot = table.undo.take().ok_or(SessionError::NothingToUndo)?;
        table.players = snapshot.players;
        table.history = snapshot.history;
        table.round_number = snapshot.round_number;
        table.ledger.reset();
        log::info!("settlement undone, back to round {}", table.round_number);
        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        self.table.as_ref().map(Table::players).unwrap_or_default()
    }

    pub fn iterations(&self) -> &[IterationRow] {
        self.table.as_ref().map(Table::iterations).unwrap_or_default()
    }

    pub fn history(&self) -> &[SettledRound] {
        self.table.as_ref().map(Table::history).unwrap_or_default()
    }

    /// Round in play; a session that has not started reports round 1.
    pub fn round_number(&self) -> u32 {
        self.table.as_ref().map_or(1, |t| t.round_number())
    }

    pub fn selected_winner(&self) -> Option<&str> {
        self.table.as_ref().and_then(|t| t.selected_winner())
    }

    pub fn can_undo(&self) -> bool {
        self.table.as_ref().is_some_and(|t| t.undo.is_some())
    }
}
