use super::wallet::{Amount, Balance};
use crate::error::{Result, SessionError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// What a user typed into a bet cell, once coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BetInput {
    /// Nothing (or only whitespace) was typed.
    Blank,
    /// A number below zero. Such input is discarded, never stored.
    Negative,
    Value(Amount),
}

impl BetInput {
    /// Parses raw cell text. Plain and scientific notation are accepted;
    /// anything else is an [`SessionError::InvalidAmount`].
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::Blank);
        }
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| SessionError::InvalidAmount(raw.to_string()))?;
        // "-0" is a zero bet, not a negative one.
        let value = if value.is_zero() { Decimal::ZERO } else { value };
        Ok(Amount::try_from(value).map_or(Self::Negative, Self::Value))
    }
}

/// One horizontal slice of bets, one cell per seated player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationRow {
    cells: Vec<Option<Amount>>,
}

impl IterationRow {
    pub fn blank(width: usize) -> Self {
        Self {
            cells: vec![None; width],
        }
    }

    pub fn cells(&self) -> &[Option<Amount>] {
        &self.cells
    }

    pub fn cell(&self, player: usize) -> Option<Amount> {
        self.cells.get(player).copied().flatten()
    }

    pub fn has_entry(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }
}

/// The bet grid of the round currently in play.
///
/// Always holds at least one row. Rows are appended one at a time as the
/// last one fills up, never beyond `max_rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct BetLedger {
    rows: Vec<IterationRow>,
    width: usize,
    max_rows: usize,
}

impl BetLedger {
    pub fn new(width: usize, max_rows: usize) -> Self {
        Self {
            rows: vec![IterationRow::blank(width)],
            width,
            max_rows: max_rows.max(1),
        }
    }

    pub fn rows(&self) -> &[IterationRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_last_row(&self, row: usize) -> bool {
        row + 1 == self.rows.len()
    }

    pub fn get(&self, row: usize, player: usize) -> Result<Option<Amount>> {
        self.check_cell(row, player)?;
        Ok(self.rows[row].cell(player))
    }

    /// Overwrites a cell and hands back what it held before.
    pub fn set(&mut self, row: usize, player: usize, value: Option<Amount>) -> Result<Option<Amount>> {
        self.check_cell(row, player)?;
        Ok(std::mem::replace(&mut self.rows[row].cells[player], value))
    }

    /// Sum of one player's cells across every row of the round.
    pub fn reserved(&self, player: usize) -> Result<Balance> {
        Balance::checked_sum(
            self.rows
                .iter()
                .filter_map(|row| row.cell(player))
                .map(Balance::from),
        )
        .ok_or(SessionError::AmountOverflow("reserved total"))
    }

    pub fn reserved_totals(&self) -> Result<Vec<Balance>> {
        (0..self.width).map(|player| self.reserved(player)).collect()
    }

    /// Everything committed this round.
    pub fn pot(&self) -> Result<Balance> {
        Balance::checked_sum(
            self.rows
                .iter()
                .flat_map(|row| row.cells.iter().flatten())
                .copied()
                .map(Balance::from),
        )
        .ok_or(SessionError::AmountOverflow("pot"))
    }

    /// Appends a blank row when the last one carries a bet and the cap has
    /// not been reached. Returns whether a row was added.
    pub fn grow(&mut self) -> bool {
        let last_has_entry = self.rows.last().is_some_and(IterationRow::has_entry);
        if last_has_entry && self.rows.len() < self.max_rows {
            self.rows.push(IterationRow::blank(self.width));
            true
        } else {
            false
        }
    }

    /// Drops every row and starts over with a single blank one.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.rows.push(IterationRow::blank(self.width));
    }

    fn check_cell(&self, row: usize, player: usize) -> Result<()> {
        if row < self.rows.len() && player < self.width {
            Ok(())
        } else {
            Err(SessionError::CellOutOfRange { row, player })
        }
    }
}
