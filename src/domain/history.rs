use super::wallet::Balance;
use serde::Serialize;
use std::fmt;

/// What one player had put into the pot when a round was settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commitment {
    pub player: String,
    pub amount: Balance,
}

/// A settled round as it appears in the session history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettledRound {
    pub round: u32,
    pub pot: Balance,
    pub winner: String,
    /// One entry per seat, in seating order.
    pub committed: Vec<Commitment>,
}

impl SettledRound {
    /// Amount a given player committed, if they were seated.
    pub fn committed_by(&self, player: &str) -> Option<Balance> {
        self.committed
            .iter()
            .find(|c| c.player == player)
            .map(|c| c.amount)
    }

    pub fn committed_summary(&self) -> CommittedSummary<'_> {
        CommittedSummary(&self.committed)
    }
}

/// Renders commitments as `name: ₹50.00, name: ₹30.00`.
pub struct CommittedSummary<'a>(&'a [Commitment]);

impl fmt::Display for CommittedSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: ₹{:.2}", c.player, c.amount.value())?;
        }
        Ok(())
    }
}
