use crate::error::SessionError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Slack allowed when comparing a reserved total against a wallet.
pub const WALLET_TOLERANCE: Decimal = dec!(0.000000001);

/// Represents a monetary value held in a wallet, a pot or a reservation.
///
/// This is a wrapper around `rust_decimal::Decimal` so that money never goes
/// through binary floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// Represents a single non-negative bet entered into an iteration cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, SessionError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(SessionError::InvalidAmount(value.to_string()))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = SessionError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True when `self`, taken as a reservation, overdraws `wallet` by more
    /// than [`WALLET_TOLERANCE`].
    pub fn exceeds(&self, wallet: Balance) -> bool {
        self.0 - WALLET_TOLERANCE > wallet.0
    }

    /// `None` when the sum no longer fits in a `Decimal`.
    pub fn checked_add(self, rhs: Balance) -> Option<Balance> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Adds up balances, `None` on overflow.
    pub fn checked_sum<I: IntoIterator<Item = Balance>>(balances: I) -> Option<Balance> {
        balances
            .into_iter()
            .try_fold(Self::ZERO, |acc, b| acc.checked_add(b))
    }

    /// `self - rhs`, floored at zero.
    pub fn remaining_after(&self, rhs: Balance) -> Balance {
        Self((self.0 - rhs.0).max(Decimal::ZERO))
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A seated player and the balance they can still put into play.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Player {
    pub name: String,
    /// Spendable balance. Only settlement and undo touch it.
    pub wallet: Balance,
}

impl Player {
    pub fn new(name: impl Into<String>, wallet: Balance) -> Self {
        Self {
            name: name.into(),
            wallet,
        }
    }

    /// Takes a settled commitment out of the wallet. Both sides are
    /// non-negative, so this cannot overflow.
    pub fn debit(&mut self, amount: Balance) {
        self.wallet = self.wallet - amount;
    }

    /// Wallet after paying `committed` and collecting `winnings`, or `None`
    /// if the result does not fit in a `Decimal`.
    pub fn wallet_after(&self, committed: Balance, winnings: Balance) -> Option<Balance> {
        (self.wallet - committed).checked_add(winnings)
    }
}
