use super::wallet::{Balance, Player};
use crate::config::SessionConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One slot of the pre-game setup form.
///
/// The wallet is kept as typed; it is only coerced when the game starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSetupEntry {
    pub name: String,
    pub wallet: String,
}

impl PlayerSetupEntry {
    pub fn new(name: impl Into<String>, wallet: impl ToString) -> Self {
        Self {
            name: name.into(),
            wallet: wallet.to_string(),
        }
    }

    /// Builds the live player. A blank name falls back to the configured
    /// default; a wallet that is not a number becomes zero, and a negative
    /// wallet is clamped to zero.
    pub fn to_player(&self, config: &SessionConfig) -> Player {
        let name = match self.name.trim() {
            "" => config.default_name.clone(),
            trimmed => trimmed.to_string(),
        };
        let wallet = Decimal::from_str(self.wallet.trim())
            .ok()
            .filter(|w| !w.is_sign_negative())
            .map(Balance::new)
            .unwrap_or(Balance::ZERO);
        Player::new(name, wallet)
    }
}

/// Default setup slots: `"Player 1"` .. `"Player {count}"`, each with the
/// configured starting wallet.
pub fn default_roster(count: usize, config: &SessionConfig) -> Vec<PlayerSetupEntry> {
    (1..=count)
        .map(|i| {
            PlayerSetupEntry::new(
                format!("{} {}", config.default_name, i),
                config.default_wallet,
            )
        })
        .collect()
}
