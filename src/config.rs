use crate::domain::wallet::Balance;
use rust_decimal_macros::dec;

/// Hard cap on the number of iteration rows a single round may hold.
pub const MAX_ITERATIONS: usize = 200;

/// Tunables for a betting session.
///
/// The defaults mirror the values the setup form starts with; the CLI can
/// override individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Wallet pre-filled into every new setup slot.
    pub default_wallet: Balance,
    /// Prefix for generated slot names (`"Player 1"`, ...) and the fallback
    /// name for a blank entry.
    pub default_name: String,
    /// Maximum iteration rows per round.
    pub max_iterations: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_wallet: Balance::new(dec!(1000)),
            default_name: "Player".to_string(),
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl SessionConfig {
    pub fn with_default_wallet(mut self, wallet: Balance) -> Self {
        self.default_wallet = wallet;
        self
    }

    /// Sets the row cap. A cap below one would break the "at least one row"
    /// guarantee, so it is clamped.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }
}
