use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Create players first")]
    EmptyRoster,
    #[error("Game has not been started")]
    NotStarted,
    #[error("{player} would exceed wallet limit: reserved {reserved} of {wallet}")]
    WalletExceeded {
        player: String,
        reserved: Decimal,
        wallet: Decimal,
    },
    #[error("Invalid bet amount: {0:?}")]
    InvalidAmount(String),
    #[error("No bet cell at row {row}, player {player}")]
    CellOutOfRange { row: usize, player: usize },
    #[error("No player at index {0}")]
    PlayerOutOfRange(usize),
    #[error("No setup slot at index {0}")]
    SetupSlotOutOfRange(usize),
    #[error("Select a winner first")]
    NoWinnerSelected,
    #[error("Winner not found: {0}")]
    WinnerNotFound(String),
    #[error("{0} is too large to represent")]
    AmountOverflow(&'static str),
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
