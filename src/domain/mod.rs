pub mod history;
pub mod ledger;
pub mod ports;
pub mod roster;
pub mod wallet;
