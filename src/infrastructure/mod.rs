//! Concrete implementations of the domain ports.

pub mod confirm;
