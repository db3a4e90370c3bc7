//! Adapters between the session and the outside world.

pub mod csv;
