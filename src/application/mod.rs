//! Application layer driving the betting session.
//!
//! `PotSession` is the engine that owns all session state; `Intent` maps
//! user actions onto its operations and `SessionView` is the read-only
//! picture handed to renderers.

pub mod intent;
pub mod session;
pub mod view;
