//! TCP listener and connection supervision.

pub mod listener;
pub mod registry;
