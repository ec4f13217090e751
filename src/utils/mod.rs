//! Utility modules

pub mod terminal;
