//! Command implementations for the `appdir` binary

pub mod commands;
