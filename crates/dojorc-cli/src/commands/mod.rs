//! CLI command handlers

pub mod settings;
