//! Configuration module for the ledger
//!
//! This module provides configuration management including:
//! - Path resolution for data, state and audit files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
