//! Unified application error type.
//! The core (store, calculator) never fails; everything that can go wrong
//! lives at the edges (config file, CLI input, output) and returns AppError.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid slot range: {0} (expected HH:MM-HH:MM)")]
    InvalidSlot(String),

    #[error("Invalid slot field: {0} (expected 'start' or 'end')")]
    InvalidField(String),

    #[error("Invalid slot id: {0}")]
    InvalidSlotId(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for '{0}'")]
    MissingArgument(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
