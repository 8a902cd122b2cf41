// src/error.rs
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Timed out after {waited:?} waiting for `{selector}`")]
    Timeout { selector: String, waited: Duration },

    #[error("No price rows found on {0}")]
    NoRows(String),

    #[error("Row {rank}: {reason}")]
    Row { rank: u32, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
