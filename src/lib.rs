// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod table;

pub use data::{DataSet, PriceRecord};
pub use error::{Result, TrackerError};
