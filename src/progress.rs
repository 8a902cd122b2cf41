// src/progress.rs
use crate::data::PriceRecord;

/// Progress reporting for the scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once rows are located, with the number about to be read.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A row became a record.
    fn item_done(&mut self, _record: &PriceRecord) {}

    /// A row was skipped.
    fn item_failed(&mut self, _rank: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
