// src/progress.rs
//! Lightweight progress reporting for a scan.
//! Frontends implement this to surface status to users.

use crate::record::ProductRecord;

pub trait Progress {
    /// Called once the anchor set is known.
    fn begin(&mut self, _anchors: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a record is accepted. `count` is the running total.
    fn record_found(&mut self, _count: usize, _record: &ProductRecord) {}

    /// Called at the end with the final record count.
    fn finish(&mut self, _total: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
