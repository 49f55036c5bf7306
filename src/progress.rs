// src/progress.rs
/// Lightweight progress reporting used by long-running scrape runs.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a match id or player code).
    fn item_done(&mut self, _id: &str) {}

    /// Called when one logical unit is skipped or fails (non-200, bad page).
    fn item_failed(&mut self, _id: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
