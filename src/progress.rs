// src/progress.rs
use tracing::{debug, info};

/// Lightweight progress reporting for the scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of catalog ids to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one catalog entry has been turned into an enum member.
    fn item_done(&mut self, _id: u32, _ident: &str, _display_name: &str) {}

    /// Called once every id succeeded.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Reports through `tracing`; what the CLI uses.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!(total, "scraping catalog");
    }

    fn log(&mut self, msg: &str) {
        debug!("{msg}");
    }

    fn item_done(&mut self, id: u32, ident: &str, display_name: &str) {
        self.done += 1;
        info!(id, %ident, name = %display_name, "[{}/{}]", self.done, self.total);
    }

    fn finish(&mut self) {
        info!(entries = self.done, "catalog complete");
    }
}
