// src/runner.rs
use crate::{
    config::options::GenOptions,
    error::Result,
    progress::Progress,
    scrape::{self, PageSource},
};

/// Top-level runner: validate, scrape every id, render.
/// Returns the full generated source; nothing is written here, so a failure
/// anywhere leaves the caller with no partial output.
pub fn generate(
    opts: &GenOptions,
    source: &mut dyn PageSource,
    progress: Option<&mut dyn Progress>,
) -> Result<String> {
    opts.validate()?;
    let roster = scrape::collect_roster(&opts.scrape, source, progress)?;
    Ok(roster.render(&opts.emit))
}
