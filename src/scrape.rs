// src/scrape.rs
use std::thread;

use tracing::debug;

use crate::{
    config::options::ScrapeOptions,
    emit::Roster,
    error::Result,
    naming,
    progress::Progress,
    specs::profile::ProfileSpec,
};

/// Where page bodies come from. `core::net::Client` in production.
pub trait PageSource {
    fn fetch(&mut self, id: u32) -> Result<String>;
}

/// Fetch → extract → name → append, one id at a time, pausing between
/// requests. The first error of any kind ends the run.
pub fn collect_roster(
    opts: &ScrapeOptions,
    source: &mut dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Roster> {
    let spec = ProfileSpec::new()?;
    let ids = opts.ids();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.clone().count());
    }

    let mut roster = Roster::new();
    for id in ids {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("fetching {}", opts.url_for(id)));
        }
        let body = source.fetch(id)?;
        let profile = spec.extract(id, &body)?;
        let ident = naming::identifier_for(id, &profile.first, &profile.second)?;
        roster.push(id, ident, profile.display_name)?;

        if let (Some(p), Some((id, ident, name))) = (progress.as_deref_mut(), roster.last()) {
            p.item_done(id, ident, name);
        }

        if id < opts.last && !opts.delay.is_zero() {
            debug!(delay_ms = opts.delay.as_millis() as u64, "pause");
            thread::sleep(opts.delay); // be polite
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(roster)
}
