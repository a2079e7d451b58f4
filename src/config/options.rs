// src/config/options.rs
use std::ops::RangeInclusive;
use std::time::Duration;

use super::consts::*;
use crate::error::{Error, Result};
use crate::naming;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenOptions {
    pub scrape: ScrapeOptions,
    pub emit: EmitOptions,
}

impl GenOptions {
    /// Reject option combinations before any request goes out.
    pub fn validate(&self) -> Result<()> {
        self.scrape.validate()?;
        self.emit.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub first: u32,
    pub last: u32,
    /// Pause between two consecutive fetches.
    pub delay: Duration,
    /// `None` leaves the client without a timeout.
    pub timeout: Option<Duration>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            first: FIRST_ID,
            last: LAST_ID,
            delay: Duration::from_millis(REQUEST_PAUSE_MS),
            timeout: Some(Duration::from_secs(TIMEOUT_SECS)),
        }
    }
}

impl ScrapeOptions {
    pub fn ids(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    /// `<base>/<id>`, tolerating a trailing slash on the base.
    pub fn url_for(&self, id: u32) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }

    fn validate(&self) -> Result<()> {
        if self.first == 0 {
            return Err(Error::Config(s!("catalog ids start at 1")));
        }
        if self.first > self.last {
            return Err(Error::Config(format!(
                "first id {} is after last id {}",
                self.first, self.last
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(Error::Config(s!("base url is empty")));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    pub enum_name: String,
    /// Emitted as one `#[derive(...)]` line when non-empty.
    pub derives: Vec<String>,
    /// Emitted as `#[repr(..)]` when set.
    pub repr: Option<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            enum_name: s!(ENUM_NAME),
            derives: Vec::new(),
            repr: None,
        }
    }
}

impl EmitOptions {
    fn validate(&self) -> Result<()> {
        if !naming::is_valid_identifier(&self.enum_name) {
            return Err(Error::Config(format!(
                "enum name {:?} is not a valid type name",
                self.enum_name
            )));
        }
        if let Some(d) = self.derives.iter().find(|d| d.trim().is_empty()) {
            return Err(Error::Config(format!("empty derive entry {d:?}")));
        }
        Ok(())
    }
}
