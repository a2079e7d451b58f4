// src/specs/profile.rs
//! Scraping *spec* for one character profile page (`/mlth/chara/show/<id>`).
//!
//! Purpose:
//! - Parse the **remote HTML** of a profile page and extract the kana reading
//!   (two tokens, given to `naming`) and the display-name heading.
//!
//! Page layout this relies on:
//! ```text
//! #contents-main > section > section > article.d1_3
//!   ├── h2                                   display name, e.g. "北沢志保"
//!   └── div:nth-child(3) > ul > li:nth-child(2)   reading, e.g. "きたざわ しほ"
//! ```
//!
//! Failure policy: a layout change must not produce a silently broken enum, so
//! a missing or empty field and a reading that is not exactly two tokens are
//! all errors. Parser complaints about the markup itself are only logged.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::core::html::{first_text, selector};
use crate::core::sanitize::{normalize_reading, normalize_ws};
use crate::error::{Error, Result};

pub const READING_SELECTOR: &str =
    "#contents-main > section > section > article.d1_3 > div:nth-child(3) > ul > li:nth-child(2)";
pub const NAME_SELECTOR: &str = "#contents-main > section > section > article.d1_3 > h2";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    /// First reading token as printed on the page (kana).
    pub first: String,
    pub second: String,
    pub display_name: String,
}

pub struct ProfileSpec {
    reading: Selector,
    name: Selector,
}

impl ProfileSpec {
    pub fn new() -> Result<Self> {
        Ok(Self {
            reading: selector(READING_SELECTOR)?,
            name: selector(NAME_SELECTOR)?,
        })
    }

    pub fn extract(&self, id: u32, body: &str) -> Result<Profile> {
        let doc = Html::parse_document(body);
        if !doc.errors.is_empty() {
            warn!(id, count = doc.errors.len(), "HTML parse errors (continuing)");
            debug!(id, errors = ?doc.errors);
        }

        let reading = first_text(&doc, &self.reading)
            .map(|t| normalize_reading(&t))
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingField { id, field: "reading" })?;

        let display_name = first_text(&doc, &self.name)
            .map(|t| normalize_ws(&t))
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingField { id, field: "display name" })?;

        let (first, second) = split_reading(id, &reading)?;
        Ok(Profile { first, second, display_name })
    }
}

/// Exactly two whitespace-separated tokens, or `ReadingShape`.
pub fn split_reading(id: u32, reading: &str) -> Result<(String, String)> {
    let tokens: Vec<&str> = reading.split_whitespace().collect();
    match tokens.as_slice() {
        [first, second] => Ok((s!(*first), s!(*second))),
        _ => Err(Error::ReadingShape {
            id,
            reading: s!(reading),
            tokens: tokens.len(),
        }),
    }
}
