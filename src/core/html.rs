// src/core/html.rs
// Thin helpers over `scraper` for fixed-position lookups.

use scraper::{Html, Selector};

use crate::error::{Error, Result};

pub fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector {
        selector: css,
        message: e.to_string(),
    })
}

/// Concatenated text of the first element matching `sel`, or `None`.
///
/// Later matches are ignored rather than appended: profile pages carry one
/// `article.d1_3`, and gluing text from a second match would corrupt the
/// two-token reading instead of failing on it.
pub fn first_text(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel).next().map(|el| el.text().collect::<String>())
}
