// src/naming/mod.rs
//! Turns a two-token kana reading into an enum member name.
//!
//! The two steps are separate pure functions so either can be swapped:
//! - [`romaji::to_romaji`]: one kana token → Latin letters
//! - [`case::to_pascal`]: `first_second` → `FirstSecond`

pub mod case;
pub mod romaji;

use crate::error::{Error, Result};

/// Romanize both tokens, join with `_`, PascalCase the result.
/// No validation; see [`identifier_for`].
pub fn build_identifier(first: &str, second: &str) -> String {
    let joined = join!(&romaji::to_romaji(first), "_", &romaji::to_romaji(second));
    case::to_pascal(&joined)
}

/// [`build_identifier`] plus the member-name check, for catalog entry `id`.
pub fn identifier_for(id: u32, first: &str, second: &str) -> Result<String> {
    let ident = build_identifier(first, second);
    if !is_valid_identifier(&ident) {
        return Err(Error::InvalidIdentifier { id, ident });
    }
    Ok(ident)
}

/// ASCII letter first, ASCII alphanumerics after. `Self` is reserved.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric()) && s != "Self"
}
