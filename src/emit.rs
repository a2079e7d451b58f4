// src/emit.rs
//! Accumulates `(identifier, display name)` pairs and renders the generated
//! Rust source: the enum, then its `Display` impl.
//!
//! Rendering only happens on a complete `Roster`, into a `String`; the caller
//! writes it out in one go so a failed run never leaves half an enum behind.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::config::options::EmitOptions;
use crate::error::{Error, Result};

/// Append-only, index-aligned: entry `i` of every vector is the same page.
#[derive(Debug, Default)]
pub struct Roster {
    ids: Vec<u32>,
    identifiers: Vec<String>,
    display_names: Vec<String>,
    seen: HashMap<String, u32>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: u32, ident: String, display_name: String) -> Result<()> {
        if let Some(&first) = self.seen.get(&ident) {
            return Err(Error::DuplicateIdentifier { ident, first, second: id });
        }
        self.seen.insert(ident.clone(), id);
        self.ids.push(id);
        self.identifiers.push(ident);
        self.display_names.push(display_name);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn display_names(&self) -> &[String] {
        &self.display_names
    }

    pub fn last(&self) -> Option<(u32, &str, &str)> {
        let i = self.len().checked_sub(1)?;
        Some((self.ids[i], &self.identifiers[i], &self.display_names[i]))
    }

    /// `(id, identifier, display name)` in push order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str, &str)> {
        self.ids
            .iter()
            .zip(&self.identifiers)
            .zip(&self.display_names)
            .map(|((id, ident), name)| (*id, ident.as_str(), name.as_str()))
    }

    /// Enum block, blank line, `Display` block.
    pub fn render(&self, opts: &EmitOptions) -> String {
        let mut out = String::with_capacity(64 * (self.len() + 8));
        self.render_enum(&mut out, opts);
        out.push('\n');
        self.render_display(&mut out, opts);
        out
    }

    fn render_enum(&self, out: &mut String, opts: &EmitOptions) {
        if !opts.derives.is_empty() {
            let list: Vec<&str> = opts.derives.iter().map(|d| d.trim()).collect();
            let _ = writeln!(out, "#[derive({})]", list.join(", "));
        }
        if let Some(repr) = &opts.repr {
            let _ = writeln!(out, "#[repr({})]", repr.trim());
        }
        let _ = writeln!(out, "pub enum {} {{", opts.enum_name);
        for (id, ident, _) in self.iter() {
            let _ = writeln!(out, "\t{ident} = {id},");
        }
        out.push_str("}\n");
    }

    fn render_display(&self, out: &mut String, opts: &EmitOptions) {
        let name = &opts.enum_name;
        let _ = writeln!(out, "impl std::fmt::Display for {name} {{");
        out.push_str("\tfn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {\n");
        out.push_str("\t\tmatch self {\n");
        for (_, ident, display) in self.iter() {
            let _ = writeln!(
                out,
                "\t\t\t{name}::{ident} => write!(f, \"{}\"),",
                format_literal(display)
            );
        }
        out.push_str("\t\t}\n\t}\n}\n");
    }
}

/// Escape `s` for use inside the quoted format string of `write!`.
///
/// Per char: literal braces are doubled, everything else goes through
/// `char::escape_debug`, whose `\u{..}` output must stay untouched.
pub fn format_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '{' => out.push_str("{{"),
            '}' => out.push_str("}}"),
            _ => out.extend(c.escape_debug()),
        }
    }
    out
}
