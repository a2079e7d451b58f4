// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications** for the
//! catalog. Each spec focuses on a single page kind and encodes *where the
//! ground truth lives in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of fetched page bodies via `core::html` (CSS
//!   selectors over a `scraper::Html` tree).
//! - **Light shaping** of results into small structs (e.g. `Profile`).
//!
//! ## What does **not** live here
//! - **Networking**: bodies come in as `&str`; `scrape::collect_roster` owns fetching.
//! - **Naming / code generation**: `naming` and `emit` take it from there.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::generate → scrape::collect_roster → PageSource::fetch(id)
//!                   → specs::profile::ProfileSpec::extract(id, body)
//!                   → naming::identifier_for → emit::Roster::push
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline HTML fixtures.
pub mod profile;
