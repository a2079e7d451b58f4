// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod emit;
pub mod error;
pub mod log;
pub mod naming;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use error::{Error, Result};
