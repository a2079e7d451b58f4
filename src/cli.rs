// src/cli.rs
use std::io::Write;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::*;
use crate::config::options::{EmitOptions, GenOptions, ScrapeOptions};
use crate::core::net::Client;
use crate::error::Result;
use crate::progress::LogProgress;
use crate::runner;

/// Scrape the idol catalog and print a Rust enum with a Display impl.
///
/// Redirect stdout into a source file; logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "idol_enum_gen", version, about)]
pub struct Args {
    /// Catalog base URL; pages live at <BASE_URL>/<id>
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// First catalog id
    #[arg(long, default_value_t = FIRST_ID)]
    pub first: u32,

    /// Last catalog id (inclusive)
    #[arg(long, default_value_t = LAST_ID)]
    pub last: u32,

    /// Pause between requests, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub delay_ms: u64,

    /// Per-request timeout in seconds (0 = none)
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Name of the generated enum
    #[arg(long, default_value = ENUM_NAME)]
    pub enum_name: String,

    /// Derive to put on the enum (repeatable or comma-separated)
    #[arg(long = "derive", value_name = "TRAIT", value_delimiter = ',')]
    pub derives: Vec<String>,

    /// Emit #[repr(<REPR>)] on the enum, e.g. i32
    #[arg(long)]
    pub repr: Option<String>,
}

impl Args {
    pub fn into_options(self) -> GenOptions {
        GenOptions {
            scrape: ScrapeOptions {
                base_url: self.base_url,
                first: self.first,
                last: self.last,
                delay: Duration::from_millis(self.delay_ms),
                timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            },
            emit: EmitOptions {
                enum_name: self.enum_name,
                derives: self.derives,
                repr: self.repr,
            },
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let opts = args.into_options();
    let mut client = Client::new(&opts.scrape)?;
    let mut progress = LogProgress::default();
    let source = runner::generate(&opts, &mut client, Some(&mut progress))?;

    let mut out = std::io::stdout().lock();
    out.write_all(source.as_bytes())?;
    out.flush()?;
    Ok(())
}
