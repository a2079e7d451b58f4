// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://imas.gamedbs.jp/mlth/chara/show";
pub const USER_AGENT: &str = concat!("idol_enum_gen/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;
pub const MAX_REDIRECTS: usize = 5;

// Catalog
pub const FIRST_ID: u32 = 1;
pub const LAST_ID: u32 = 52;

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite

// Emit
pub const ENUM_NAME: &str = "Idol";
