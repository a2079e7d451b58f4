// src/core/net.rs
// Blocking HTTP GET for catalog pages.

use reqwest::blocking;
use reqwest::redirect::Policy;
use tracing::debug;

use crate::config::consts::{MAX_REDIRECTS, USER_AGENT};
use crate::config::options::ScrapeOptions;
use crate::error::{Error, Result};
use crate::scrape::PageSource;

pub struct Client {
    inner: blocking::Client,
    opts: ScrapeOptions,
}

impl Client {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let inner = blocking::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(opts.timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { inner, opts: opts.clone() })
    }

    /// GET `<base>/<id>`. Transport errors and non-2xx statuses are fatal.
    pub fn http_get(&self, id: u32) -> Result<String> {
        let url = self.opts.url_for(id);
        debug!(%url, "GET");

        let resp = self.inner.get(&url).send().map_err(|source| Error::Http { id, source })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { id, status: status.as_u16() });
        }
        resp.text().map_err(|source| Error::Http { id, source })
    }
}

impl PageSource for Client {
    fn fetch(&mut self, id: u32) -> Result<String> {
        self.http_get(id)
    }
}
