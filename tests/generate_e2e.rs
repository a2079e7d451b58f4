// tests/generate_e2e.rs
//
// End-to-end runs of the generator against an in-memory catalog.
//
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use idol_enum_gen::config::options::{GenOptions, ScrapeOptions};
use idol_enum_gen::core::net::Client;
use idol_enum_gen::progress::{NullProgress, Progress};
use idol_enum_gen::scrape::{self, PageSource};
use idol_enum_gen::{naming, runner, Error};

// 52 kana with pairwise distinct romaji
const KANA: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわがぎぐげござじず";

fn page(reading: &str, name: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>{name}</title></head><body>
<div id="contents-main"><section><section>
<article class="d1_3">
  <h2>{name}</h2>
  <div class="thumb"><img src="/img/{name}.png"></div>
  <div><ul><li>読み</li><li>{reading}</li><li>CV</li></ul></div>
</article>
</section></section></div></body></html>"#
    )
}

struct Catalog {
    pages: HashMap<u32, String>,
    fail_at: Option<u32>,
    fetched: Vec<u32>,
}

impl Catalog {
    fn full() -> Self {
        let pages = KANA
            .chars()
            .enumerate()
            .map(|(i, k)| {
                let id = i as u32 + 1;
                (id, page(&format!("{k} みらい"), &format!("アイドル{id}")))
            })
            .collect();
        Self { pages, fail_at: None, fetched: Vec::new() }
    }
}

impl PageSource for Catalog {
    fn fetch(&mut self, id: u32) -> idol_enum_gen::Result<String> {
        self.fetched.push(id);
        if self.fail_at == Some(id) {
            return Err(Error::Status { id, status: 503 });
        }
        self.pages
            .get(&id)
            .cloned()
            .ok_or(Error::Status { id, status: 404 })
    }
}

#[derive(Default)]
struct Recorder {
    total: Option<usize>,
    done: Vec<u32>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn item_done(&mut self, id: u32, _ident: &str, _display_name: &str) {
        self.done.push(id);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

fn fast_opts() -> GenOptions {
    let mut o = GenOptions::default();
    o.scrape.delay = Duration::ZERO;
    o
}

#[test]
fn full_catalog_builds_52_aligned_entries() {
    let mut catalog = Catalog::full();
    let roster = scrape::collect_roster(&fast_opts().scrape, &mut catalog, None).unwrap();

    assert_eq!(roster.len(), 52);
    assert_eq!(roster.identifiers().len(), roster.display_names().len());

    let mut seen = std::collections::HashSet::new();
    for (i, (id, ident, name)) in roster.iter().enumerate() {
        assert_eq!(id, i as u32 + 1);
        assert!(naming::is_valid_identifier(ident), "{ident}");
        assert!(seen.insert(ident.to_string()), "duplicate {ident}");
        assert_eq!(name, format!("アイドル{id}"));
    }
    assert_eq!(roster.identifiers()[0], "AMirai");
    assert_eq!(roster.identifiers()[11], "ShiMirai");
}

#[test]
fn emitted_blocks_line_up() {
    let mut catalog = Catalog::full();
    let out = runner::generate(&fast_opts(), &mut catalog, None).unwrap();

    let members: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with('\t') && !l.starts_with("\t\t") && l.ends_with(','))
        .collect();
    assert_eq!(members.len(), 52);
    for (i, line) in members.iter().enumerate() {
        assert!(line.ends_with(&format!(" = {},", i + 1)), "{line}");
    }

    let arms: Vec<&str> = out.lines().filter(|l| l.contains("=> write!")).collect();
    assert_eq!(arms.len(), 52);
    for (i, arm) in arms.iter().enumerate() {
        let ident = members[i].trim().split(' ').next().unwrap();
        let expected = format!("\t\t\tIdol::{ident} => write!(f, \"アイドル{}\"),", i + 1);
        assert_eq!(*arm, expected);
    }

    // enum first, then Display
    let enum_at = out.find("pub enum Idol {").unwrap();
    let impl_at = out.find("impl std::fmt::Display for Idol {").unwrap();
    assert!(enum_at < impl_at);
}

#[test]
fn fetch_failure_aborts_without_output() {
    let mut catalog = Catalog::full();
    catalog.fail_at = Some(17);
    let mut rec = Recorder::default();

    let err = runner::generate(&fast_opts(), &mut catalog, Some(&mut rec)).unwrap_err();
    assert!(matches!(err, Error::Status { id: 17, status: 503 }));

    // nothing after the failing id was requested
    assert_eq!(catalog.fetched.last(), Some(&17));
    assert_eq!(catalog.fetched.len(), 17);
    assert_eq!(rec.done.len(), 16);
    assert!(!rec.finished);
}

#[test]
fn layout_change_is_fatal() {
    let mut catalog = Catalog::full();
    catalog
        .pages
        .insert(4, s("<html><body><div id=\"contents-main\"></div></body></html>"));

    let err = runner::generate(&fast_opts(), &mut catalog, None).unwrap_err();
    assert!(matches!(err, Error::MissingField { id: 4, .. }));
}

#[test]
fn colliding_readings_are_reported() {
    let mut catalog = Catalog::full();
    catalog.pages.insert(10, page("う みらい", "別人"));

    let err = runner::generate(&fast_opts(), &mut catalog, None).unwrap_err();
    match err {
        Error::DuplicateIdentifier { ident, first, second } => {
            assert_eq!(ident, "UMirai");
            assert_eq!((first, second), (3, 10));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn known_reading_becomes_pascal_identifier() {
    let mut catalog = Catalog::full();
    catalog.pages.insert(1, page("きょうこ かみがいと", "神谷奈緒"));

    let mut opts = fast_opts();
    opts.scrape.last = 1;
    let out = runner::generate(&opts, &mut catalog, None).unwrap();
    assert!(out.contains("\tKyoukoKamigaito = 1,\n"));
    assert!(out.contains("Idol::KyoukoKamigaito => write!(f, \"神谷奈緒\"),"));
}

#[test]
fn progress_sees_every_entry() {
    let mut catalog = Catalog::full();
    let mut rec = Recorder::default();
    scrape::collect_roster(&fast_opts().scrape, &mut catalog, Some(&mut rec)).unwrap();

    assert_eq!(rec.total, Some(52));
    assert_eq!(rec.done, (1..=52).collect::<Vec<_>>());
    assert!(rec.finished);
}

#[test]
fn output_is_idempotent() {
    let a = runner::generate(&fast_opts(), &mut Catalog::full(), Some(&mut NullProgress)).unwrap();
    let b = runner::generate(&fast_opts(), &mut Catalog::full(), None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_options_fail_before_fetching() {
    let mut catalog = Catalog::full();
    let mut opts = fast_opts();
    opts.scrape.first = 0;

    let err = runner::generate(&opts, &mut catalog, None).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(catalog.fetched.is_empty());
}

#[test]
fn refused_connection_is_a_transport_error() {
    let opts = ScrapeOptions {
        base_url: s("http://127.0.0.1:1/show"),
        first: 1,
        last: 3,
        delay: Duration::ZERO,
        timeout: Some(Duration::from_secs(5)),
    };
    let mut client = Client::new(&opts).unwrap();

    let err = scrape::collect_roster(&opts, &mut client, None).unwrap_err();
    assert!(matches!(err, Error::Http { id: 1, .. }));
}

#[test]
fn pauses_between_fetches_but_not_after_last() {
    let delay = Duration::from_millis(100);
    let mut opts = fast_opts();
    opts.scrape.last = 3;
    opts.scrape.delay = delay;

    let started = Instant::now();
    let roster = scrape::collect_roster(&opts.scrape, &mut Catalog::full(), None).unwrap();
    let elapsed = started.elapsed();

    assert_eq!(roster.len(), 3);
    assert!(elapsed >= delay * 2, "{elapsed:?}");
    assert!(elapsed < delay * 3, "{elapsed:?}");
}

/// Answer exactly one request on a loopback port with `status_line` and `body`.
fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/show", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let mut req = Vec::new();
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            req.extend_from_slice(&buf[..n]);
        }
        let resp = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
    });
    (base, handle)
}

fn loopback_opts(base_url: String) -> ScrapeOptions {
    ScrapeOptions {
        base_url,
        first: 1,
        last: 1,
        delay: Duration::ZERO,
        timeout: Some(Duration::from_secs(5)),
    }
}

#[test]
fn non_success_status_from_server_is_fatal() {
    let (base, server) = serve_once("404 Not Found", s("gone"));
    let client = Client::new(&loopback_opts(base)).unwrap();

    let err = client.http_get(1).unwrap_err();
    assert!(matches!(err, Error::Status { id: 1, status: 404 }), "{err}");
    server.join().unwrap();
}

#[test]
fn served_page_flows_through_client() {
    let (base, server) = serve_once("200 OK", page("かすが みらい", "春日未来"));
    let opts = loopback_opts(base);
    let mut client = Client::new(&opts).unwrap();

    let roster = scrape::collect_roster(&opts, &mut client, None).unwrap();
    assert_eq!(roster.identifiers(), ["KasugaMirai"]);
    assert_eq!(roster.display_names(), ["春日未来"]);
    server.join().unwrap();
}

fn s(v: &str) -> String {
    v.to_string()
}
