//! Page fetcher: loads a URL over HTTP and extracts the DOM facts the audit
//! scorer and content analysis need: title, meta description, images, links,
//! headings, visible text, and elapsed load time.

use std::time::{Duration, Instant};

use reqwest::{redirect, Client};
use scraper::{ElementRef, Html, Node, Selector};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Navigation budget per page. A page that takes longer than this fails the
/// fetch; the caller surfaces it as a user-visible error without retrying.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url `{0}`")]
    InvalidUrl(String),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Clone, Serialize)]
pub struct PageImage {
    pub src: String,
    pub alt: String,
    pub has_alt: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageLink {
    pub href: String,
    pub text: String,
    pub is_internal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageHeading {
    pub level: u8,
    pub text: String,
}

/// Everything extracted from one page load.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub content: String,
    pub images: Vec<PageImage>,
    pub links: Vec<PageLink>,
    pub headings: Vec<PageHeading>,
    pub load_time_ms: u64,
}

impl PageSnapshot {
    pub fn h1_count(&self) -> usize {
        self.headings.iter().filter(|h| h.level == 1).count()
    }
}

/// Fetches pages over a shared HTTP client. Cheap to clone; carried in
/// `AppState`.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("rankpilot/", env!("CARGO_PKG_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .redirect(redirect::Policy::limited(5))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Loads `raw_url` (scheme defaulted to https when absent), measures the
    /// elapsed load time and extracts the page snapshot. No retry on failure.
    pub async fn fetch(&self, raw_url: &str) -> Result<PageSnapshot, FetchError> {
        let url = normalize_url(raw_url)?;
        debug!("Fetching {url}");

        let started = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let load_time_ms = started.elapsed().as_millis() as u64;

        Ok(extract(&body, &url, load_time_ms))
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `raw` into an absolute URL, defaulting the scheme to https when the
/// input is a bare domain like `example.com`.
pub fn normalize_url(raw: &str) -> Result<Url, FetchError> {
    let raw = raw.trim();
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let url = Url::parse(&candidate).map_err(|_| FetchError::InvalidUrl(raw.to_string()))?;
    if url.host_str().is_none() {
        return Err(FetchError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

/// Pure extraction from raw HTML. Split out of `fetch` so the DOM contract is
/// testable without network I/O.
pub fn extract(html: &str, base: &Url, load_time_ms: u64) -> PageSnapshot {
    let doc = Html::parse_document(html);

    let title = first_text(&doc, "title");

    let meta_description = doc
        .select(&selector("meta[name=\"description\"]"))
        .next()
        .and_then(|m| m.value().attr("content"))
        .unwrap_or_default()
        .trim()
        .to_string();

    let images = doc
        .select(&selector("img"))
        .map(|img| {
            let alt = img.value().attr("alt").unwrap_or_default().to_string();
            PageImage {
                src: img.value().attr("src").unwrap_or_default().to_string(),
                has_alt: !alt.trim().is_empty(),
                alt,
            }
        })
        .collect();

    let links = doc
        .select(&selector("a[href]"))
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let resolved = base.join(href).ok()?;
            Some(PageLink {
                is_internal: resolved.host_str() == base.host_str(),
                href: resolved.to_string(),
                text: element_text(&a),
            })
        })
        .collect();

    let headings = doc
        .select(&selector("h1, h2, h3, h4, h5, h6"))
        .map(|h| PageHeading {
            // tag names here are always "h1".."h6"
            level: h.value().name().as_bytes()[1] - b'0',
            text: element_text(&h),
        })
        .collect();

    let content = doc
        .select(&selector("body"))
        .next()
        .map(|body| {
            let mut parts = Vec::new();
            visible_text(body, &mut parts);
            parts.join(" ")
        })
        .unwrap_or_default();

    PageSnapshot {
        url: base.to_string(),
        title,
        meta_description,
        content,
        images,
        links,
        headings,
        load_time_ms,
    }
}

/// Collects text nodes under `el`, skipping `<script>` and `<style>` subtrees
/// so non-rendered code never leaks into the page content.
fn visible_text(el: ElementRef<'_>, out: &mut Vec<String>) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
            Node::Element(element) => {
                if element.name() == "script" || element.name() == "style" {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    visible_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn first_text(doc: &Html, css: &str) -> String {
    doc.select(&selector(css))
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default()
}

fn element_text(el: &scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
