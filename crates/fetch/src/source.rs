//! Page sources: where slices of the restroom collection come from.
//!
//! The trait mirrors how the upstream service is addressed: 1-based
//! inclusive `[start, last]` bounds, with the slice clamped to the rows
//! that actually exist. Implementations must be `Send + Sync` for use
//! across async tasks; methods return boxed futures for dyn-compatibility.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, Ordering};

use model::{Page, PageBounds};

use crate::error::FetchError;
use crate::protocol::{ToiletRecord, parse_envelope};

/// Type alias for a boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A backend that can serve one page of the collection per request.
pub trait PageSource: Send + Sync {
    /// Fetch the slice `[bounds.start, bounds.last]`.
    ///
    /// The returned page carries the service-reported total count; the last
    /// page of a collection may hold fewer rows than the bounds span.
    fn fetch_page(&self, bounds: PageBounds)
        -> BoxFuture<'_, Result<Page<ToiletRecord>, FetchError>>;
}

/// HTTP source for the Seoul open-data API.
///
/// URL scheme: `{base}/{api_key}/json/{service}/{start}/{last}/`.
pub struct OpenApiSource {
    client: reqwest::Client,
    base: String,
    api_key: String,
    service: String,
}

impl OpenApiSource {
    pub fn new(
        client: reqwest::Client,
        base: impl Into<String>,
        api_key: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base: base.into(),
            api_key: api_key.into(),
            service: service.into(),
        }
    }

    fn page_url(&self, bounds: PageBounds) -> String {
        format!(
            "{}/{}/json/{}/{}/{}/",
            self.base.trim_end_matches('/'),
            self.api_key,
            self.service,
            bounds.start,
            bounds.last
        )
    }
}

impl PageSource for OpenApiSource {
    fn fetch_page(
        &self,
        bounds: PageBounds,
    ) -> BoxFuture<'_, Result<Page<ToiletRecord>, FetchError>> {
        let url = self.page_url(bounds);
        Box::pin(async move {
            let resp = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::with_source("HTTP request failed", e))?;

            if !resp.status().is_success() {
                return Err(FetchError::new(format!("HTTP error: {}", resp.status())));
            }

            let text = resp
                .text()
                .await
                .map_err(|e| FetchError::with_source("Failed to read response body", e))?;

            let body = parse_envelope(&self.service, &text)?;
            Ok(Page::new(bounds, body.list_total_count, body.row))
        })
    }
}

/// In-memory page source for testing or canned data.
///
/// Serves slices of a fixed row set, clamped like the real service, and
/// counts the requests it receives.
pub struct MemorySource {
    rows: Vec<ToiletRecord>,
    requests: AtomicU32,
}

impl MemorySource {
    pub fn new(rows: Vec<ToiletRecord>) -> Self {
        Self {
            rows,
            requests: AtomicU32::new(0),
        }
    }

    /// Number of `fetch_page` calls served so far.
    pub fn request_count(&self) -> u32 {
        self.requests.load(Ordering::SeqCst)
    }

    fn slice(&self, bounds: PageBounds) -> Vec<ToiletRecord> {
        let start = (bounds.start as usize).saturating_sub(1);
        let end = (bounds.last as usize).min(self.rows.len());
        if start >= end {
            return Vec::new();
        }
        self.rows[start..end].to_vec()
    }
}

impl PageSource for MemorySource {
    fn fetch_page(
        &self,
        bounds: PageBounds,
    ) -> BoxFuture<'_, Result<Page<ToiletRecord>, FetchError>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let page = Page::new(bounds, self.rows.len() as u32, self.slice(bounds));
        Box::pin(async move { Ok(page) })
    }
}
