//! Listing → detail fan-out.

use crate::detail::DetailExtractor;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::listing;
use crate::model::{Kind, MediaRecord};
use crate::profile::{Selectors, SiteProfile};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use scraper::Html;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Info,
    Error,
}

/// Something worth reporting that happened while scraping one URL.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeEvent {
    pub at: DateTime<Utc>,
    pub level: EventLevel,
    pub url: String,
    pub kind: Kind,
    pub message: String,
}

impl ScrapeEvent {
    fn new(level: EventLevel, url: &str, kind: Kind, message: String) -> Self {
        Self {
            at: Utc::now(),
            level,
            url: url.to_string(),
            kind,
            message,
        }
    }
}

/// Records of one batch plus what went wrong (or right) along the way.
#[derive(Debug, Default, Serialize)]
pub struct BatchOutcome {
    pub records: Vec<MediaRecord>,
    pub events: Vec<ScrapeEvent>,
}

impl BatchOutcome {
    pub fn errors(&self) -> impl Iterator<Item = &ScrapeEvent> {
        self.events.iter().filter(|e| e.level == EventLevel::Error)
    }
}

/// Drives one site profile over listing pages.
pub struct BatchScraper<'a> {
    fetcher: &'a dyn PageFetcher,
    profile: &'a SiteProfile,
    selectors: Selectors,
}

impl<'a> BatchScraper<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, profile: &'a SiteProfile) -> Result<Self> {
        let selectors = Selectors::compile(&profile.selectors)?;
        Ok(Self {
            fetcher,
            profile,
            selectors,
        })
    }

    /// Scrape every detail page linked from `listing_url`.
    ///
    /// A failed listing fetch yields an empty outcome. A failed detail fetch
    /// yields a degenerate record in its slot. Records come back in the order
    /// their links appear on the listing page.
    pub async fn scrape(&self, listing_url: &str, kind: Kind) -> BatchOutcome {
        let site = self.profile.name;
        tracing::info!(site, %kind, url = listing_url, "scraping listing");

        let mut outcome = BatchOutcome::default();

        let body = match self.fetcher.fetch_page(listing_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(site, %kind, url = listing_url, error = %e, "listing fetch failed");
                outcome.events.push(ScrapeEvent::new(
                    EventLevel::Error,
                    listing_url,
                    kind,
                    format!("error scraping {kind} from {listing_url}: {e}"),
                ));
                return outcome;
            }
        };

        // Parse in a block so the document is dropped before the fan-out awaits
        let urls = {
            let document = Html::parse_document(&body);
            listing::extract_detail_urls(&document, &self.selectors)
        };
        tracing::info!(site, %kind, count = urls.len(), "found articles");
        outcome.events.push(ScrapeEvent::new(
            EventLevel::Info,
            listing_url,
            kind,
            format!("found {} articles", urls.len()),
        ));

        let results = join_all(urls.iter().map(|url| self.scrape_detail(url, kind))).await;
        for (record, event) in results {
            outcome.records.push(record);
            outcome.events.extend(event);
        }

        let failed = outcome.records.iter().filter(|r| r.is_degenerate()).count();
        tracing::info!(site, %kind, records = outcome.records.len(), failed, "batch finished");
        outcome
    }

    async fn scrape_detail(&self, url: &str, kind: Kind) -> (MediaRecord, Option<ScrapeEvent>) {
        match self.fetcher.fetch_page(url).await {
            Ok(body) => (self.extract(&body, kind), None),
            Err(e) => {
                tracing::error!(site = self.profile.name, %kind, url, error = %e, "detail fetch failed");
                let event = ScrapeEvent::new(
                    EventLevel::Error,
                    url,
                    kind,
                    format!("error processing HTML from {url}: {e}"),
                );
                (MediaRecord::default(), Some(event))
            }
        }
    }

    fn extract(&self, body: &str, kind: Kind) -> MediaRecord {
        let document = Html::parse_document(body);
        DetailExtractor::new(self.profile, &self.selectors).extract(&document, kind)
    }
}
