//! Scrapes muvipro-themed Indonesian streaming sites into media records
//! ready for a WordPress import.
//!
//! A listing page is fetched once, every "watch" link on it is followed
//! concurrently and each detail page becomes one [`MediaRecord`].

pub mod batch;
pub mod config;
pub mod detail;
pub mod dutamovie;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod model;
pub mod ngefilm;
pub mod profile;
pub mod slug;
pub mod taxonomy;

pub use batch::{BatchOutcome, BatchScraper, EventLevel, ScrapeEvent};
pub use error::{Result, ScrapeError};
pub use fetch::{FetchOptions, HttpFetcher, PageFetcher};
pub use model::{CoreMetadata, DownloadLink, EpisodeInfo, Kind, MediaRecord, Taxonomy, Term};
pub use profile::SiteProfile;

use std::fmt;
use url::Url;

/// Listing entry points a site may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Posts,
    TvShows,
    Episodes,
    Anime,
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Feed::Posts => "posts",
            Feed::TvShows => "tv",
            Feed::Episodes => "episodes",
            Feed::Anime => "anime",
        })
    }
}

/// A supported site: its extraction profile and where its feeds live.
pub trait MovieSite: Send + Sync {
    fn profile(&self) -> &SiteProfile;

    fn base_url(&self) -> &str;

    /// Path of `feed` relative to the base URL, and the kind its items are scraped as.
    fn feed_path(&self, feed: Feed) -> Option<(&'static str, Kind)>;

    fn feed_url(&self, feed: Feed) -> Result<(String, Kind)> {
        let (path, kind) = self
            .feed_path(feed)
            .ok_or_else(|| ScrapeError::UnsupportedFeed {
                site: self.profile().name,
                feed: feed.to_string(),
            })?;
        let base = self.base_url().trim_end_matches('/');
        Ok((format!("{base}/{path}"), kind))
    }
}

/// Kind requested by a free-form search URL through its `post_type` parameter.
pub fn search_kind(search_url: &str) -> Result<Kind> {
    let url = Url::parse(search_url).map_err(|e| ScrapeError::InvalidUrl(format!("{search_url}: {e}")))?;
    let post_type = url
        .query_pairs()
        .find(|(key, _)| key == "post_type")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();
    Ok(Kind::from_post_type(&post_type))
}

/// Scrape one of the site's feeds.
pub async fn scrape_feed(
    site: &dyn MovieSite,
    fetcher: &dyn PageFetcher,
    feed: Feed,
) -> Result<BatchOutcome> {
    let (url, kind) = site.feed_url(feed)?;
    let scraper = BatchScraper::new(fetcher, site.profile())?;
    Ok(scraper.scrape(&url, kind).await)
}

/// Scrape an arbitrary listing URL of the site, e.g. an advanced search.
pub async fn scrape_search(
    site: &dyn MovieSite,
    fetcher: &dyn PageFetcher,
    search_url: &str,
) -> Result<BatchOutcome> {
    let kind = search_kind(search_url)?;
    let scraper = BatchScraper::new(fetcher, site.profile())?;
    Ok(scraper.scrape(search_url, kind).await)
}
