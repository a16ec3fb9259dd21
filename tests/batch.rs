use muvi_scrape::ngefilm::{self, NgefilmSite};
use muvi_scrape::{
    BatchScraper, EventLevel, Feed, Kind, PageFetcher, Result, ScrapeError, scrape_feed,
    scrape_search,
};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Barrier;

/// Serves canned pages; any other URL fails like a 404.
struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    fn new(pages: &[(&str, String)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, body)| (url.to_string(), body.clone()))
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::InvalidUrl(format!("404 Not Found: {url}")))
    }
}

/// Holds every detail fetch until all of them are in flight at once.
struct GatedFetcher {
    listing_url: String,
    listing: String,
    gate: Barrier,
}

#[async_trait::async_trait]
impl PageFetcher for GatedFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        if url == self.listing_url {
            return Ok(self.listing.clone());
        }
        self.gate.wait().await;
        Ok(detail(url.trim_end_matches('/').rsplit('/').next().unwrap_or_default()))
    }
}

const BASE: &str = "https://ngefilm.test/";

fn listing(hrefs: &[&str]) -> String {
    let articles: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<article class="item-infinite">
                    <h2 class="entry-title"><a href="{href}">x</a></h2>
                    <a class="button gmr-watch-button" href="{href}">Tonton</a>
                </article>"#
            )
        })
        .collect();
    format!("<html><body><main>{articles}</main></body></html>")
}

fn detail(title: &str) -> String {
    format!(
        r#"<html><body>
        <h1 class="entry-title" itemprop="name">{title}</h1>
        <div class="entry-content entry-content-single"><p>About {title}.</p></div>
        <span itemprop="ratingValue">6,9</span>
        <div class="gmr-moviedata"><strong>Genre:</strong> <a>Comedy</a></div>
        <div class="gmr-embed-responsive"><iframe src="https://embed.test/{title}"></iframe></div>
        <ul class="gmr-download-list"><li><a href="https://dl.test/{title}">Download</a></li></ul>
        </body></html>"#
    )
}

#[tokio::test]
async fn records_follow_listing_order() {
    let fetcher = StaticFetcher::new(&[
        (
            "https://ngefilm.test/?s=&search=advanced&post_type=movie",
            listing(&["https://ngefilm.test/a/", "https://ngefilm.test/b/", "https://ngefilm.test/c/"]),
        ),
        ("https://ngefilm.test/a/", detail("Alpha")),
        ("https://ngefilm.test/b/", detail("Bravo")),
        ("https://ngefilm.test/c/", detail("Charlie")),
    ]);
    let site = NgefilmSite::new(BASE.into());

    let outcome = scrape_feed(&site, &fetcher, Feed::Posts).await.unwrap();

    let titles: Vec<&str> = outcome.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);
    assert!(outcome.records.iter().all(|r| r.kind == Some(Kind::Post)));
    assert_eq!(outcome.records[0].core.rating, "6.9");
    assert_eq!(outcome.records[1].core.downloads[0].url, "https://dl.test/Bravo");
    assert_eq!(outcome.errors().count(), 0);
}

#[tokio::test]
async fn failed_detail_becomes_degenerate_record() {
    let fetcher = StaticFetcher::new(&[
        (
            "https://ngefilm.test/eps",
            listing(&[
                "https://ngefilm.test/ep-1/",
                "https://ngefilm.test/missing/",
                "https://ngefilm.test/ep-2/",
            ]),
        ),
        ("https://ngefilm.test/ep-1/", detail("Show S2 Episode 01")),
        ("https://ngefilm.test/ep-2/", detail("Show Episode 12")),
    ]);
    let site = NgefilmSite::new(BASE.into());

    let outcome = scrape_feed(&site, &fetcher, Feed::Episodes).await.unwrap();

    assert_eq!(outcome.records.len(), 3);
    assert!(outcome.records[1].is_degenerate());
    assert_eq!(outcome.records[1], Default::default());

    let populated: Vec<_> = outcome.records.iter().filter(|r| !r.is_degenerate()).collect();
    assert_eq!(populated.len(), 2);
    let first = populated[0].core.episode.as_ref().unwrap();
    assert_eq!((first.number.as_str(), first.season.as_str()), ("01", "2"));
    let second = populated[1].core.episode.as_ref().unwrap();
    assert_eq!((second.number.as_str(), second.season.as_str()), ("12", "1"));

    let errors: Vec<_> = outcome.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].url, "https://ngefilm.test/missing/");
    assert_eq!(errors[0].kind, Kind::Episode);
}

#[tokio::test]
async fn listing_failure_yields_empty_batch() {
    let fetcher = StaticFetcher::new(&[]);
    let site = NgefilmSite::new(BASE.into());

    let outcome = scrape_feed(&site, &fetcher, Feed::TvShows).await.unwrap();

    assert!(outcome.records.is_empty());
    let errors: Vec<_> = outcome.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].level, EventLevel::Error);
    assert_eq!(errors[0].url, "https://ngefilm.test/tv");
    assert!(errors[0].message.contains("https://ngefilm.test/tv"));
}

#[tokio::test]
async fn empty_listing_yields_no_records() {
    let fetcher = StaticFetcher::new(&[("https://ngefilm.test/tv", listing(&[]))]);
    let profile = ngefilm::profile();
    let scraper = BatchScraper::new(&fetcher, &profile).unwrap();

    let outcome = scraper.scrape("https://ngefilm.test/tv", Kind::Tv).await;

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.errors().count(), 0);
}

#[tokio::test]
async fn tv_search_skips_players_and_downloads() {
    let search = "https://ngefilm.test/?s=show&search=advanced&post_type=tv";
    let fetcher = StaticFetcher::new(&[
        (search, listing(&["https://ngefilm.test/tv/show/"])),
        ("https://ngefilm.test/tv/show/", detail("Show")),
    ]);
    let site = NgefilmSite::new(BASE.into());

    let outcome = scrape_search(&site, &fetcher, search).await.unwrap();

    assert_eq!(outcome.records.len(), 1);
    let record = &outcome.records[0];
    assert_eq!(record.kind, Some(Kind::Tv));
    assert!(record.core.players.is_empty());
    assert!(record.core.downloads.is_empty());
    assert_eq!(record.taxonomy.genre.as_ref().unwrap()[0].slug, "comedy");
}

#[tokio::test]
async fn duplicate_links_are_scraped_twice() {
    let fetcher = StaticFetcher::new(&[
        (
            "https://ngefilm.test/tv",
            listing(&["https://ngefilm.test/x/", "https://ngefilm.test/x/"]),
        ),
        ("https://ngefilm.test/x/", detail("Xray")),
    ]);
    let site = NgefilmSite::new(BASE.into());

    let outcome = scrape_feed(&site, &fetcher, Feed::TvShows).await.unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0], outcome.records[1]);
}

#[tokio::test]
async fn detail_pages_are_fetched_concurrently() {
    let details = ["https://ngefilm.test/a/", "https://ngefilm.test/b/", "https://ngefilm.test/c/"];
    let fetcher = GatedFetcher {
        listing_url: "https://ngefilm.test/tv".to_string(),
        listing: listing(&details),
        gate: Barrier::new(details.len()),
    };
    let site = NgefilmSite::new(BASE.into());

    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        scrape_feed(&site, &fetcher, Feed::TvShows),
    )
    .await
    .expect("detail fetches were not issued concurrently")
    .unwrap();

    let titles: Vec<&str> = outcome.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
    assert_eq!(outcome.errors().count(), 0);
}
