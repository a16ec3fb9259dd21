//! Page fetching.

use crate::error::Result;
use reqwest::{Client, header, redirect};
use std::time::Duration;

/// Desktop Chrome; some sites serve a stripped page without it.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/122.0.0.0 Safari/537.36";

/// HTTP options of a site.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub max_redirects: usize,
    /// Send browser-like User-Agent, Accept-Language and Accept headers.
    pub browser_headers: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_redirects: 5,
            browser_headers: true,
        }
    }
}

/// Source of raw HTML for a URL.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// reqwest-backed fetcher. Certificate validation is disabled: the mirror
/// domains rotate often and many serve expired or mismatched certificates.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(true)
            .timeout(options.timeout)
            .redirect(redirect::Policy::limited(options.max_redirects));

        if options.browser_headers {
            let mut headers = header::HeaderMap::new();
            headers.insert(
                header::ACCEPT_LANGUAGE,
                header::HeaderValue::from_static("en-US,en;q=0.9"),
            );
            headers.insert(
                header::ACCEPT,
                header::HeaderValue::from_static("text/html,application/xhtml+xml"),
            );
            builder = builder.user_agent(USER_AGENT).default_headers(headers);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }
}
