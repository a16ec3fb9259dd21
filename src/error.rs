use thiserror::Error;

/// Errors surfaced by the scraping library.
///
/// Transport failures during a batch never reach the caller; they are
/// logged and folded into the batch outcome. What remains are setup errors.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
    #[error("site `{site}` has no `{feed}` feed")]
    UnsupportedFeed { site: &'static str, feed: String },
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
