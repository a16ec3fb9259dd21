//! Extraction profiles.
//!
//! Every supported site runs the same pipeline; what differs between them
//! (selectors, metadata label vocabulary, a few string transforms and the
//! HTTP options) lives in a [`SiteProfile`].

use crate::error::{Result, ScrapeError};
use crate::fetch::FetchOptions;
use scraper::Selector;

/// CSS selectors of a muvipro-style page.
#[derive(Debug, Clone)]
pub struct SelectorSet {
    pub article: &'static str,
    pub watch_link: &'static str,
    pub title: &'static str,
    pub synopsis: &'static str,
    pub trailer: &'static str,
    pub poster: &'static str,
    pub votes: &'static str,
    pub rating: &'static str,
    pub released: &'static str,
    pub runtime: &'static str,
    pub language: &'static str,
    pub metadata_block: &'static str,
    pub metadata_label: &'static str,
    pub metadata_value: &'static str,
    pub embed_iframe: &'static str,
    pub download_link: &'static str,
    pub episode_title: &'static str,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            article: "article.item-infinite",
            watch_link: "a.button.gmr-watch-button",
            title: "h1.entry-title",
            synopsis: "div.entry-content.entry-content-single p",
            trailer: "a.gmr-trailer-popup",
            poster: "img.attachment-thumbnail",
            votes: r#"span[itemprop="ratingCount"]"#,
            rating: r#"span[itemprop="ratingValue"]"#,
            released: r#"time[itemprop="dateCreated"]"#,
            runtime: r#"span[property="duration"]"#,
            language: r#"span[property="inLanguage"]"#,
            metadata_block: "div.gmr-moviedata",
            metadata_label: "strong",
            metadata_value: "a",
            embed_iframe: "div.gmr-embed-responsive iframe",
            download_link: "ul.gmr-download-list a",
            episode_title: r#"h1.entry-title[itemprop="name"]"#,
        }
    }
}

/// Taxonomy facet a metadata block can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Year,
    Quality,
    Country,
    Genre,
    Director,
    Cast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// First linked value only.
    Single,
    /// Every linked value.
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugStyle {
    Lowercase,
    Hyphenated,
}

/// One row of the label table: which facet a label feeds and how.
#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    pub labels: &'static [&'static str],
    pub facet: Facet,
    pub arity: Arity,
    pub slug: SlugStyle,
}

/// Label table shared by the bilingual muvipro sites.
pub const BILINGUAL_LABELS: &[LabelRule] = &[
    LabelRule {
        labels: &["Tahun:", "Year:"],
        facet: Facet::Year,
        arity: Arity::Single,
        slug: SlugStyle::Lowercase,
    },
    LabelRule {
        labels: &["Kualitas:", "Quality:"],
        facet: Facet::Quality,
        arity: Arity::Single,
        slug: SlugStyle::Lowercase,
    },
    LabelRule {
        labels: &["Negara:", "Country:"],
        facet: Facet::Country,
        arity: Arity::Multi,
        slug: SlugStyle::Hyphenated,
    },
    LabelRule {
        labels: &["Genre:"],
        facet: Facet::Genre,
        arity: Arity::Multi,
        slug: SlugStyle::Hyphenated,
    },
    LabelRule {
        labels: &["Direksi:", "Director:"],
        facet: Facet::Director,
        arity: Arity::Multi,
        slug: SlugStyle::Hyphenated,
    },
    LabelRule {
        labels: &["Pemain:", "Cast:"],
        facet: Facet::Cast,
        arity: Arity::Multi,
        slug: SlugStyle::Hyphenated,
    },
];

/// How player slot 1 is rendered from the embed iframe's `src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStyle {
    /// Wrapped into a 640x360 iframe snippet.
    IframeSnippet,
    /// The raw `src` attribute.
    RawSource,
}

/// Player slots 2-4. Fixed embeds, never scraped.
pub const PLACEHOLDER_PLAYERS: [&str; 3] = [
    r#"<iframe width="640" height="360" src="https://hxfile.co/embed-xxxxxx.html" scrolling="no" frameborder="0" allowfullscreen></iframe>"#,
    r#"<iframe width="640" height="360" src="https://gettapeads.com/e/xxxxxxxxxxx" scrolling="no" frameborder="0" allowfullscreen></iframe>"#,
    r#"<iframe width="640" height="360" src="https://krakenfiles.com/embed-video/xxxxxxxxx" scrolling="no" frameborder="0" allowfullscreen></iframe>"#,
];

/// SEO keyword list; `{title}` is replaced by the record title.
pub const POST_TAG_TEMPLATE: &str = "kios film 21, indoxx1, cinemaindo, nonton film indonesia, \
filmapik, ngefilm21, lk21, nonton film lk21, nonton {title} lk21, gudangmovies21, \
download film indonesia terbaru lk21, download film sub indo, nonton film {title}, \
nonton film gratis, layarkaca21, streaming film {title}, ganool";

/// Named configuration of the extraction pipeline for one site.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub name: &'static str,
    pub selectors: SelectorSet,
    pub labels: &'static [LabelRule],
    pub player: PlayerStyle,
    /// Unit suffix removed from the runtime text, e.g. `"Min"`.
    pub runtime_unit: Option<&'static str>,
    pub tag_template: &'static str,
    pub fetch: FetchOptions,
}

impl SiteProfile {
    pub fn rule_for(&self, label: &str) -> Option<&LabelRule> {
        self.labels
            .iter()
            .find(|rule| rule.labels.iter().any(|l| *l == label))
    }
}

fn compile(selector: &'static str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// A [`SelectorSet`] parsed once and reused for every page of a batch.
#[derive(Debug)]
pub struct Selectors {
    pub article: Selector,
    pub watch_link: Selector,
    pub title: Selector,
    pub synopsis: Selector,
    pub trailer: Selector,
    pub poster: Selector,
    pub votes: Selector,
    pub rating: Selector,
    pub released: Selector,
    pub runtime: Selector,
    pub language: Selector,
    pub metadata_block: Selector,
    pub metadata_label: Selector,
    pub metadata_value: Selector,
    pub embed_iframe: Selector,
    pub download_link: Selector,
    pub episode_title: Selector,
}

impl Selectors {
    pub fn compile(set: &SelectorSet) -> Result<Self> {
        Ok(Self {
            article: compile(set.article)?,
            watch_link: compile(set.watch_link)?,
            title: compile(set.title)?,
            synopsis: compile(set.synopsis)?,
            trailer: compile(set.trailer)?,
            poster: compile(set.poster)?,
            votes: compile(set.votes)?,
            rating: compile(set.rating)?,
            released: compile(set.released)?,
            runtime: compile(set.runtime)?,
            language: compile(set.language)?,
            metadata_block: compile(set.metadata_block)?,
            metadata_label: compile(set.metadata_label)?,
            metadata_value: compile(set.metadata_value)?,
            embed_iframe: compile(set.embed_iframe)?,
            download_link: compile(set.download_link)?,
            episode_title: compile(set.episode_title)?,
        })
    }
}
