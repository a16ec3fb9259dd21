//! Media record produced for every detail page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// WordPress post type the record is imported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Post,
    Tv,
    Episode,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Tv => "tv",
            Self::Episode => "episode",
        }
    }

    /// Kind selected by a search URL's `post_type` parameter.
    /// Anything that is not `tv` or `episode` scrapes like a post.
    pub fn from_post_type(post_type: &str) -> Self {
        match post_type {
            "tv" => Self::Tv,
            "episode" => Self::Episode,
            _ => Self::Post,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const PUBLISH: &str = "publish";

/// A `{name, slug}` taxonomy term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    pub slug: String,
}

impl Term {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// Taxonomy facets, keyed by the WordPress taxonomy names of the theme.
///
/// A facet is `None` unless its label block was found on the page;
/// `post_tag` is always filled for extracted records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(rename = "muviyear", skip_serializing_if = "Option::is_none")]
    pub year: Option<Vec<Term>>,
    #[serde(rename = "muviquality", skip_serializing_if = "Option::is_none")]
    pub quality: Option<Vec<Term>>,
    #[serde(rename = "muvicountry", skip_serializing_if = "Option::is_none")]
    pub country: Option<Vec<Term>>,
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<Term>>,
    #[serde(rename = "muvidirector", skip_serializing_if = "Option::is_none")]
    pub director: Option<Vec<Term>>,
    #[serde(rename = "muvicast", skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<Term>>,
    #[serde(default)]
    pub post_tag: Vec<Term>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeInfo {
    pub title: String,
    pub number: String,
    pub season: String,
}

/// Scalar metadata of a title, one per record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreMetadata {
    pub title: String,
    /// YouTube video id of the trailer.
    pub trailer: String,
    pub poster: String,
    pub votes: String,
    pub rating: String,
    pub released: String,
    pub runtime: String,
    pub year: String,
    pub language: String,
    pub focus_keyword: String,
    /// Player embeds; empty for tv records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub downloads: Vec<DownloadLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<EpisodeInfo>,
}

/// One scraped detail page.
///
/// `MediaRecord::default()` is the degenerate record substituted when a
/// detail page could not be fetched: every field empty and no kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub title: String,
    pub synopsis: String,
    pub slug: String,
    pub kind: Option<Kind>,
    pub status: String,
    pub core: CoreMetadata,
    pub taxonomy: Taxonomy,
}

impl MediaRecord {
    /// Fresh record for a page with the given title.
    pub fn new(title: String, synopsis: String, kind: Kind) -> Self {
        let slug = crate::slug::slugify(&title);
        let focus_keyword = format!("Nonton Film {title} sub Indo");
        Self {
            core: CoreMetadata {
                title: title.clone(),
                focus_keyword,
                ..CoreMetadata::default()
            },
            title,
            synopsis,
            slug,
            kind: Some(kind),
            status: PUBLISH.to_string(),
            taxonomy: Taxonomy::default(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.kind.is_none()
    }
}
