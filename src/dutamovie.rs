use crate::fetch::FetchOptions;
use crate::model::Kind;
use crate::profile::{
    Arity, Facet, LabelRule, POST_TAG_TEMPLATE, PlayerStyle, SelectorSet, SiteProfile, SlugStyle,
};
use crate::{Feed, MovieSite};
use std::time::Duration;

/// dutamovie labels its metadata in Indonesian only and keeps plain
/// lowercase slugs for every facet.
const LABELS: &[LabelRule] = &[
    LabelRule {
        labels: &["Tahun:"],
        facet: Facet::Year,
        arity: Arity::Single,
        slug: SlugStyle::Lowercase,
    },
    LabelRule {
        labels: &["Kualitas:"],
        facet: Facet::Quality,
        arity: Arity::Single,
        slug: SlugStyle::Lowercase,
    },
    LabelRule {
        labels: &["Negara:"],
        facet: Facet::Country,
        arity: Arity::Single,
        slug: SlugStyle::Lowercase,
    },
    LabelRule {
        labels: &["Genre:"],
        facet: Facet::Genre,
        arity: Arity::Multi,
        slug: SlugStyle::Lowercase,
    },
];

/// Extraction profile of dutamovie mirrors.
pub fn profile() -> SiteProfile {
    SiteProfile {
        name: "dutamovie",
        selectors: SelectorSet::default(),
        labels: LABELS,
        player: PlayerStyle::RawSource,
        runtime_unit: None,
        tag_template: POST_TAG_TEMPLATE,
        fetch: FetchOptions {
            timeout: Duration::from_secs(30),
            max_redirects: 100,
            browser_headers: false,
        },
    }
}

/// dutamovie: movies and the anime category.
pub struct DutamovieSite {
    base_url: String,
    profile: SiteProfile,
}

impl DutamovieSite {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            profile: profile(),
        }
    }
}

impl MovieSite for DutamovieSite {
    fn profile(&self) -> &SiteProfile {
        &self.profile
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn feed_path(&self, feed: Feed) -> Option<(&'static str, Kind)> {
        match feed {
            Feed::Posts => Some(("?s=&search=advanced&post_type=movie", Kind::Post)),
            Feed::Anime => Some(("category/animasi/", Kind::Post)),
            Feed::TvShows | Feed::Episodes => None,
        }
    }
}
