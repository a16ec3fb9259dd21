use crate::fetch::FetchOptions;
use crate::model::Kind;
use crate::profile::{BILINGUAL_LABELS, POST_TAG_TEMPLATE, PlayerStyle, SelectorSet, SiteProfile};
use crate::{Feed, MovieSite};

/// Extraction profile of ngefilm mirrors.
pub fn profile() -> SiteProfile {
    SiteProfile {
        name: "ngefilm",
        selectors: SelectorSet::default(),
        labels: BILINGUAL_LABELS,
        player: PlayerStyle::IframeSnippet,
        runtime_unit: Some("Min"),
        tag_template: POST_TAG_TEMPLATE,
        fetch: FetchOptions::default(),
    }
}

/// ngefilm: movies, tv shows and episodes.
pub struct NgefilmSite {
    base_url: String,
    profile: SiteProfile,
}

impl NgefilmSite {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            profile: profile(),
        }
    }
}

impl MovieSite for NgefilmSite {
    fn profile(&self) -> &SiteProfile {
        &self.profile
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn feed_path(&self, feed: Feed) -> Option<(&'static str, Kind)> {
        match feed {
            Feed::Posts => Some(("?s=&search=advanced&post_type=movie", Kind::Post)),
            Feed::TvShows => Some(("tv", Kind::Tv)),
            Feed::Episodes => Some(("eps", Kind::Episode)),
            Feed::Anime => None,
        }
    }
}
