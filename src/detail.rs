//! Detail page → [`MediaRecord`].
//!
//! Extraction is best effort: a missing element leaves its field empty and
//! never stops the remaining steps.

use crate::model::{DownloadLink, EpisodeInfo, Kind, MediaRecord};
use crate::profile::{PLACEHOLDER_PLAYERS, PlayerStyle, Selectors, SiteProfile};
use crate::taxonomy;
use scraper::{Html, Selector};
use url::Url;

const THUMBNAIL_SUFFIX: &str = "-60x90";

fn first_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(String::from)
}

/// Video id of a YouTube watch URL, whatever the scheme or host variant.
/// Any other link is returned unchanged.
pub fn youtube_id(href: &str) -> String {
    if let Ok(url) = Url::parse(href)
        && matches!(
            url.host_str(),
            Some("youtube.com" | "www.youtube.com" | "m.youtube.com")
        )
        && url.path() == "/watch"
        && let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "v")
    {
        return id.into_owned();
    }
    href.to_string()
}

/// `"7,5"` → `"7.5"`.
pub fn normalize_rating(rating: &str) -> String {
    rating.replacen(',', ".", 1)
}

/// Episode and season numbers guessed from an episode heading.
///
/// Headings mentioning `S2` with at least two digits take the last two
/// digits as the episode and the first digit as the season; everything
/// else is season 1 with all digits as the episode. Titles carrying other
/// numbers (years, part numbers) come out wrong.
pub fn episode_numbers(title: &str) -> (String, String) {
    let digits: String = title.chars().filter(char::is_ascii_digit).collect();
    if title.contains("S2") && digits.len() >= 2 {
        let episode = digits[digits.len() - 2..].to_string();
        let season = digits[..1].to_string();
        (episode, season)
    } else {
        (digits, "1".to_string())
    }
}

/// Runs the extraction steps of one profile over detail pages.
pub struct DetailExtractor<'a> {
    profile: &'a SiteProfile,
    selectors: &'a Selectors,
}

impl<'a> DetailExtractor<'a> {
    pub fn new(profile: &'a SiteProfile, selectors: &'a Selectors) -> Self {
        Self { profile, selectors }
    }

    pub fn extract(&self, document: &Html, kind: Kind) -> MediaRecord {
        let s = self.selectors;

        let title = first_text(document, &s.title);
        let synopsis = first_text(document, &s.synopsis);
        let mut record = MediaRecord::new(title, synopsis, kind);

        let core = &mut record.core;
        core.trailer = first_attr(document, &s.trailer, "href")
            .map(|href| youtube_id(&href))
            .unwrap_or_default();
        core.poster = first_attr(document, &s.poster, "src")
            .map(|src| src.replacen(THUMBNAIL_SUFFIX, "", 1))
            .unwrap_or_default();
        core.votes = first_text(document, &s.votes);
        core.rating = normalize_rating(&first_text(document, &s.rating));
        core.released = first_text(document, &s.released);
        core.runtime = self.runtime(first_text(document, &s.runtime));
        core.language = first_text(document, &s.language);

        taxonomy::classify(document, s, self.profile, &mut record);

        if kind != Kind::Tv {
            record.core.players = self.players(document);
            record.core.downloads = self.downloads(document);
        }

        if kind == Kind::Episode {
            let title = first_text(document, &s.episode_title);
            let (number, season) = episode_numbers(&title);
            record.core.episode = Some(EpisodeInfo {
                title,
                number,
                season,
            });
        }

        record
    }

    fn runtime(&self, text: String) -> String {
        match self.profile.runtime_unit {
            Some(unit) => text
                .strip_suffix(unit)
                .map(|rest| rest.trim_end().to_string())
                .unwrap_or(text),
            None => text,
        }
    }

    fn players(&self, document: &Html) -> Vec<String> {
        let src = first_attr(document, &self.selectors.embed_iframe, "src").unwrap_or_default();
        let primary = match self.profile.player {
            PlayerStyle::IframeSnippet => format!(
                r#"<iframe width="640" height="360" src="{src}" scrolling="no" frameborder="0" allowfullscreen></iframe>"#
            ),
            PlayerStyle::RawSource => src,
        };

        let mut players = Vec::with_capacity(1 + PLACEHOLDER_PLAYERS.len());
        players.push(primary);
        players.extend(PLACEHOLDER_PLAYERS.iter().map(|p| p.to_string()));
        players
    }

    fn downloads(&self, document: &Html) -> Vec<DownloadLink> {
        document
            .select(&self.selectors.download_link)
            .map(|a| DownloadLink {
                title: a.text().collect::<String>(),
                url: a.value().attr("href").unwrap_or_default().to_string(),
            })
            .collect()
    }
}
