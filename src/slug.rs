//! Slug helpers shared by record shaping and taxonomy terms.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_TAG_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Lowercase and replace every whitespace run with a single hyphen.
///
/// Used for post slugs and the multi-value taxonomy facets.
pub fn slugify(text: &str) -> String {
    WHITESPACE_RUN.replace_all(&text.to_lowercase(), "-").into_owned()
}

/// Tag slug: punctuation stripped, hyphens collapsed and trimmed.
pub fn tag_slug(tag: &str) -> String {
    let lower = tag.to_lowercase();
    let stripped = NON_TAG_CHAR.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates_whitespace_runs() {
        assert_eq!(slugify("The Dark   Knight"), "the-dark-knight");
        assert_eq!(slugify("Agak Laen\t2"), "agak-laen-2");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_is_idempotent() {
        for title in ["Kaka Boss", "  Padded Title ", "Already-a-slug", "ÉLITE Season 2"] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn tag_slug_strips_punctuation_and_trims_hyphens() {
        assert_eq!(tag_slug("Nonton Film: Kaka Boss!"), "nonton-film-kaka-boss");
        assert_eq!(tag_slug("  -lk21 -- indoxx1- "), "lk21-indoxx1");
        assert_eq!(tag_slug("kios film 21"), "kios-film-21");
    }
}
