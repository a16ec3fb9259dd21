//! Maps the `Label: value, value` metadata blocks of a detail page onto
//! taxonomy facets, driven by the profile's label table.

use crate::model::{MediaRecord, Term};
use crate::profile::{Arity, Facet, LabelRule, Selectors, SiteProfile, SlugStyle};
use crate::slug::{slugify, tag_slug};
use scraper::{ElementRef, Html};

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn term(name: String, style: SlugStyle) -> Term {
    let slug = match style {
        SlugStyle::Lowercase => name.to_lowercase(),
        SlugStyle::Hyphenated => slugify(&name),
    };
    Term { name, slug }
}

fn block_terms(block: ElementRef<'_>, rule: &LabelRule, selectors: &Selectors) -> Vec<Term> {
    let mut values = block.select(&selectors.metadata_value).map(element_text);
    match rule.arity {
        // A labelled block without a link still yields one (empty) term
        Arity::Single => vec![term(values.next().unwrap_or_default(), rule.slug)],
        Arity::Multi => values.map(|name| term(name, rule.slug)).collect(),
    }
}

/// Fill `record.taxonomy` from the page's metadata blocks.
///
/// Also back-fills `record.core.year` from the year facet. A later block
/// with the same facet replaces an earlier one.
pub fn classify(
    document: &Html,
    selectors: &Selectors,
    profile: &SiteProfile,
    record: &mut MediaRecord,
) {
    for block in document.select(&selectors.metadata_block) {
        let label = block
            .select(&selectors.metadata_label)
            .next()
            .map(element_text)
            .unwrap_or_default();
        let Some(rule) = profile.rule_for(&label) else {
            continue;
        };

        let terms = block_terms(block, rule, selectors);
        let taxonomy = &mut record.taxonomy;
        match rule.facet {
            Facet::Year => {
                let year = terms.first().map(|t| t.name.clone()).unwrap_or_default();
                if year.is_empty() {
                    tracing::debug!(label = %label, "year block without value");
                }
                record.core.year = year;
                taxonomy.year = Some(terms);
            }
            Facet::Quality => taxonomy.quality = Some(terms),
            Facet::Country => taxonomy.country = Some(terms),
            Facet::Genre => taxonomy.genre = Some(terms),
            Facet::Director => taxonomy.director = Some(terms),
            Facet::Cast => taxonomy.cast = Some(terms),
        }
    }

    record.taxonomy.post_tag = post_tags(profile.tag_template, &record.title);
}

/// Expand the keyword template for `title` into tag terms.
pub fn post_tags(template: &str, title: &str) -> Vec<Term> {
    template
        .replace("{title}", title)
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| Term::new(tag, tag_slug(tag)))
        .collect()
}
