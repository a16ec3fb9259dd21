use crate::profile::Selectors;
use scraper::Html;

/// Detail-page URLs of a listing page, in document order.
///
/// Articles without a watch button (or with an empty `href`) are skipped.
/// Duplicates are kept.
pub fn extract_detail_urls(document: &Html, selectors: &Selectors) -> Vec<String> {
    document
        .select(&selectors.article)
        .filter_map(|article| {
            article
                .select(&selectors.watch_link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .filter(|href| !href.is_empty())
                .map(String::from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SelectorSet;

    fn urls(html: &str) -> Vec<String> {
        let selectors = Selectors::compile(&SelectorSet::default()).unwrap();
        extract_detail_urls(&Html::parse_document(html), &selectors)
    }

    #[test]
    fn collects_watch_links_in_document_order() {
        let html = r#"
            <article class="item-infinite"><a class="button gmr-watch-button" href="https://x/a/">Tonton</a></article>
            <article class="item-infinite"><a class="button" href="https://x/ignored/">Info</a></article>
            <article class="item-infinite"><a class="button gmr-watch-button" href="">Tonton</a></article>
            <article class="item-infinite"><a class="button gmr-watch-button" href="https://x/b/">Tonton</a></article>
            <article class="item-infinite"><a class="button gmr-watch-button" href="https://x/a/">Tonton</a></article>
        "#;
        assert_eq!(urls(html), vec!["https://x/a/", "https://x/b/", "https://x/a/"]);
    }

    #[test]
    fn empty_listing_yields_no_urls() {
        assert!(urls("<html><body><p>Tidak ditemukan</p></body></html>").is_empty());
    }
}
