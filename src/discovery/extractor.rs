use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::{FeedCandidate, FeedType};

/// Only links in `<head>` count; a `<link>` inside `<body>` or `<pre>` is page
/// content, not metadata.
static FEED_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"head link[rel="alternate"]"#).expect("feed link selector is valid")
});

/// Collect the feeds a page advertises in its `<head>`, in document order.
///
/// Parsing is lenient: malformed markup only reduces what is found. Links
/// missing `href` or `type` (an empty `href` counts as missing), with an
/// unrecognised `type`, or whose `href` cannot be resolved against `base` are
/// skipped.
pub fn extract_feeds(base: &Url, html: &str) -> Vec<FeedCandidate> {
    let document = Html::parse_document(html);

    let candidates: Vec<FeedCandidate> = document
        .select(&FEED_LINK_SELECTOR)
        .filter_map(|element| candidate_from_link(base, element))
        .collect();

    tracing::info!(base = %base, count = candidates.len(), "Extracted feed candidates");
    candidates
}

fn candidate_from_link(base: &Url, element: ElementRef<'_>) -> Option<FeedCandidate> {
    let link = element.value();

    let href = link.attr("href").filter(|href| !href.is_empty());
    let (Some(href), Some(media_type)) = (href, link.attr("type")) else {
        tracing::debug!("Skipping alternate link without href or type");
        return None;
    };

    let feed_type = match media_type.parse::<FeedType>() {
        Ok(feed_type) => feed_type,
        Err(reason) => {
            tracing::debug!(href, %reason, "Skipping alternate link");
            return None;
        }
    };

    let Some(candidate) = FeedCandidate::resolve(base, href, feed_type) else {
        tracing::debug!(href, "Skipping alternate link with unresolvable href");
        return None;
    };

    Some(candidate.with_title(link.attr("title").map(str::to_string)))
}
