use url::Url;

use crate::discovery::filter::filter_async;
use crate::discovery::validator::check_feed;
use crate::domain::{FeedCandidate, FeedType};
use crate::errors::HermesResult;
use crate::http::HttpFetcher;

/// Conventional feed locations probed when a page advertises none.
///
/// `feed` and `rss` are probed as RSS whatever they actually serve.
const GUESSED_PATHS: &[(&str, FeedType)] = &[
    ("rss.xml", FeedType::Rss),
    ("atom.xml", FeedType::Atom),
    ("feed", FeedType::Rss),
    ("rss", FeedType::Rss),
];

/// Build the guessed candidates for `base`, treating it as a directory.
///
/// `https://example.com/blog` and `https://example.com/blog/` give the same
/// candidates. The slash is added to the path rather than to the raw URL
/// string, so `https://example.com/blog?x=1` guesses under `/blog/` with the
/// query dropped, where appending to the string would have resolved against
/// the site root.
pub fn guess_candidates(base: &Url) -> Vec<FeedCandidate> {
    let directory = as_directory(base);

    GUESSED_PATHS
        .iter()
        .filter_map(|(path, feed_type)| FeedCandidate::resolve(&directory, path, *feed_type))
        .collect()
}

/// Probe the conventional feed locations under `base` and keep the ones that
/// validate, in probe order.
pub async fn guess_feeds(fetcher: &HttpFetcher, base: &Url) -> HermesResult<Vec<FeedCandidate>> {
    let candidates = guess_candidates(base);
    let feeds = filter_async(|candidate| check_feed(fetcher, candidate), &candidates).await?;

    tracing::info!(base = %base, found = feeds.len(), "Guessed feeds");
    Ok(feeds)
}

fn as_directory(base: &Url) -> Url {
    if base.path().ends_with('/') {
        return base.clone();
    }

    let mut directory = base.clone();
    let path = format!("{}/", base.path());
    directory.set_path(&path);
    directory
}
