use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::Value;

use crate::domain::{FeedCandidate, FeedType};
use crate::errors::{HermesError, HermesResult};
use crate::http::HttpFetcher;

const JSON_FEED_VERSION_PREFIX: &str = "https://jsonfeed.org/version/";

/// Fetch a candidate and check that its body looks like the feed it claims to be.
///
/// A non-success status or a body of the wrong shape yields `Ok(false)`. Only a
/// transport failure is returned as an error, since then the check could not
/// be made at all.
pub async fn check_feed(fetcher: &HttpFetcher, candidate: &FeedCandidate) -> HermesResult<bool> {
    let response = fetcher.fetch(&candidate.href).await?;

    if !response.is_ok() {
        tracing::debug!(
            href = %candidate.href,
            status = %response.status(),
            "Candidate rejected: unsuccessful response"
        );
        return Ok(false);
    }

    let valid = match candidate.feed_type {
        FeedType::Rss | FeedType::Atom => has_feed_root(&response.text().await?),
        FeedType::JsonFeed | FeedType::Json => match response.json().await {
            Ok(value) => is_json_feed(&value),
            Err(HermesError::Json(_)) => false,
            Err(e) => return Err(e),
        },
    };

    tracing::debug!(href = %candidate.href, feed_type = %candidate.feed_type, valid, "Checked candidate");
    Ok(valid)
}

/// True when the first element of the document is `<rss>` or `<feed>`.
///
/// Anything before the root (declaration, doctype, comments, stray text) is
/// skipped. Mismatched end tags are tolerated; a document that cannot be read
/// up to its root element is not a feed.
pub fn has_feed_root(body: &str) -> bool {
    let mut reader = Reader::from_str(body);
    reader.config_mut().check_end_names = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                return matches!(element.name().as_ref(), b"rss" | b"feed");
            }
            Ok(Event::Eof) | Err(_) => return false,
            Ok(_) => continue,
        }
    }
}

/// True for a JSON object whose `version` is a JSON Feed version URL.
pub fn is_json_feed(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("version"))
        .and_then(Value::as_str)
        .is_some_and(|version| version.starts_with(JSON_FEED_VERSION_PREFIX))
}
