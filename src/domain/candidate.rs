use std::fmt;

use url::Url;

/// Media types a page may advertise for its feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedType {
    Rss,
    Atom,
    /// `application/feed+json`
    JsonFeed,
    /// Plain `application/json`, probed as a JSON Feed.
    Json,
}

impl FeedType {
    pub const ALL: [FeedType; 4] = [
        FeedType::Rss,
        FeedType::Atom,
        FeedType::JsonFeed,
        FeedType::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedType::Rss => "application/rss+xml",
            FeedType::Atom => "application/atom+xml",
            FeedType::JsonFeed => "application/feed+json",
            FeedType::Json => "application/json",
        }
    }
}

impl std::str::FromStr for FeedType {
    type Err = String;

    // Exact match: `type` attributes are compared verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedType::ALL
            .into_iter()
            .find(|feed_type| feed_type.as_str() == s)
            .ok_or_else(|| format!("Unknown feed type: {}", s))
    }
}

impl fmt::Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A feed reference found in a page or guessed from a conventional path.
///
/// `href` is always absolute; relative references are resolved when the
/// candidate is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCandidate {
    pub href: Url,
    pub title: Option<String>,
    pub feed_type: FeedType,
}

impl FeedCandidate {
    pub fn new(href: Url, feed_type: FeedType) -> Self {
        Self {
            href,
            title: None,
            feed_type,
        }
    }

    /// Resolve `reference` against `base`. Returns `None` when the reference
    /// cannot be turned into an absolute URL.
    pub fn resolve(base: &Url, reference: &str, feed_type: FeedType) -> Option<Self> {
        base.join(reference)
            .ok()
            .map(|href| Self::new(href, feed_type))
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.filter(|t| !t.is_empty());
        self
    }
}

/// Format: "- {href} ({media type})"
impl fmt::Display for FeedCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} ({})", self.href, self.feed_type)
    }
}
