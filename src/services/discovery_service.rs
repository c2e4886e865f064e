use crate::config::DiscoveryConfig;
use crate::discovery::{check_feed, extract_feeds, filter_async, guess_feeds};
use crate::domain::FeedCandidate;
use crate::errors::{HermesError, HermesResult};
use crate::http::HttpFetcher;

pub struct DiscoveryService {
    fetcher: HttpFetcher,
}

impl DiscoveryService {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }

    /// Find the feeds for `config.target_url`.
    ///
    /// Steps run strictly in sequence:
    /// 1. fetch the page; an unsuccessful status fails the whole run
    /// 2. extract the feeds advertised in its `<head>`
    /// 3. with `check`, keep only the candidates that validate
    /// 4. with `guess`, and nothing left after step 3, probe the conventional
    ///    paths instead. Guesses are always validated, whether or not `check`
    ///    was requested.
    pub async fn run(&self, config: &DiscoveryConfig) -> HermesResult<Vec<FeedCandidate>> {
        let response = self.fetcher.fetch(&config.target_url).await?;
        if !response.is_ok() {
            return Err(HermesError::Status(response.status_text()));
        }

        let html = response.text().await?;
        let candidates = extract_feeds(&config.target_url, &html);

        let feeds = if config.check {
            let checked = self.check_all(&candidates).await?;
            tracing::info!(
                extracted = candidates.len(),
                valid = checked.len(),
                "Checked advertised feeds"
            );
            checked
        } else {
            candidates
        };

        if feeds.is_empty() && config.guess {
            tracing::info!(url = %config.target_url, "No feeds found, guessing common paths");
            return guess_feeds(&self.fetcher, &config.target_url).await;
        }

        Ok(feeds)
    }

    async fn check_all(&self, candidates: &[FeedCandidate]) -> HermesResult<Vec<FeedCandidate>> {
        filter_async(|candidate| check_feed(&self.fetcher, candidate), candidates).await
    }
}
