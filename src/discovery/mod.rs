pub mod extractor;
pub mod filter;
pub mod guesser;
pub mod validator;

pub use extractor::extract_feeds;
pub use filter::filter_async;
pub use guesser::{guess_candidates, guess_feeds};
pub use validator::{check_feed, has_feed_root, is_json_feed};
