pub mod candidate;

pub use candidate::{FeedCandidate, FeedType};
