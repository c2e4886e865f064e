pub mod fetcher;

pub use fetcher::{FetchedResponse, HttpFetcher, USER_AGENT};
