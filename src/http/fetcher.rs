use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::errors::HermesResult;

/// Value of the `User-Agent` header sent with every request.
pub const USER_AGENT: &str = "hermes/1.0.0";

/// Issues GET requests identified by [`USER_AGENT`].
///
/// No timeout and no retries are configured; redirects follow the reqwest default.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> HermesResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &Url) -> HermesResult<FetchedResponse> {
        tracing::debug!(url = %url, "Fetching");
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!(url = %url, status = %response.status(), "Received response");
        Ok(FetchedResponse { response })
    }
}

#[derive(Debug)]
pub struct FetchedResponse {
    response: Response,
}

impl FetchedResponse {
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// True for any 2xx status.
    pub fn is_ok(&self) -> bool {
        self.status().is_success()
    }

    /// Reason phrase for the status, e.g. "Not Found".
    pub fn status_text(&self) -> String {
        let status = self.status();
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string())
    }

    pub async fn text(self) -> HermesResult<String> {
        Ok(self.response.text().await?)
    }

    /// Reads the body and parses it as JSON. A body that cannot be read is an
    /// `Http` error, a body that is not JSON is a `Json` error.
    pub async fn json(self) -> HermesResult<serde_json::Value> {
        let body = self.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
