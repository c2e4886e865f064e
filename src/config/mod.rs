use url::Url;

use crate::cli::Cli;
use crate::errors::{HermesError, HermesResult};

pub const USAGE: &str = "Usage: hermes [--check] [--guess] URL";

/// Resolved options for a single discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub target_url: Url,
    pub check: bool,
    pub guess: bool,
}

impl DiscoveryConfig {
    pub fn new(target_url: Url) -> Self {
        Self {
            target_url,
            check: false,
            guess: false,
        }
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    pub fn with_guess(mut self, guess: bool) -> Self {
        self.guess = guess;
        self
    }

    /// Load `.env` from the working directory so `HERMES_CHECK` and
    /// `HERMES_GUESS` can be set there. Must run before the CLI is parsed.
    pub fn load_env() {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded environment file");
        }
    }

    pub fn from_cli(cli: &Cli) -> HermesResult<Self> {
        let url = cli
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| HermesError::Usage(USAGE.to_string()))?;

        let target_url =
            Url::parse(url).map_err(|e| HermesError::InvalidUrl(format!("{}: {}", url, e)))?;

        Ok(Self::new(target_url)
            .with_check(cli.check)
            .with_guess(cli.guess))
    }
}
