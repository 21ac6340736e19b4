//! Shared error types and the resource fetchers used by `load`.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use ocrbook_i18n_core::{ResourceFetcher, StrategyError};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue};
use tracing::debug;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
#[derive(Clone, Debug)]
pub(crate) struct AppContext {
    pub(crate) client: Client,
}

impl AppContext {
    /// HTTP client that never serves dictionaries from a cache.
    pub(crate) fn new(timeout_secs: u64) -> CliResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;
        Ok(Self { client })
    }
}

/// Fetches dictionaries over HTTP.
#[derive(Clone, Debug)]
pub(crate) struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub(crate) const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ResourceFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, StrategyError> {
        let transport = |err: reqwest::Error| StrategyError::Transport {
            url: url.to_string(),
            detail: err.to_string(),
        };
        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "dictionary response");
        if !status.is_success() {
            return Err(StrategyError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(transport)
    }
}

/// Reads dictionaries from a local directory; resource paths are file paths.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FileFetcher;

#[async_trait(?Send)]
impl ResourceFetcher for FileFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, StrategyError> {
        let path = PathBuf::from(url);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| StrategyError::Transport {
                url: url.to_string(),
                detail: err.to_string(),
            })
    }
}
