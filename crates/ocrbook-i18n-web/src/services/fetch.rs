use async_trait::async_trait;
use gloo_net::http::Request;
use ocrbook_i18n_core::{ResourceFetcher, StrategyError};
use web_sys::RequestCache;

/// `fetch`-based [`ResourceFetcher`] that bypasses the HTTP cache.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooFetcher;

#[async_trait(?Send)]
impl ResourceFetcher for GlooFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, StrategyError> {
        let response = Request::get(url)
            .cache(RequestCache::NoCache)
            .send()
            .await
            .map_err(|err| StrategyError::Transport {
                url: url.to_string(),
                detail: err.to_string(),
            })?;
        if !response.ok() {
            return Err(StrategyError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        response.text().await.map_err(|err| StrategyError::Transport {
            url: url.to_string(),
            detail: err.to_string(),
        })
    }
}
