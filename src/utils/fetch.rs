//! Network fetching utilities with timeout support.

use std::pin::pin;

use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use shell_core::{FetchError, FragmentSource};

use crate::config::FETCH_TIMEOUT_MS;

/// Fetch a URL as text, failing on non-2xx status or after
/// [`FETCH_TIMEOUT_MS`].
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let request = pin!(async {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Http(response.status()));
        }
        response.text().await.map_err(|_| FetchError::ReadFailed)
    });
    let timeout = pin!(TimeoutFuture::new(FETCH_TIMEOUT_MS));

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("fetching {url} timed out after {FETCH_TIMEOUT_MS}ms");
            Err(FetchError::Timeout)
        }
    }
}

/// Fetches view fragments over HTTP.
///
/// No caching: every load hits the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageFetcher;

impl FragmentSource for PageFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        fetch_text(path).await
    }
}
