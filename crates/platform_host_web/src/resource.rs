//! `fetch`-backed resource fetcher.

use platform_host::{FetchedResource, ResourceFetcher, ResourceFuture};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Resource fetcher backed by `window.fetch`, resolving URLs relative to the current page.
pub struct WebResourceFetcher;

impl ResourceFetcher for WebResourceFetcher {
    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> ResourceFuture<'a, Result<FetchedResource, String>> {
        Box::pin(async move { bridge::fetch_text(url).await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_fetch_is_a_transport_failure() {
        let fetcher: &dyn ResourceFetcher = &WebResourceFetcher;
        assert!(block_on(fetcher.fetch_text("/table.json")).is_err());
    }
}
