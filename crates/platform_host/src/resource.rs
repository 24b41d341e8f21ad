//! Resource fetch contracts and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ResourceFetcher`] async methods.
pub type ResourceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response to a completed fetch: HTTP status plus the raw body text.
pub struct FetchedResource {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl FetchedResource {
    /// Creates a `200 OK` response with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Creates a response with `status` and an empty body.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Returns whether the status is in the `2xx` range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Host service that fetches resources by URL.
///
/// Non-success statuses are returned as [`FetchedResource`] values, not errors. Errors are
/// reserved for transport failures where no response exists.
pub trait ResourceFetcher {
    /// Fetches `url` and returns its status and body text.
    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> ResourceFuture<'a, Result<FetchedResource, String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory fetcher serving canned responses by URL. Unknown URLs answer `404`.
pub struct MemoryResourceFetcher {
    inner: Rc<RefCell<HashMap<String, Result<FetchedResource, String>>>>,
    hits: Rc<RefCell<Vec<String>>>,
}

impl MemoryResourceFetcher {
    /// Serves `body` with status `200` for `url`.
    pub fn serve(&self, url: impl Into<String>, body: impl Into<String>) {
        self.respond(url, FetchedResource::ok(body));
    }

    /// Serves an arbitrary response for `url`.
    pub fn respond(&self, url: impl Into<String>, response: FetchedResource) {
        self.inner.borrow_mut().insert(url.into(), Ok(response));
    }

    /// Makes fetches of `url` fail at the transport level with `message`.
    pub fn fail(&self, url: impl Into<String>, message: impl Into<String>) {
        self.inner.borrow_mut().insert(url.into(), Err(message.into()));
    }

    /// Returns every fetched URL, in request order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.borrow().clone()
    }
}

impl ResourceFetcher for MemoryResourceFetcher {
    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> ResourceFuture<'a, Result<FetchedResource, String>> {
        Box::pin(async move {
            self.hits.borrow_mut().push(url.to_string());
            self.inner
                .borrow()
                .get(url)
                .cloned()
                .unwrap_or_else(|| Ok(FetchedResource::status(404)))
        })
    }
}
