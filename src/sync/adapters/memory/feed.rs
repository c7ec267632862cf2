//! Fixture-backed issue feed for tests and local development.

use async_trait::async_trait;

use crate::sync::{
    domain::RemoteIssue,
    ports::{FeedError, FeedResult, IssueFeed, IssuePage, PageCursor, StateFilter},
};

/// [`IssueFeed`] serving pre-built pages in order.
///
/// Cursors are the zero-based index of the following page. An optional
/// failure can be injected at a given page index to exercise abort paths.
/// The fixture ignores the state filter; fixtures are expected to contain
/// whatever mix of states the scenario needs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueFeed {
    pages: Vec<Vec<RemoteIssue>>,
    fail_on_page: Option<usize>,
}

impl InMemoryIssueFeed {
    /// Creates a feed over the given pages.
    #[must_use]
    pub const fn new(pages: Vec<Vec<RemoteIssue>>) -> Self {
        Self {
            pages,
            fail_on_page: None,
        }
    }

    /// Creates a feed yielding every issue on one page.
    #[must_use]
    pub fn single_page(items: Vec<RemoteIssue>) -> Self {
        Self::new(vec![items])
    }

    /// Makes the fetch of the page at `index` fail with a transport error.
    #[must_use]
    pub const fn with_failure_on_page(mut self, index: usize) -> Self {
        self.fail_on_page = Some(index);
        self
    }

    fn page_at(&self, index: usize) -> FeedResult<IssuePage> {
        if self.fail_on_page == Some(index) {
            return Err(FeedError::transport(std::io::Error::other(
                "injected page fetch failure",
            )));
        }
        let items = self.pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < self.pages.len()).then(|| PageCursor::new((index + 1).to_string()));
        Ok(IssuePage { items, next })
    }
}

#[async_trait]
impl IssueFeed for InMemoryIssueFeed {
    async fn first_page(&self, _filter: StateFilter) -> FeedResult<IssuePage> {
        self.page_at(0)
    }

    async fn next_page(&self, cursor: &PageCursor) -> FeedResult<IssuePage> {
        let index: usize = cursor
            .as_str()
            .parse()
            .map_err(|_| FeedError::InvalidCursor(cursor.as_str().to_owned()))?;
        self.page_at(index)
    }
}
