//! Feed port for paginated access to the remote issue tracker.

use crate::sync::domain::RemoteIssue;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// State filter applied to a feed request.
///
/// The sync engine always requests [`StateFilter::All`]: closed issues stay
/// in the mirror and are filtered out at projection time, not at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFilter {
    /// Every issue regardless of state.
    #[default]
    All,
    /// Open issues only.
    Open,
    /// Closed issues only.
    Closed,
}

impl StateFilter {
    /// Returns the filter value in the feed's query format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Opaque continuation token yielded by a feed page.
///
/// The token's contents belong to the feed implementation; callers only pass
/// it back verbatim to request the following page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    /// Wraps a raw continuation token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of the issue feed.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuePage {
    /// Issues on this page, in feed order.
    pub items: Vec<RemoteIssue>,
    /// Cursor for the following page; `None` on the final page.
    pub next: Option<PageCursor>,
}

/// Paginated remote issue feed contract.
///
/// A sync run consumes the feed as a strictly ordered sequence: the first
/// page without a cursor, then each subsequent page through the cursor the
/// previous page returned, until a page carries no cursor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueFeed: Send + Sync {
    /// Fetches the first page matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the remote request fails.
    async fn first_page(&self, filter: StateFilter) -> FeedResult<IssuePage>;

    /// Fetches the page following the given cursor.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the remote request fails or the cursor is
    /// not one this feed produced.
    async fn next_page(&self, cursor: &PageCursor) -> FeedResult<IssuePage>;
}

/// Errors returned by feed implementations.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    /// The remote request failed.
    #[error("feed transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The continuation token was not recognized.
    #[error("invalid page cursor: {0}")]
    InvalidCursor(String),
}

impl FeedError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
