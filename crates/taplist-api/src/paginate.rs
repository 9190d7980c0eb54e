//! Paginated fetch-merge: an explicit async loop bounded by the total page
//! count reported by the first response of a query.
//!
//! Each logical query owns a fresh [`PageCursor`]; nothing is ambient. A
//! [`QueryGeneration`] counter closes the abandoned-fetch race: resetting a
//! query bumps the generation, and a still-running fetch observes the bump at
//! its next await point and discards its work instead of writing into a
//! buffer that is no longer displayed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::ApiError;

/// Maximum number of pages to fetch before giving up on a query.
/// Prevents runaway loops on a pager that keeps growing.
pub const MAX_PAGES: u32 = 200;

/// One page of records plus the pager's total page count.
#[derive(Debug)]
pub struct Page<T> {
    pub total_pages: u32,
    pub records: Vec<T>,
}

/// A paginated query that can fetch any one of its pages.
pub trait FetchPages {
    type Record;

    /// Fetch a single 1-based page of the query.
    async fn fetch_page(&self, page: u32) -> Result<Page<Self::Record>, ApiError>;
}

/// Mutable per-query pagination state: next page to request, total page
/// count from the first response, and the accumulated-so-far buffer.
///
/// Instantiated fresh per query and fully reset whenever the query target
/// changes (different postal code, return to the list view).
#[derive(Debug)]
pub struct PageCursor<T> {
    next_page: u32,
    total_pages: Option<u32>,
    buffer: Vec<T>,
}

impl<T> PageCursor<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_page: 1,
            total_pages: None,
            buffer: Vec::new(),
        }
    }

    /// Discards all progress, returning the cursor to its initial state.
    pub fn reset(&mut self) {
        self.next_page = 1;
        self.total_pages = None;
        self.buffer.clear();
    }

    #[must_use]
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    #[must_use]
    pub fn buffer(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> Default for PageCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Generation counter for a logical query slot.
///
/// [`QueryGeneration::invalidate`] marks every outstanding token stale;
/// the fetch loop re-checks its token after each response and refuses to
/// merge once superseded.
#[derive(Debug, Clone, Default)]
pub struct QueryGeneration {
    counter: Arc<AtomicU64>,
}

impl QueryGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current generation for one fetch run.
    #[must_use]
    pub fn token(&self) -> GenerationToken {
        GenerationToken {
            counter: Arc::clone(&self.counter),
            seen: self.counter.load(Ordering::Acquire),
        }
    }

    /// Invalidates all outstanding tokens.
    pub fn invalidate(&self) {
        self.counter.fetch_add(1, Ordering::AcqRel);
    }
}

/// A snapshot of a [`QueryGeneration`], carried by one fetch run.
#[derive(Debug)]
pub struct GenerationToken {
    counter: Arc<AtomicU64>,
    seen: u64,
}

impl GenerationToken {
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.counter.load(Ordering::Acquire) == self.seen
    }
}

/// Terminal state of one fetch-merge run.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// Every reported page was fetched and merged exactly once; the
    /// consolidated list is ready for filtering and render.
    Complete(Vec<T>),
    /// The query target changed mid-flight; nothing was merged after the
    /// generation bump and the partial buffer must not be rendered.
    Superseded,
    /// A page request failed. The failure is logged and the cursor is left
    /// stalled where it was — no retry, no resumption. Callers treat this
    /// as a silent failure, not a crash.
    Stalled,
}

/// Drives `fetcher` until the page count reported by the first response is
/// exhausted, merging each page into `cursor` in strict request order.
///
/// The next page is requested only after the prior response is merged, so
/// exactly one request per query is ever in flight. Consolidation happens
/// once, after the last page: the buffer moves out of the cursor and into
/// the returned [`FetchOutcome::Complete`].
pub async fn run_to_completion<F>(
    fetcher: &F,
    cursor: &mut PageCursor<F::Record>,
    token: &GenerationToken,
) -> FetchOutcome<F::Record>
where
    F: FetchPages,
{
    loop {
        if let Some(total) = cursor.total_pages {
            if cursor.next_page > total {
                break;
            }
        }
        if cursor.next_page > MAX_PAGES {
            tracing::warn!(
                page = cursor.next_page,
                max_pages = MAX_PAGES,
                "pagination limit reached; leaving cursor stalled"
            );
            return FetchOutcome::Stalled;
        }

        let result = fetcher.fetch_page(cursor.next_page).await;
        if !token.is_current() {
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(page) => {
                cursor.total_pages = Some(page.total_pages);
                cursor.buffer.extend(page.records);
                cursor.next_page += 1;
            }
            Err(error) => {
                tracing::warn!(
                    page = cursor.next_page,
                    error = %error,
                    "page request failed; leaving cursor stalled"
                );
                return FetchOutcome::Stalled;
            }
        }
    }

    FetchOutcome::Complete(std::mem::take(&mut cursor.buffer))
}
