//! Page requests and the "get all" stream over Atlas list endpoints.
//!
//! Atlas list endpoints take `pageNum` (starting at 1) and `itemsPerPage`
//! (1..=2000) and answer with `{results, totalCount}`. [`paginate`] re-issues
//! the request with an incrementing page number until a short page arrives or
//! `totalCount` items have been seen.

use std::future::Future;

use atlas_config::constants::{
    DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE_NUM, MAX_ITEMS_PER_PAGE, MIN_ITEMS_PER_PAGE,
};
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use crate::error::{ClientError, PaginationLimit, Result};
use crate::models::Page;

/// Validated `pageNum` / `itemsPerPage` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_num: u32,
    items_per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_num: DEFAULT_PAGE_NUM,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Build a page request, rejecting values Atlas would refuse.
    ///
    /// # Errors
    ///
    /// `ClientError::PaginationLimits` when `page_num < 1` or `items_per_page`
    /// is outside `1..=2000`.
    pub fn new(page_num: u32, items_per_page: u32) -> Result<Self> {
        if page_num < 1 {
            return Err(ClientError::PaginationLimits(
                PaginationLimit::PageNumTooSmall { page_num },
            ));
        }
        if !(MIN_ITEMS_PER_PAGE..=MAX_ITEMS_PER_PAGE).contains(&items_per_page) {
            return Err(ClientError::PaginationLimits(
                PaginationLimit::ItemsPerPageOutOfRange {
                    items_per_page,
                    min: MIN_ITEMS_PER_PAGE,
                    max: MAX_ITEMS_PER_PAGE,
                },
            ));
        }
        Ok(Self {
            page_num,
            items_per_page,
        })
    }

    pub fn page_num(&self) -> u32 {
        self.page_num
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    /// The following page with the same page size.
    pub fn next(&self) -> Self {
        Self {
            page_num: self.page_num.saturating_add(1),
            items_per_page: self.items_per_page,
        }
    }

    /// Query parameters for this page.
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("pageNum", self.page_num.to_string()),
            ("itemsPerPage", self.items_per_page.to_string()),
        ]
    }
}

/// Whether a page is the last one.
fn is_last_page(page: PageRequest, received: usize, seen: u64, total: Option<u64>) -> bool {
    received == 0
        || received < page.items_per_page as usize
        || total.is_some_and(|total| seen >= total)
        || page.page_num == u32::MAX
}

/// Stream every item of a paginated endpoint, starting at `start`.
///
/// `fetch` is called once per page. The first error is yielded and ends the
/// stream.
pub fn paginate<'a, T, F, Fut>(start: PageRequest, mut fetch: F) -> BoxStream<'a, Result<T>>
where
    T: Send + 'a,
    F: FnMut(PageRequest) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Page<T>>> + Send + 'a,
{
    stream::try_unfold(Some((start, 0u64)), move |state| {
        let pending = state.map(|(page, seen)| (page, seen, fetch(page)));
        async move {
            let Some((page, seen, fut)) = pending else {
                return Ok::<_, ClientError>(None);
            };
            let fetched = fut.await?;
            let received = fetched.results.len();
            let seen = seen + received as u64;
            tracing::debug!(
                page_num = page.page_num,
                received,
                total = ?fetched.total_count,
                "Fetched page"
            );
            let next = if is_last_page(page, received, seen, fetched.total_count) {
                None
            } else {
                Some((page.next(), seen))
            };
            let items = stream::iter(fetched.results.into_iter().map(Ok::<T, ClientError>));
            Ok::<_, ClientError>(Some((items, next)))
        }
    })
    .try_flatten()
    .boxed()
}
