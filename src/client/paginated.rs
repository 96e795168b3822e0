//! Offset-paginated fetching with a fixed delay between requests.
//!
//! OpenSea listing endpoints take a `limit` and an `offset` and return an
//! empty page once the offset runs past the end of the data. A [`Paginator`]
//! walks such an endpoint from offset zero, advancing by the configured page
//! size after every non-empty page and pausing for the configured delay
//! before the next request.
//!
//! Two ways of consuming the pages are offered:
//!
//! - [`Paginator::collect_all`] accumulates every page into one `Vec` and
//!   is all-or-nothing: any failed page discards what was fetched so far.
//! - [`Paginator::stream`] returns a [`PaginatedStream`] that yields items
//!   lazily, one page in memory at a time.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::Stream;
use tokio::time::Sleep;
use tokio_util::sync::CancellationToken;

use super::config::{ClientConfig, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_DELAY};
use crate::{Error, Result};

/// Where the next page starts and how many records to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Position, in records, of the first record of the page.
    pub offset: u64,
    /// Maximum number of records requested.
    pub limit: u32,
}

/// Drives a page-fetching function until it returns an empty page.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use opensea_rs::client::paginated::{PageRequest, Paginator};
///
/// # async fn example() -> opensea_rs::Result<()> {
/// let data: Vec<u32> = (0..5).collect();
/// let paginator = Paginator::new(2, Duration::from_millis(1));
///
/// let all = paginator
///     .collect_all(|req: PageRequest| {
///         let start = (req.offset as usize).min(data.len());
///         let end = (start + req.limit as usize).min(data.len());
///         let page = data[start..end].to_vec();
///         async move { Ok(page) }
///     })
///     .await?;
///
/// assert_eq!(all, data);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: u32,
    request_delay: Duration,
    max_pages: Option<u32>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_DELAY)
    }
}

impl Paginator {
    /// Create a paginator with no page cap.
    ///
    /// A `page_size` of zero is raised to one so the offset always advances.
    pub fn new(page_size: u32, request_delay: Duration) -> Self {
        Self {
            page_size: page_size.max(1),
            request_delay,
            max_pages: None,
        }
    }

    /// Build a paginator from a client configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            page_size: config.page_size.max(1),
            request_delay: config.request_delay,
            max_pages: config.max_pages,
        }
    }

    /// Fail with [`Error::PageLimitExceeded`] instead of issuing more than
    /// `max_pages` requests. The terminating empty page counts as a request.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Records requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Pause between consecutive requests.
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// Fetch every page and return the concatenation of all of them.
    ///
    /// Pages are requested strictly one after another. Once a page arrives
    /// empty the records gathered so far are returned. The first error is
    /// returned as-is and everything accumulated before it is dropped.
    pub async fn collect_all<T, F, Fut>(&self, fetch_page: F) -> Result<Vec<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        self.collect_all_with_cancel(&CancellationToken::new(), fetch_page)
            .await
    }

    /// Like [`collect_all`](Self::collect_all), but returns
    /// [`Error::Cancelled`] as soon as `cancel` fires, whether a request is
    /// in flight or the paginator is waiting out the delay.
    pub async fn collect_all_with_cancel<T, F, Fut>(
        &self,
        cancel: &CancellationToken,
        mut fetch_page: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let mut items = Vec::new();
        let mut offset: u64 = 0;
        let mut requests: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let request = PageRequest {
                offset,
                limit: self.page_size,
            };

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(Error::Cancelled),
                result = fetch_page(request) => result,
            };
            requests += 1;

            let page = match result {
                Ok(page) => page,
                Err(err) => {
                    tracing::debug!(
                        offset,
                        discarded = items.len(),
                        error = %err,
                        "Page fetch failed, aborting pagination"
                    );
                    return Err(err);
                }
            };

            if page.is_empty() {
                tracing::debug!(offset, total = items.len(), "Reached empty page");
                return Ok(items);
            }

            tracing::debug!(offset, count = page.len(), "Fetched page");
            items.extend(page);

            if let Some(max_pages) = self.max_pages {
                if requests >= max_pages {
                    return Err(Error::PageLimitExceeded { max_pages });
                }
            }

            offset += u64::from(self.page_size);

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(Error::Cancelled),
                _ = tokio::time::sleep(self.request_delay) => {}
            }
        }
    }

    /// Lazily yield records page by page.
    ///
    /// Follows the same offset, delay and termination rules as
    /// [`collect_all`](Self::collect_all). The stream ends after the first
    /// error it yields. Dropping the stream cancels any in-flight request.
    pub fn stream<T, F>(&self, fetch_page: F) -> PaginatedStream<T>
    where
        F: FnMut(PageRequest) -> BoxFuture<'static, Result<Vec<T>>> + Send + 'static,
    {
        PaginatedStream {
            fetch_page: Box::new(fetch_page),
            paginator: *self,
            current_items: VecDeque::new(),
            next_offset: Some(0),
            requests: 0,
            pending_fetch: None,
            pending_delay: None,
            pending_error: None,
        }
    }
}

/// Type alias for a boxed future used by [`PaginatedStream`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type FetchPage<T> = Box<dyn FnMut(PageRequest) -> BoxFuture<'static, Result<Vec<T>>> + Send>;

/// A stream that lazily fetches pages from an offset-paginated endpoint.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use opensea_rs::Address;
///
/// # async fn example(client: opensea_rs::OpenSeaClient) -> opensea_rs::Result<()> {
/// let owner = Address::new("0x3b417FaeE9d2ff636701100891DC2755b5321Cc3");
/// let mut stream = client.assets().list_stream(&owner);
///
/// while let Some(result) = stream.next().await {
///     let asset = result?;
///     println!("{:?}", asset.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    fetch_page: FetchPage<T>,
    paginator: Paginator,
    /// Records of the current page not yet yielded.
    current_items: VecDeque<T>,
    /// Offset of the next page to fetch, `None` once exhausted.
    next_offset: Option<u64>,
    requests: u32,
    pending_fetch: Option<BoxFuture<'static, Result<Vec<T>>>>,
    pending_delay: Option<Pin<Box<Sleep>>>,
    pending_error: Option<Error>,
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.requests += 1;

                        if page.is_empty() {
                            this.next_offset = None;
                            return Poll::Ready(None);
                        }

                        this.current_items = page.into();

                        let capped = this
                            .paginator
                            .max_pages
                            .filter(|max| this.requests >= *max);
                        if let Some(max_pages) = capped {
                            this.next_offset = None;
                            this.pending_error = Some(Error::PageLimitExceeded { max_pages });
                        } else {
                            this.next_offset = this
                                .next_offset
                                .map(|offset| offset + u64::from(this.paginator.page_size));
                            this.pending_delay =
                                Some(Box::pin(tokio::time::sleep(this.paginator.request_delay)));
                        }
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_offset = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(err) = this.pending_error.take() {
                return Poll::Ready(Some(Err(err)));
            }

            if let Some(delay) = this.pending_delay.as_mut() {
                match delay.as_mut().poll(cx) {
                    Poll::Ready(()) => this.pending_delay = None,
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(offset) = this.next_offset {
                let request = PageRequest {
                    offset,
                    limit: this.paginator.page_size,
                };
                this.pending_fetch = Some((this.fetch_page)(request));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}
