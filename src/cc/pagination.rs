//! Lazy concatenation of server-paginated responses
//!
//! A list endpoint answers with one page at a time, each carrying an optional
//! continuation reference to the next one. [`concat_pages`] turns an already
//! fetched first page plus a "fetch the next page" function into a single
//! stream of items. The next page is requested only when the consumer polls
//! past the last item of the current page, so dropping the stream early stops
//! all further fetches.

use std::fmt;
use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};
use log::debug;

use crate::error::Result;

/// Lazily produced sequence of items backed by zero or more page fetches
pub type ItemStream<'a, T> = BoxStream<'a, Result<T>>;

/// Opaque reference to the next page, passed back verbatim to the fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContinuationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One server response to a paginated list query
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Absent if and only if this is the last page
    pub next: Option<ContinuationToken>,
    /// Total number of items across all pages, as reported by the server
    pub total_results: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next: Option<ContinuationToken>, total_results: u32) -> Self {
        Self {
            items,
            next,
            total_results,
        }
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

struct Cursor<T, F> {
    items: std::vec::IntoIter<T>,
    next: Option<ContinuationToken>,
    fetch_more: F,
}

/// Concatenate `first` and every page reachable from it into one stream
///
/// Items come out in page order, then in-page order. If `fetch_more` fails,
/// the stream yields that error once and ends; items already yielded stay
/// with the caller.
pub fn concat_pages<'a, T, F, Fut>(first: Page<T>, fetch_more: F) -> ItemStream<'a, T>
where
    T: Send + 'a,
    F: FnMut(ContinuationToken) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Page<T>>> + Send + 'a,
{
    let cursor = Cursor {
        items: first.items.into_iter(),
        next: first.next,
        fetch_more,
    };

    stream::try_unfold(cursor, |mut cursor| async move {
        loop {
            if let Some(item) = cursor.items.next() {
                return Ok(Some((item, cursor)));
            }
            let Some(token) = cursor.next.take() else {
                return Ok(None);
            };
            debug!("Fetching next page: {}", token);
            let page = (cursor.fetch_more)(token).await?;
            debug!("Page returned {} items", page.items.len());
            cursor.items = page.items.into_iter();
            cursor.next = page.next;
        }
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CcError;
    use futures::TryStreamExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Build `count` pages of `size` items each, chained by "page-N" tokens
    fn pages(count: usize, size: usize) -> Vec<Page<u32>> {
        (0..count)
            .map(|p| {
                let items = (0..size).map(|i| (p * size + i) as u32).collect();
                let next = (p + 1 < count).then(|| ContinuationToken::new(format!("page-{}", p + 1)));
                Page::new(items, next, (count * size) as u32)
            })
            .collect()
    }

    /// Stream over `pages`, counting how many times the fetcher runs
    fn counted_stream(pages: Vec<Page<u32>>, fetches: Arc<AtomicUsize>) -> ItemStream<'static, u32> {
        let mut pages = pages.into_iter();
        let first = pages.next().unwrap();
        let rest: Vec<Page<u32>> = pages.collect();
        concat_pages(first, move |token| {
            fetches.fetch_add(1, Ordering::SeqCst);
            let index: usize = token.as_str().trim_start_matches("page-").parse().unwrap();
            let page = rest[index - 1].clone();
            async move { Ok(page) }
        })
    }

    #[tokio::test]
    async fn test_concatenation_is_complete_and_ordered() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let stream = counted_stream(pages(4, 3), fetches.clone());

        let items: Vec<u32> = stream.try_collect().await.unwrap();

        assert_eq!(items, (0..12).collect::<Vec<u32>>());
        // the first page was handed in, so 3 of the 4 pages are fetched here
        assert_eq!(fetches.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_single_page_short_circuit() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let stream = counted_stream(pages(1, 5), fetches.clone());

        let items: Vec<u32> = stream.try_collect().await.unwrap();

        assert_eq!(items.len(), 5);
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_partial_consumption_does_not_fetch_ahead() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let stream = counted_stream(pages(3, 10), fetches.clone());

        let items: Vec<u32> = stream.take(4).try_collect().await.unwrap();

        assert_eq!(items, vec![0, 1, 2, 3]);
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_next_page_fetched_only_past_page_boundary() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let mut stream = counted_stream(pages(3, 2), fetches.clone());

        assert_eq!(stream.next().await.unwrap().unwrap(), 0);
        assert_eq!(stream.next().await.unwrap().unwrap(), 1);
        assert_eq!(fetches.load(Ordering::SeqCst), 0);

        assert_eq!(stream.next().await.unwrap().unwrap(), 2);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_intermediate_page_is_skipped() {
        let first = Page::new(vec![1u32], Some(ContinuationToken::new("empty")), 2);
        let stream = concat_pages(first, |token| async move {
            match token.as_str() {
                "empty" => Ok(Page::new(vec![], Some(ContinuationToken::new("last")), 2)),
                _ => Ok(Page::new(vec![2u32], None, 2)),
            }
        });

        let items: Vec<u32> = stream.try_collect().await.unwrap();
        assert_eq!(items, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_token_is_passed_verbatim() {
        let token = "/v2/organizations?order-direction=asc&page=2&results-per-page=1";
        let first = Page::new(vec![1u32], Some(ContinuationToken::new(token)), 2);
        let stream = concat_pages(first, move |received| async move {
            assert_eq!(received.as_str(), token);
            Ok(Page::new(vec![2u32], None, 2))
        });

        let items: Vec<u32> = stream.try_collect().await.unwrap();
        assert_eq!(items, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_earlier_items() {
        let first = Page::new(vec![1u32, 2], Some(ContinuationToken::new("page-1")), 4);
        let mut stream = concat_pages(first, |_| async {
            Err::<Page<u32>, _>(CcError::Api {
                status: 500,
                body: None,
                message: "Failed to fetch page".to_string(),
            })
        });

        assert_eq!(stream.next().await.unwrap().unwrap(), 1);
        assert_eq!(stream.next().await.unwrap().unwrap(), 2);
        match stream.next().await {
            Some(Err(CcError::Api { status, .. })) => assert_eq!(status, 500),
            other => panic!("Expected API error, got {:?}", other),
        }
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_many_pages_do_not_grow_the_stack() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let stream = counted_stream(pages(5_000, 1), fetches.clone());

        let count = stream.try_fold(0usize, |acc, _| async move { Ok(acc + 1) }).await.unwrap();

        assert_eq!(count, 5_000);
        assert_eq!(fetches.load(Ordering::SeqCst), 4_999);
    }
}
