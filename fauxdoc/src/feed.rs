use std::sync::Arc;

use fauxdoc_core::Value;
use fauxdoc_query::Paginator;

/// One page of query results.
#[derive(Clone, Debug)]
pub struct FeedPage {
    /// The page's rows.
    pub items: Vec<Value>,
    /// A token to fetch the next page, if more rows remain.
    pub continuation_token: Option<String>,
}

/// An async iterator-like handle over one query's materialized result,
/// sliced into pages by a private [`Paginator`].
///
/// The result is materialized once, at construction; later upserts are not
/// reflected in pages already being iterated (per spec: a query reads a
/// snapshot at the moment execution begins).
pub struct FeedIterator {
    rows: Arc<Vec<Value>>,
    paginator: Paginator,
    page_size: usize,
    next_token: Option<String>,
    exhausted: bool,
}

impl FeedIterator {
    pub(crate) fn new(rows: Arc<Vec<Value>>, page_size: usize, starting_token: Option<String>) -> Self {
        Self {
            rows,
            paginator: Paginator::new(),
            page_size,
            next_token: starting_token,
            exhausted: false,
        }
    }

    /// Returns the next page, or `None` once the result is exhausted.
    pub async fn next_page(&mut self) -> Option<FeedPage> {
        if self.exhausted {
            return None;
        }
        let (items, token) = self
            .paginator
            .page(self.rows.clone(), self.page_size, self.next_token.as_deref());
        self.next_token = token.clone();
        if token.is_none() {
            self.exhausted = true;
        }
        Some(FeedPage {
            items,
            continuation_token: token,
        })
    }

    /// `true` once [`Self::next_page`] has returned its last page.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// The result of an `upsert` or `read`: the stored/fetched value plus a
/// synthetic etag (this store has no real concurrency-control backing, so
/// the etag only ever changes across writes of the same document).
#[derive(Clone, Debug)]
pub struct ItemResponse<T> {
    /// The document.
    pub value: T,
    /// A freshly minted opaque identifier.
    pub etag: String,
}
