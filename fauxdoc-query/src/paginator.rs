use std::{collections::HashMap, sync::Arc};

use fauxdoc_core::Value;
use uuid::Uuid;

/// Tracks in-flight continuation tokens for a single query's materialized
/// result set.
///
/// Tokens are process-local and bound to the `Paginator` instance that
/// issued them (per spec: the pipeline materializes results once per query
/// execution, and the paginator only ever hands out slices of that one
/// snapshot). An unresolvable or absent token restarts at offset 0.
pub struct Paginator {
    pages: parking_lot::Mutex<HashMap<String, PageState>>,
}

struct PageState {
    rows: Arc<Vec<Value>>,
    next_offset: usize,
}

impl Paginator {
    /// Creates an empty paginator.
    pub fn new() -> Self {
        Self {
            pages: parking_lot::Mutex::new(HashMap::new()),
        }
    }

    /// Returns up to `page_size` rows from `rows` starting at the offset
    /// encoded by `incoming_token` (0 if `None` or unknown), and an
    /// outgoing token if more rows remain.
    ///
    /// A `page_size` of 0 always returns an empty page with no outgoing
    /// token — a zero-size page makes no progress, so continuing it would
    /// never terminate.
    pub fn page(
        &self,
        rows: Arc<Vec<Value>>,
        page_size: usize,
        incoming_token: Option<&str>,
    ) -> (Vec<Value>, Option<String>) {
        if page_size == 0 {
            return (Vec::new(), None);
        }

        let mut pages = self.pages.lock();

        let offset = incoming_token
            .and_then(|token| pages.get(token))
            .map(|state| state.next_offset)
            .unwrap_or(0);

        if let Some(token) = incoming_token {
            pages.remove(token);
        }

        let end = (offset + page_size).min(rows.len());
        let slice = rows[offset..end].to_vec();

        if end >= rows.len() {
            (slice, None)
        } else {
            let token = Uuid::new_v4().to_string();
            pages.insert(
                token.clone(),
                PageState {
                    rows,
                    next_offset: end,
                },
            );
            (slice, Some(token))
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Arc<Vec<Value>> {
        Arc::new((0..n).map(|i| Value::Integer(i as i64)).collect())
    }

    #[test]
    fn pages_through_full_set_without_gaps_or_duplicates() {
        let paginator = Paginator::new();
        let data = rows(12);

        let (page1, token1) = paginator.page(data.clone(), 5, None);
        assert_eq!(page1.len(), 5);
        let token1 = token1.expect("more rows remain");

        let (page2, token2) = paginator.page(data.clone(), 5, Some(&token1));
        assert_eq!(page2.len(), 5);
        let token2 = token2.expect("more rows remain");

        let (page3, token3) = paginator.page(data, 5, Some(&token2));
        assert_eq!(page3.len(), 2);
        assert!(token3.is_none());

        let mut all = page1;
        all.extend(page2);
        all.extend(page3);
        assert_eq!(all, (0..12).map(|i| Value::Integer(i)).collect::<Vec<_>>());
    }

    #[test]
    fn unknown_token_resets_to_offset_zero() {
        let paginator = Paginator::new();
        let data = rows(10);
        let (page, _) = paginator.page(data, 4, Some("not-a-real-token"));
        assert_eq!(page.len(), 4);
        assert_eq!(page[0], Value::Integer(0));
    }

    #[test]
    fn exact_multiple_ends_with_no_token() {
        let paginator = Paginator::new();
        let data = rows(10);
        let (_, token1) = paginator.page(data.clone(), 5, None);
        let token1 = token1.unwrap();
        let (page2, token2) = paginator.page(data, 5, Some(&token1));
        assert_eq!(page2.len(), 5);
        assert!(token2.is_none());
    }
}
