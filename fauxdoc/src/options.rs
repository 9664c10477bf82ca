use fauxdoc_eval::Params;

/// Request-level options for [`crate::FauxContainer::query_items`], in the
/// shape of a cloud SDK's request-options builder: a plain `Default` plus
/// `with_*` methods, rather than a constructor with a long parameter list.
#[derive(Clone, Debug, Default)]
pub struct QueryRequestOptions {
    /// Maximum rows per page. `None` returns the entire result in one page.
    pub page_size: Option<usize>,
    /// A continuation token from a previous page, to resume from.
    pub continuation_token: Option<String>,
    /// `@name` parameter bindings for the query text.
    pub parameters: Params,
}

impl QueryRequestOptions {
    /// Starts from the defaults: no page size cap, no continuation token,
    /// no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the continuation token to resume from.
    pub fn with_continuation_token(mut self, token: impl Into<String>) -> Self {
        self.continuation_token = Some(token.into());
        self
    }

    /// Binds a `@name` parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: fauxdoc_core::Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains() {
        let options = QueryRequestOptions::new()
            .with_page_size(5)
            .with_continuation_token("abc");
        assert_eq!(options.page_size, Some(5));
        assert_eq!(options.continuation_token.as_deref(), Some("abc"));
    }
}
