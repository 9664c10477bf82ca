use thiserror::Error;

/// Top-level error surfaced from the client façade.
#[derive(Debug, Error)]
pub enum FauxError {
    /// Anything from the store layer: parse failures, evaluation failures,
    /// missing documents/containers, or invalid writes.
    #[error(transparent)]
    Store(#[from] fauxdoc_store::StoreError),
}
