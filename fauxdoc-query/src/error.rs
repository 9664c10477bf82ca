use thiserror::Error;

/// Failure running the WHERE/ORDER BY/TOP/LIMIT/projection pipeline.
#[derive(Clone, Debug, Error)]
pub enum QueryError {
    /// A runtime evaluation violation (NOT of non-boolean, unknown
    /// function, wrong-arity function call).
    #[error(transparent)]
    Evaluation(#[from] fauxdoc_eval::EvalError),
}
