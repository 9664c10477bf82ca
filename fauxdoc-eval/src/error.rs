use thiserror::Error;

/// Runtime evaluation failure: a well-formed AST whose operands violate the
/// evaluator's operator contract.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    /// `NOT` applied to a non-boolean operand.
    #[error("NOT can only be applied to boolean values, found {operand_kind}")]
    NotBoolean {
        /// A short name for the offending operand's dynamic kind.
        operand_kind: &'static str,
    },
    /// A function call named something other than one of the built-ins.
    #[error("unknown function {name}")]
    UnknownFunction {
        /// The (case-preserved) name as written in the query text.
        name: String,
    },
    /// A built-in function called with the wrong number of arguments.
    #[error("{name} expects {expected} argument(s), found {got}")]
    WrongArity {
        /// The built-in's name.
        name: &'static str,
        /// Human-readable description of the arity the built-in requires,
        /// e.g. `"2"` or `"2 or 3"`.
        expected: &'static str,
        /// Argument count actually supplied.
        got: usize,
    },
}
