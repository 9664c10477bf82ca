use std::collections::HashMap;

use fauxdoc_core::Value;

/// Query parameters bound to a `@name` reference, looked up by exact name.
pub type Params = HashMap<String, Value>;

/// The result of evaluating an expression against a document.
///
/// Distinguishes three cases the coercion rules treat differently:
/// a concrete value, a property path that resolved to nothing, and a
/// `@name` parameter that was never bound. The latter two behave
/// identically everywhere except in diagnostics, which is why they are
/// kept as separate variants rather than collapsed into one `Undefined`.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalValue {
    /// A concrete, present value.
    Defined(Value),
    /// A property path resolved to nothing (missing key, or an
    /// intermediate segment was not an Object).
    Undefined,
    /// A `@name` parameter with no matching entry in the supplied params.
    ParamMissing,
}

impl EvalValue {
    /// Boolean-context coercion: `Bool(b)` yields `b`; any other `Defined`
    /// value is truthy; `Undefined`/`ParamMissing` and `Null` are false.
    pub fn truthy(&self) -> bool {
        match self {
            EvalValue::Defined(Value::Bool(b)) => *b,
            EvalValue::Defined(Value::Null) => false,
            EvalValue::Defined(_) => true,
            EvalValue::Undefined | EvalValue::ParamMissing => false,
        }
    }

    /// `true` unless this is `Undefined`/`ParamMissing` (used by
    /// `IS_DEFINED`, which treats `Null` as present).
    pub fn is_present(&self) -> bool {
        !matches!(self, EvalValue::Undefined | EvalValue::ParamMissing)
    }

    /// The concrete value, if any.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            EvalValue::Defined(v) => Some(v),
            EvalValue::Undefined | EvalValue::ParamMissing => None,
        }
    }

    /// A short name for this result's dynamic kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalValue::Defined(Value::Null) => "null",
            EvalValue::Defined(Value::Bool(_)) => "boolean",
            EvalValue::Defined(Value::Integer(_)) => "integer",
            EvalValue::Defined(Value::Float(_)) => "float",
            EvalValue::Defined(Value::String(_)) => "string",
            EvalValue::Defined(Value::Array(_)) => "array",
            EvalValue::Defined(Value::Object(_)) => "object",
            EvalValue::Undefined => "undefined",
            EvalValue::ParamMissing => "missing parameter",
        }
    }
}
