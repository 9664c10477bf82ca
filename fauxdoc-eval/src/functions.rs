use fauxdoc_ast::{Expr, FunctionCall};
use fauxdoc_core::Value;

use crate::{error::EvalError, value::EvalValue};

/// Dispatches a built-in function call. Function names are case-insensitive.
/// `eval` recurses back into the caller's expression evaluator, already
/// bound to the current document/parameters/alias.
pub fn call(
    fn_call: &FunctionCall,
    eval: impl Fn(&Expr) -> Result<EvalValue, EvalError>,
) -> Result<EvalValue, EvalError> {
    match fn_call.name.to_ascii_uppercase().as_str() {
        "CONTAINS" => contains(fn_call, &eval),
        "STARTSWITH" => startswith(fn_call, &eval),
        "ARRAY_CONTAINS" => array_contains(fn_call, &eval),
        "IS_NULL" => is_null(fn_call, &eval),
        "IS_DEFINED" => is_defined(fn_call, &eval),
        _ => Err(EvalError::UnknownFunction {
            name: fn_call.name.clone(),
        }),
    }
}

fn contains(
    call: &FunctionCall,
    eval: &impl Fn(&Expr) -> Result<EvalValue, EvalError>,
) -> Result<EvalValue, EvalError> {
    if call.args.len() != 2 && call.args.len() != 3 {
        return Err(EvalError::WrongArity {
            name: "CONTAINS",
            expected: "2 or 3",
            got: call.args.len(),
        });
    }
    let haystack = eval(&call.args[0])?;
    let needle = eval(&call.args[1])?;
    let ignore_case = match call.args.get(2) {
        Some(expr) => eval(expr)?.as_value().and_then(Value::as_bool).unwrap_or(false),
        None => false,
    };

    let result = match (haystack.as_value(), needle.as_value()) {
        (Some(Value::String(h)), Some(Value::String(n))) => {
            if ignore_case {
                h.to_ascii_lowercase().contains(&n.to_ascii_lowercase())
            } else {
                h.contains(n.as_str())
            }
        }
        _ => false,
    };
    Ok(EvalValue::Defined(Value::Bool(result)))
}

fn startswith(
    call: &FunctionCall,
    eval: &impl Fn(&Expr) -> Result<EvalValue, EvalError>,
) -> Result<EvalValue, EvalError> {
    if call.args.len() != 2 {
        return Err(EvalError::WrongArity {
            name: "STARTSWITH",
            expected: "2",
            got: call.args.len(),
        });
    }
    let string = eval(&call.args[0])?;
    let prefix = eval(&call.args[1])?;
    let result = match (string.as_value(), prefix.as_value()) {
        (Some(Value::String(s)), Some(Value::String(p))) => s.starts_with(p.as_str()),
        _ => false,
    };
    Ok(EvalValue::Defined(Value::Bool(result)))
}

fn array_contains(
    call: &FunctionCall,
    eval: &impl Fn(&Expr) -> Result<EvalValue, EvalError>,
) -> Result<EvalValue, EvalError> {
    if call.args.len() != 2 {
        return Err(EvalError::WrongArity {
            name: "ARRAY_CONTAINS",
            expected: "2",
            got: call.args.len(),
        });
    }
    let array = eval(&call.args[0])?;
    let needle = eval(&call.args[1])?;
    let result = match array.as_value().and_then(Value::as_array) {
        Some(items) => {
            let Some(needle) = needle.as_value() else {
                return Ok(EvalValue::Defined(Value::Bool(false)));
            };
            let needle_text = needle.stringify().to_ascii_lowercase();
            items
                .iter()
                .any(|item| item.stringify().to_ascii_lowercase() == needle_text)
        }
        None => false,
    };
    Ok(EvalValue::Defined(Value::Bool(result)))
}

fn is_null(
    call: &FunctionCall,
    eval: &impl Fn(&Expr) -> Result<EvalValue, EvalError>,
) -> Result<EvalValue, EvalError> {
    if call.args.len() != 1 {
        return Err(EvalError::WrongArity {
            name: "IS_NULL",
            expected: "1",
            got: call.args.len(),
        });
    }
    let result = matches!(eval(&call.args[0])?.as_value(), Some(Value::Null));
    Ok(EvalValue::Defined(Value::Bool(result)))
}

fn is_defined(
    call: &FunctionCall,
    eval: &impl Fn(&Expr) -> Result<EvalValue, EvalError>,
) -> Result<EvalValue, EvalError> {
    if call.args.len() != 1 {
        return Err(EvalError::WrongArity {
            name: "IS_DEFINED",
            expected: "1",
            got: call.args.len(),
        });
    }
    let result = eval(&call.args[0])?.is_present();
    Ok(EvalValue::Defined(Value::Bool(result)))
}
