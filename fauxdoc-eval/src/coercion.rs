use std::cmp::Ordering;

use fauxdoc_core::Value;

use crate::value::EvalValue;

const EPSILON: f64 = 1e-6;

/// `=` semantics: ordinal case-sensitive strings, epsilon-compared numbers,
/// logical booleans, reflexive Null, everything else (including any operand
/// that is Undefined/ParamMissing, or a cross-type pair) false.
pub fn equal(lhs: &EvalValue, rhs: &EvalValue) -> bool {
    let (Some(l), Some(r)) = (lhs.as_value(), rhs.as_value()) else {
        return false;
    };
    match (l, r) {
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        _ => match (as_number(l), as_number(r)) {
            (Some(a), Some(b)) => (a - b).abs() < EPSILON,
            _ => l == r,
        },
    }
}

/// `<`/`<=`/`>`/`>=` semantics: numeric comparison if both operands parse
/// as numbers, else lexicographic on the string representation; `None` if
/// either operand is Undefined/ParamMissing or resolves to Null.
pub fn order(lhs: &EvalValue, rhs: &EvalValue) -> Option<Ordering> {
    let l = lhs.as_value()?;
    let r = rhs.as_value()?;
    if l.is_null() || r.is_null() {
        return None;
    }
    match (as_number(l), as_number(r)) {
        (Some(a), Some(b)) => a.partial_cmp(&b),
        _ => Some(l.stringify().cmp(&r.stringify())),
    }
}

/// `Some(f64)` if `value` is `Integer` or `Float`.
pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defined(v: Value) -> EvalValue {
        EvalValue::Defined(v)
    }

    #[test]
    fn string_equality_is_case_sensitive() {
        assert!(!equal(
            &defined(Value::String("alice".into())),
            &defined(Value::String("Alice".into()))
        ));
        assert!(equal(
            &defined(Value::String("Alice".into())),
            &defined(Value::String("Alice".into()))
        ));
    }

    #[test]
    fn numeric_equality_uses_epsilon() {
        assert!(equal(
            &defined(Value::Integer(3)),
            &defined(Value::Float(3.0000001))
        ));
        assert!(!equal(&defined(Value::Integer(3)), &defined(Value::Float(3.1))));
    }

    #[test]
    fn cross_type_equality_is_false() {
        assert!(!equal(
            &defined(Value::String("1".into())),
            &defined(Value::Integer(1))
        ));
        assert!(!equal(&defined(Value::Null), &EvalValue::Undefined));
    }

    #[test]
    fn undefined_never_equals_or_orders() {
        assert!(!equal(&EvalValue::Undefined, &defined(Value::Integer(1))));
        assert_eq!(order(&EvalValue::Undefined, &defined(Value::Integer(1))), None);
    }

    #[test]
    fn ordering_is_numeric_when_both_sides_are_numbers() {
        assert_eq!(
            order(&defined(Value::Integer(1)), &defined(Value::Float(2.0))),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn ordering_falls_back_to_lexicographic() {
        assert_eq!(
            order(
                &defined(Value::String("apple".into())),
                &defined(Value::String("banana".into()))
            ),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn null_never_orders() {
        assert_eq!(order(&defined(Value::Null), &defined(Value::Integer(1))), None);
    }
}
