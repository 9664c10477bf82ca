use std::cmp::Ordering;

use fauxdoc_ast::{BinaryOp, Expr, UnaryOp};
use fauxdoc_core::Value;

use crate::{coercion, error::EvalError, functions, resolve, value::{EvalValue, Params}};

/// Evaluates `expr` against `doc`, with `params` bound for `@name`
/// references and `alias` the FROM clause's declared alias (if any) used to
/// strip leading alias segments off property paths.
pub fn eval(
    doc: &Value,
    expr: &Expr,
    params: &Params,
    alias: Option<&str>,
) -> Result<EvalValue, EvalError> {
    match expr {
        Expr::Constant(v) => Ok(EvalValue::Defined(v.clone())),
        Expr::Property(path) => Ok(resolve::resolve(doc, path, alias)),
        Expr::Parameter(name) => Ok(params
            .get(name)
            .cloned()
            .map(EvalValue::Defined)
            .unwrap_or(EvalValue::ParamMissing)),
        Expr::Unary(UnaryOp::Not, inner) => eval_not(doc, inner, params, alias),
        Expr::Binary(BinaryOp::And, lhs, rhs) => eval_and(doc, lhs, rhs, params, alias),
        Expr::Binary(BinaryOp::Or, lhs, rhs) => eval_or(doc, lhs, rhs, params, alias),
        Expr::Binary(op, lhs, rhs) => eval_comparison(doc, *op, lhs, rhs, params, alias),
        Expr::Between(value, bounds) => eval_between(doc, value, bounds, params, alias),
        Expr::Function(call) => {
            functions::call(call, |arg| eval(doc, arg, params, alias))
        }
    }
}

fn eval_not(
    doc: &Value,
    inner: &Expr,
    params: &Params,
    alias: Option<&str>,
) -> Result<EvalValue, EvalError> {
    let operand = eval(doc, inner, params, alias)?;
    match operand.as_value() {
        Some(Value::Bool(b)) => Ok(EvalValue::Defined(Value::Bool(!b))),
        _ => Err(EvalError::NotBoolean {
            operand_kind: operand.kind(),
        }),
    }
}

fn eval_and(
    doc: &Value,
    lhs: &Expr,
    rhs: &Expr,
    params: &Params,
    alias: Option<&str>,
) -> Result<EvalValue, EvalError> {
    if !eval(doc, lhs, params, alias)?.truthy() {
        return Ok(EvalValue::Defined(Value::Bool(false)));
    }
    let result = eval(doc, rhs, params, alias)?.truthy();
    Ok(EvalValue::Defined(Value::Bool(result)))
}

fn eval_or(
    doc: &Value,
    lhs: &Expr,
    rhs: &Expr,
    params: &Params,
    alias: Option<&str>,
) -> Result<EvalValue, EvalError> {
    if eval(doc, lhs, params, alias)?.truthy() {
        return Ok(EvalValue::Defined(Value::Bool(true)));
    }
    let result = eval(doc, rhs, params, alias)?.truthy();
    Ok(EvalValue::Defined(Value::Bool(result)))
}

fn eval_comparison(
    doc: &Value,
    op: BinaryOp,
    lhs: &Expr,
    rhs: &Expr,
    params: &Params,
    alias: Option<&str>,
) -> Result<EvalValue, EvalError> {
    let l = eval(doc, lhs, params, alias)?;
    let r = eval(doc, rhs, params, alias)?;
    let result = match op {
        BinaryOp::Equal => coercion::equal(&l, &r),
        BinaryOp::NotEqual => !coercion::equal(&l, &r),
        BinaryOp::Less => coercion::order(&l, &r) == Some(Ordering::Less),
        BinaryOp::LessEq => matches!(coercion::order(&l, &r), Some(Ordering::Less | Ordering::Equal)),
        BinaryOp::Greater => coercion::order(&l, &r) == Some(Ordering::Greater),
        BinaryOp::GreaterEq => {
            matches!(coercion::order(&l, &r), Some(Ordering::Greater | Ordering::Equal))
        }
        BinaryOp::And | BinaryOp::Or => unreachable!("handled in eval()"),
    };
    Ok(EvalValue::Defined(Value::Bool(result)))
}

fn eval_between(
    doc: &Value,
    value: &Expr,
    bounds: &fauxdoc_ast::BetweenBounds,
    params: &Params,
    alias: Option<&str>,
) -> Result<EvalValue, EvalError> {
    let v = eval(doc, value, params, alias)?;
    let lo = eval(doc, &bounds.lower, params, alias)?;
    let hi = eval(doc, &bounds.upper, params, alias)?;
    let above_lower = matches!(coercion::order(&v, &lo), Some(Ordering::Greater | Ordering::Equal));
    let below_upper = matches!(coercion::order(&v, &hi), Some(Ordering::Less | Ordering::Equal));
    Ok(EvalValue::Defined(Value::Bool(above_lower && below_upper)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxdoc_core::PropertyPath;
    use std::collections::HashMap;

    fn doc() -> Value {
        let mut obj = Value::object();
        let map = obj.as_object_mut().unwrap();
        map.insert("id".into(), Value::String("1".into()));
        map.insert("Name".into(), Value::String("Alice".into()));
        map.insert("Age".into(), Value::Integer(30));
        obj
    }

    fn property(path: &str) -> Expr {
        Expr::Property(PropertyPath::from_raw(path))
    }

    #[test]
    fn equality_on_resolved_property() {
        let expr = Expr::Binary(
            BinaryOp::Equal,
            Box::new(property("c.Name")),
            Box::new(Expr::Constant(Value::String("Alice".into()))),
        );
        let params = Params::new();
        assert!(eval(&doc(), &expr, &params, Some("c")).unwrap().truthy());
    }

    #[test]
    fn not_on_non_boolean_is_error() {
        let expr = Expr::Unary(UnaryOp::Not, Box::new(property("c.Name")));
        let params = Params::new();
        assert!(matches!(
            eval(&doc(), &expr, &params, Some("c")),
            Err(EvalError::NotBoolean { .. })
        ));
    }

    #[test]
    fn and_short_circuits() {
        // If short-circuit didn't happen, NOT on c.Name (a string) would error.
        let expr = Expr::Binary(
            BinaryOp::And,
            Box::new(Expr::Constant(Value::Bool(false))),
            Box::new(Expr::Unary(UnaryOp::Not, Box::new(property("c.Name")))),
        );
        let params = Params::new();
        assert!(!eval(&doc(), &expr, &params, Some("c")).unwrap().truthy());
    }

    #[test]
    fn between_is_inclusive() {
        let expr = Expr::Between(
            Box::new(property("c.Age")),
            Box::new(fauxdoc_ast::BetweenBounds {
                lower: Expr::Constant(Value::Integer(30)),
                upper: Expr::Constant(Value::Integer(40)),
            }),
        );
        let params = Params::new();
        assert!(eval(&doc(), &expr, &params, Some("c")).unwrap().truthy());
    }

    #[test]
    fn missing_parameter_compares_unequal() {
        let expr = Expr::Binary(
            BinaryOp::Equal,
            Box::new(Expr::Parameter("missing".into())),
            Box::new(Expr::Constant(Value::Integer(1))),
        );
        let params: HashMap<String, Value> = HashMap::new();
        assert!(!eval(&doc(), &expr, &params, Some("c")).unwrap().truthy());
    }

    #[test]
    fn is_defined_is_true_for_null() {
        let mut with_null = doc();
        with_null
            .as_object_mut()
            .unwrap()
            .insert("Nickname".into(), Value::Null);
        let expr = Expr::Function(fauxdoc_ast::FunctionCall {
            name: "IS_DEFINED".into(),
            args: vec![property("c.Nickname")],
        });
        let params = Params::new();
        assert!(eval(&with_null, &expr, &params, Some("c")).unwrap().truthy());
    }
}
