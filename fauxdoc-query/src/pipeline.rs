use std::cmp::Ordering;

use fauxdoc_ast::{Direction, Expr, Query, SelectItem};
use fauxdoc_core::{PropertyPath, Value, ID_FIELD};
use fauxdoc_eval::{eval, EvalValue, Params};

use crate::error::QueryError;

/// Runs the WHERE → ORDER BY → TOP/LIMIT → projection pipeline over
/// `docs` (assumed to already be in container insertion order) and returns
/// the materialized result.
pub fn run(docs: &[Value], query: &Query, params: &Params) -> Result<Vec<Value>, QueryError> {
    let alias = query.alias();

    let mut rows = filter(docs, query, params, alias)?;
    sort(&mut rows, query, params, alias)?;
    truncate(&mut rows, query);
    project(&rows, query, alias)
}

fn filter(
    docs: &[Value],
    query: &Query,
    params: &Params,
    alias: Option<&str>,
) -> Result<Vec<Value>, QueryError> {
    let Some(where_clause) = &query.r#where else {
        return Ok(docs.to_vec());
    };
    let mut kept = Vec::with_capacity(docs.len());
    for doc in docs {
        if eval(doc, &where_clause.predicate, params, alias)?.truthy() {
            kept.push(doc.clone());
        }
    }
    Ok(kept)
}

fn sort(rows: &mut [Value], query: &Query, params: &Params, alias: Option<&str>) -> Result<(), QueryError> {
    let Some(order_by) = &query.order_by else {
        return Ok(());
    };

    let mut keyed = Vec::with_capacity(rows.len());
    for row in rows.iter() {
        let mut keys = Vec::with_capacity(order_by.items.len());
        for item in &order_by.items {
            let expr = Expr::Property(item.path.clone());
            keys.push(eval(row, &expr, params, alias)?);
        }
        keyed.push(keys);
    }

    // Pair each row with its precomputed key vector up front: sort_by's
    // comparator must be infallible, and evaluation can fail (e.g. an
    // ORDER BY path that happens to be a function... it can't, paths never
    // error, but keeping evaluation out of the comparator keeps this right
    // even if ORDER BY ever grows expression support).
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    indices.sort_by(|&a, &b| {
        for (i, item) in order_by.items.iter().enumerate() {
            let ord = compare_sort_keys(&keyed[a][i], &keyed[b][i]);
            let ord = match item.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });

    let originals: Vec<Value> = rows.to_vec();
    for (slot, &source) in indices.iter().enumerate() {
        rows[slot] = originals[source].clone();
    }
    Ok(())
}

/// Total order used by ORDER BY: Null/undefined first, then numeric
/// comparison if both sides are numbers, else lexicographic on the string
/// representation. Distinct from the `<`/`<=` comparison rules, which treat
/// Null/undefined as incomparable rather than least.
fn compare_sort_keys(a: &EvalValue, b: &EvalValue) -> Ordering {
    let a_null_ish = a.as_value().is_none() || matches!(a.as_value(), Some(Value::Null));
    let b_null_ish = b.as_value().is_none() || matches!(b.as_value(), Some(Value::Null));
    match (a_null_ish, b_null_ish) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    let (Some(x), Some(y)) = (a.as_value(), b.as_value()) else {
        unreachable!("both sides checked non-null-ish above")
    };
    match (x.as_f64(), y.as_f64()) {
        (Some(fx), Some(fy)) => fx.partial_cmp(&fy).unwrap_or(Ordering::Equal),
        _ => x.stringify().cmp(&y.stringify()),
    }
}

fn truncate(rows: &mut Vec<Value>, query: &Query) {
    if let Some(top) = query.select.top {
        rows.truncate(top as usize);
    }
    if let Some(limit) = &query.limit {
        rows.truncate(limit.count as usize);
    }
}

fn project(rows: &[Value], query: &Query, alias: Option<&str>) -> Result<Vec<Value>, QueryError> {
    let SelectItem::Paths(paths) = &query.select.items else {
        return Ok(rows.to_vec());
    };

    let mut projected = Vec::with_capacity(rows.len());
    for row in rows {
        projected.push(project_row(row, paths, alias)?);
    }
    Ok(projected)
}

fn project_row(row: &Value, paths: &[PropertyPath], alias: Option<&str>) -> Result<Value, QueryError> {
    let mut output_map = indexmap::IndexMap::new();

    if let Some(id) = row.as_object().and_then(|o| o.get(ID_FIELD)) {
        output_map.insert(ID_FIELD.to_string(), id.clone());
    }

    for path in paths {
        let stripped = path.strip_alias(alias);
        if stripped.is_id() {
            continue;
        }
        let Some((actual_segments, value)) = resolve_actual_path(row, &stripped.segments) else {
            continue;
        };
        insert_nested(&mut output_map, &actual_segments, value);
    }

    Ok(Value::Object(output_map))
}

/// Walks `segments` against `row` with the same case-insensitive fallback
/// `fauxdoc_eval::resolve` uses, returning the document's own key casing at
/// each step rather than the query-text casing. Keeps `SELECT c.NAME` and
/// `SELECT c.name` projecting to the same output key for a given document.
fn resolve_actual_path(row: &Value, segments: &[String]) -> Option<(Vec<String>, Value)> {
    let mut current = row;
    let mut actual = Vec::with_capacity(segments.len());
    for segment in segments {
        let object = current.as_object()?;
        let (key, value) = object
            .get_key_value(segment.as_str())
            .or_else(|| object.iter().find(|(key, _)| key.eq_ignore_ascii_case(segment.as_str())))?;
        actual.push(key.clone());
        current = value;
    }
    Some((actual, current.clone()))
}

fn insert_nested(map: &mut indexmap::IndexMap<String, Value>, segments: &[String], value: Value) {
    match segments.split_first() {
        None => {}
        Some((head, [])) => {
            map.insert(head.clone(), value);
        }
        Some((head, rest)) => {
            let entry = map.entry(head.clone()).or_insert_with(Value::object);
            let Value::Object(nested) = entry else {
                *entry = Value::object();
                let Value::Object(nested) = entry else {
                    unreachable!("just assigned Object")
                };
                insert_nested(nested, rest, value);
                return;
            };
            insert_nested(nested, rest, value);
        }
    }
}
