use fauxdoc_core::{PropertyPath, Value};

use crate::value::EvalValue;

/// Resolves `path` against `doc`, stripping the FROM alias (or one of the
/// default aliases `c`/`r`) first.
///
/// Each segment is looked up case-sensitively first, falling back to a
/// case-insensitive scan of the current object's keys. Any segment that
/// misses, or any intermediate segment that is not an Object, resolves the
/// whole path to `Undefined`.
pub fn resolve(doc: &Value, path: &PropertyPath, alias: Option<&str>) -> EvalValue {
    let path = path.strip_alias(alias);
    let mut current = doc;
    for segment in &path.segments {
        let Some(object) = current.as_object() else {
            return EvalValue::Undefined;
        };
        match lookup(object, segment) {
            Some(next) => current = next,
            None => return EvalValue::Undefined,
        }
    }
    EvalValue::Defined(current.clone())
}

/// Case-sensitive lookup with a case-insensitive fallback scan.
fn lookup<'a>(
    object: &'a indexmap::IndexMap<String, Value>,
    segment: &str,
) -> Option<&'a Value> {
    if let Some(value) = object.get(segment) {
        return Some(value);
    }
    object
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(segment))
        .map(|(_, value)| value)
}
