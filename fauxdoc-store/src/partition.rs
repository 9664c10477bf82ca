use fauxdoc_core::Value;

/// A partition-key path, e.g. `/Address/City`, stored as its segments
/// (`["Address", "City"]`) with the leading slash already stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionKeyPath {
    segments: Vec<String>,
}

impl PartitionKeyPath {
    /// Parses a `/`-delimited path, e.g. `/id` or `/Address/City`.
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Self { segments }
    }

    /// The default partition-key path, `/id`.
    pub fn default_id() -> Self {
        Self::parse("/id")
    }

    /// Resolves this path against `doc`, by exact-key lookup at each
    /// segment (no alias-stripping or case-insensitive fallback — this is
    /// the document's own canonical field addressing, not user query
    /// text). Returns `None` if any segment is missing or a non-Object is
    /// encountered before the path is exhausted.
    pub fn resolve<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        let mut current = doc;
        for segment in &self.segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

/// A caller-supplied partition-key value; `None` and the literal value
/// `"none"` are equivalent sentinels meaning "no partition key", per
/// spec's "absent or \"none\" matches by id only".
pub fn normalize_supplied(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.eq_ignore_ascii_case("none"))
}
