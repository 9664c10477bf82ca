use std::fmt;

/// An owned, already-split dotted property path, e.g. `c.Address.City`
/// decomposes into `{ alias: Some("c"), segments: ["Address", "City"] }`.
///
/// Built once by the parser and reused unmodified by WHERE, ORDER BY and
/// SELECT projection, rather than re-splitting strings in each of those
/// three places.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyPath {
    /// The leading alias segment, if the path was qualified (`c.Name` has
    /// alias `Some("c")`; `Name` alone has `None`).
    pub alias: Option<String>,
    /// The remaining dotted segments, in order.
    pub segments: Vec<String>,
}

impl PropertyPath {
    /// Parses a raw dotted path string (as it appeared in query text) into
    /// alias + segments, without yet knowing which alias the query's FROM
    /// clause bound. Call [`PropertyPath::strip_alias`] afterwards once the
    /// FROM alias is known.
    pub fn from_raw(raw: &str) -> Self {
        let segments = raw.split('.').map(str::to_owned).collect();
        PropertyPath {
            alias: None,
            segments,
        }
    }

    /// Returns a copy with the leading segment removed if it equals `alias`
    /// or one of the default aliases `c`/`r` (spec: defaults are always
    /// accepted even when no explicit alias was declared).
    pub fn strip_alias(&self, declared_alias: Option<&str>) -> PropertyPath {
        let mut segments = self.segments.clone();
        if segments.len() > 1 {
            let head = segments[0].as_str();
            let matches_declared = declared_alias.is_some_and(|a| a.eq_ignore_ascii_case(head));
            let matches_default = head.eq_ignore_ascii_case("c") || head.eq_ignore_ascii_case("r");
            if matches_declared || matches_default {
                segments.remove(0);
            }
        }
        PropertyPath {
            alias: self.alias.clone(),
            segments,
        }
    }

    /// `true` if this path is exactly the bare `id` field.
    pub fn is_id(&self) -> bool {
        self.segments.len() == 1 && self.segments[0].eq_ignore_ascii_case("id")
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(alias) = &self.alias {
            write!(f, "{alias}.")?;
        }
        write!(f, "{}", self.segments.join("."))
    }
}
