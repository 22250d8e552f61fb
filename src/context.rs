use crate::{ContextValue, StaticCowStr};

/// An ordered collection of named context values attached to a log call.
///
/// This is both the per-call context a caller hands to a logger method and
/// the combined two-entry structure the decorator forwards to its sink. It
/// serializes as a map; if a key is recorded twice, the later record wins in
/// self-describing formats.
///
/// # Example
///
/// ```
/// use mdc_logger::ContextMap;
///
/// let context = ContextMap::new()
///     .record("user_id", 42)
///     .record("action", "login");
/// assert_eq!(context.len(), 2);
/// ```
#[derive(Debug)]
pub struct ContextMap {
    entries: Vec<(StaticCowStr, ContextValue)>,
}

impl ContextMap {
    /// Creates an empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a record to the context.
    #[must_use]
    pub fn record(mut self, key: impl Into<StaticCowStr>, value: impl Into<ContextValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (StaticCowStr, ContextValue)> {
        self.entries.iter()
    }
}

impl Default for ContextMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ContextMap {
    type Item = &'a (StaticCowStr, ContextValue);
    type IntoIter = std::slice::Iter<'a, (StaticCowStr, ContextValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl serde::Serialize for ContextMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(key, value)| (key.as_ref(), value)))
    }
}

impl log::kv::Source for ContextMap {
    fn visit<'kvs>(
        &'kvs self,
        visitor: &mut dyn log::kv::VisitSource<'kvs>,
    ) -> Result<(), log::kv::Error> {
        for (key, value) in self {
            visitor.visit_pair(log::kv::Key::from_str(key), value.as_log_value())?;
        }
        Ok(())
    }
}

impl From<ContextMap> for ContextValue {
    fn from(map: ContextMap) -> Self {
        ContextValue::serde(map)
    }
}
