use std::collections::BTreeMap;

/// Values that mean "no restriction" for a filter.
pub const WILDCARDS: [&str; 2] = ["all", ""];

pub fn is_wildcard(value: &str) -> bool {
    WILDCARDS.contains(&value.trim())
}

/// Named equality filters combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    values: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a filter value. Returns `true` when the value actually changed;
    /// every wildcard is stored as `"all"`, so switching between them is not a change.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        let value = if is_wildcard(&value) { "all".to_string() } else { value };
        if self.get(name) == value {
            return false;
        }
        self.values.insert(name.to_string(), value);
        true
    }

    /// Current value, `"all"` when unset.
    pub fn get(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(v) if !v.is_empty() => v,
            _ => "all",
        }
    }

    /// Filters that actually restrict the result set.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !is_wildcard(v))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Query parameters for the server; wildcard entries are omitted.
    pub fn to_params(&self) -> Vec<(String, String)> {
        self.active()
            .map(|(k, v)| (k.to_string(), v.trim().to_string()))
            .collect()
    }

    /// Client-side evaluation of the same filters.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.active().all(|(name, value)| match item.field_value(name) {
            Some(actual) => actual.eq_ignore_ascii_case(value.trim()),
            None => true,
        })
    }
}

/// Exposes the fields a [`FilterSet`] can restrict, as their wire strings.
///
/// Unknown filter names return `None` and do not restrict the item.
pub trait Filterable {
    fn field_value(&self, name: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        status: &'static str,
        platform: i64,
    }

    impl Filterable for Row {
        fn field_value(&self, name: &str) -> Option<String> {
            match name {
                "status" => Some(self.status.to_string()),
                "platform" => Some(self.platform.to_string()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_wildcards_are_omitted() {
        let filters = FilterSet::new()
            .with("status", "all")
            .with("platform", "")
            .with("type_trans", "deposit");
        assert_eq!(
            filters.to_params(),
            vec![("type_trans".to_string(), "deposit".to_string())]
        );
    }

    #[test]
    fn test_order_independent() {
        let a = FilterSet::new().with("status", "pending").with("platform", "3");
        let b = FilterSet::new().with("platform", "3").with("status", "pending");
        assert_eq!(a.to_params(), b.to_params());
    }

    #[test]
    fn test_set_reports_change() {
        let mut filters = FilterSet::new();
        assert!(!filters.set("status", ""));
        assert!(filters.set("status", "pending"));
        assert!(!filters.set("status", "pending"));
        assert_eq!(filters.get("status"), "pending");
        assert_eq!(filters.get("platform"), "all");
    }

    #[test]
    fn test_switching_between_wildcards_is_not_a_change() {
        let mut filters = FilterSet::new().with("status", "all");
        let before = filters.clone();
        assert!(!filters.set("status", ""));
        assert!(!filters.set("status", " all "));
        assert_eq!(filters, before);
        assert!(filters.to_params().is_empty());

        assert!(filters.set("status", "approved"));
        assert!(filters.set("status", ""));
        assert_eq!(filters.get("status"), "all");
        assert!(filters.to_params().is_empty());
    }

    #[test]
    fn test_client_side_predicate() {
        let rows = [
            Row { status: "pending", platform: 1 },
            Row { status: "approved", platform: 1 },
            Row { status: "pending", platform: 2 },
        ];
        let filters = FilterSet::new().with("status", "pending").with("platform", "1");
        let kept: Vec<_> = rows.iter().filter(|r| filters.matches(*r)).collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].platform, 1);

        let everything = FilterSet::new().with("status", "all").with("unknown", "x");
        assert!(rows.iter().all(|r| everything.matches(r)));
    }
}
