use crate::core::FunctionMap;
use std::collections::BTreeMap;

/// Immutable name-to-function table, built once by [`Registry::register`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, String>,
}

impl Registry {
    pub fn register(functions: FunctionMap) -> Self {
        Self { entries: functions }
    }

    /// The function referenced by `name`, or `None` when it was never registered.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// `(name, function)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&str]) -> Registry {
        Registry::register(
            names
                .iter()
                .map(|n| (n.to_string(), n.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_lookup_present_and_absent() {
        let registry = registry(&["Alpha", "Beta"]);
        assert_eq!(registry.lookup("Alpha"), Some("Alpha"));
        assert_eq!(registry.lookup("Missing"), None);
        assert_eq!(registry.lookup("alpha"), None);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let registry = registry(&["Zeta", "Alpha", "Mid"]);
        let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.lookup("Anything"), None);
    }
}
