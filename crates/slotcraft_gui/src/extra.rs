//! Free-form data attached to pages and items

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// String-keyed bag of shared values of any type
///
/// Cloning is cheap; values are shared, not copied.
#[derive(Clone, Default)]
pub struct ExtraData {
    values: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ExtraData {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any previous one under `key`
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(key.into(), Arc::new(value));
    }

    /// Get a value if it exists and has type `T`
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref::<T>()
    }

    /// Remove a value; true if something was stored
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    /// Check for a key, whatever its type
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for ExtraData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("ExtraData").field("keys", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_access() {
        let mut extra = ExtraData::new();
        extra.insert("price", 42u32);
        extra.insert("label", String::from("Shop"));

        assert_eq!(extra.get::<u32>("price"), Some(&42));
        assert_eq!(extra.get::<String>("label").map(String::as_str), Some("Shop"));
        assert_eq!(extra.get::<i64>("price"), None);
        assert_eq!(extra.get::<u32>("missing"), None);
    }

    #[test]
    fn test_remove_and_clone_share() {
        let mut extra = ExtraData::new();
        extra.insert("price", 42u32);
        let copy = extra.clone();

        assert!(extra.remove("price"));
        assert!(!extra.remove("price"));
        assert!(extra.is_empty());
        assert!(copy.contains("price"));
    }
}
