use std::collections::HashMap;

use crowdfund_application::SessionStore;
use crowdfund_core::AppResult;
use serde_json::Value;

/// In-memory session store holding one session's values.
///
/// Tracks which keys were written so callers can copy only changed values
/// back into an outer session.
#[derive(Debug, Default, Clone)]
pub struct InMemorySessionStore {
    values: HashMap<String, Value>,
    dirty: Vec<String>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with existing session values.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            values: values.into_iter().collect(),
            dirty: Vec::new(),
        }
    }

    /// Returns the values written since the store was created, in first-write order.
    #[must_use]
    pub fn changed_values(&self) -> Vec<(String, Value)> {
        self.dirty
            .iter()
            .filter_map(|key| {
                self.values
                    .get(key)
                    .map(|value| (key.clone(), value.clone()))
            })
            .collect()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_value(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn insert_value(&mut self, key: &str, value: Value) -> AppResult<()> {
        if !self.dirty.iter().any(|dirty_key| dirty_key == key) {
            self.dirty.push(key.to_owned());
        }
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}
