use std::collections::HashMap;

/// Insertion-ordered map from key to record.
///
/// Replacing an existing key keeps its original position; removing a key
/// drops it from the order.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    records: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.records.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.records.get_mut(key)
    }

    /// Inserts or replaces, returning the previous record for the key.
    pub fn insert(&mut self, key: String, record: T) -> Option<T> {
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.records.insert(key, record)
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        let removed = self.records.remove(key)?;
        self.order.retain(|k| k != key);
        Some(removed)
    }

    /// Records in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(move |k| self.records.get(k))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl<T: Clone> Arena<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}
