//! # Ordered Map
//!
//! String-keyed map that iterates in insertion order, with a hash index
//! for constant-time lookup. Backs both [`Mapping`](crate::tree::Mapping)
//! and [`Tally`](crate::tally::Tally).
//!
//! Re-inserting an existing key replaces its value in place. Removal keeps
//! the relative order of the remaining entries.

use std::collections::HashMap;

/// Insertion-ordered map with unique `String` keys.
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert `value` under `key`, returning the replaced value if the key
    /// was already present. New keys are appended.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = *self.index.get(key)?;
        Some(&mut self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Remove `key`. Entries after it shift down by one.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for (k, _) in &self.entries[pos..] {
            if let Some(i) = self.index.get_mut(k.as_str()) {
                *i -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Transform every value, keeping keys and order.
    pub fn map_values<W, F>(&self, mut f: F) -> OrderedMap<W>
    where
        F: FnMut(&V) -> W,
    {
        OrderedMap {
            entries: self.entries.iter().map(|(k, v)| (k.clone(), f(v))).collect(),
            index: self.index.clone(),
        }
    }
}

impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from `entries`.
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for OrderedMap<V> {}

impl<V, K: Into<String>> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = OrderedMap::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V> From<OrderedMap<V>> for Vec<(String, V)> {
    fn from(map: OrderedMap<V>) -> Self {
        map.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut m: OrderedMap<i32> = [("b", 1), ("a", 2)].into_iter().collect();
        assert_eq!(m.insert("b", 9), Some(1));
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(m.get("b"), Some(&9));
    }

    #[test]
    fn test_remove_reindexes_tail() {
        let mut m: OrderedMap<i32> = [("a", 1), ("b", 2), ("c", 3), ("d", 4)]
            .into_iter()
            .collect();
        assert_eq!(m.remove("b"), Some(2));
        assert_eq!(m.remove("b"), None);
        assert_eq!(m.get("c"), Some(&3));
        assert_eq!(m.get("d"), Some(&4));
        m.insert("c", 30);
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
        assert_eq!(m.get("c"), Some(&30));
    }

    #[test]
    fn test_get_mut() {
        let mut m: OrderedMap<u64> = [("x", 1)].into_iter().collect();
        if let Some(v) = m.get_mut("x") {
            *v += 4;
        }
        assert_eq!(m.get("x"), Some(&5));
        assert!(m.get_mut("y").is_none());
    }

    #[test]
    fn test_many_keys_stay_addressable() {
        let n = 100_000;
        let m: OrderedMap<usize> = (0..n).map(|i| (format!("k{i}"), i)).collect();
        assert_eq!(m.len(), n);
        assert_eq!(m.get("k99999"), Some(&99_999));
        assert_eq!(m.keys().next(), Some("k0"));
    }
}
