//! # Tallies
//!
//! Combine keyed counts from several sources into one ranking. Each
//! [`Tally`] keeps its keys in first-seen order; merging sums counts per
//! key and ranks the result by count, highest first. Ties keep first-seen
//! order across the merged inputs.

use serde::{Deserialize, Serialize};

use crate::error::TmplError;
use crate::ordered::OrderedMap;

/// Insertion-ordered counts keyed by string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, u64)>", into = "Vec<(String, u64)>")]
pub struct Tally {
    counts: OrderedMap<u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to `key`, appending the key if unseen.
    pub fn add(&mut self, key: impl Into<String>, count: u64) {
        let key = key.into();
        match self.counts.get_mut(&key) {
            Some(n) => *n = n.saturating_add(count),
            None => {
                self.counts.insert(key, count);
            }
        }
    }

    /// Add every count from `other` in its order.
    pub fn update(&mut self, other: &Tally) {
        for (k, n) in other.iter() {
            self.add(k, n);
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, n)| (k, *n))
    }

    /// Entries ranked by count, highest first; ties keep first-seen order.
    pub fn most_common(&self) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self.counts.clone().into();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Build a tally from a JSON object of non-negative integer counts.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, TmplError> {
        let object = json.as_object().ok_or_else(|| TmplError::NotAMapping {
            what: "tally",
            found: "a non-mapping value".to_string(),
        })?;
        let mut tally = Tally::new();
        for (key, value) in object {
            let count = value.as_u64().ok_or_else(|| {
                TmplError::Serialization(format!(
                    "count for '{key}' must be a non-negative integer, found {value}"
                ))
            })?;
            tally.add(key.clone(), count);
        }
        Ok(tally)
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for Tally {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for (k, n) in iter {
            tally.add(k, n);
        }
        tally
    }
}

impl From<Vec<(String, u64)>> for Tally {
    fn from(pairs: Vec<(String, u64)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<Tally> for Vec<(String, u64)> {
    fn from(tally: Tally) -> Self {
        tally.counts.into()
    }
}

/// Merge several tallies and rank the totals.
///
/// Returns `None` when no tallies are given, which is distinct from
/// merging only empty tallies (`Some(vec![])`).
pub fn merge_tallies<'a, I>(tallies: I) -> Option<Vec<(String, u64)>>
where
    I: IntoIterator<Item = &'a Tally>,
{
    let mut iter = tallies.into_iter().peekable();
    iter.peek()?;

    let mut total = Tally::new();
    for tally in iter {
        total.update(tally);
    }
    tracing::debug!(keys = total.len(), "merged tallies");
    Some(total.most_common())
}
