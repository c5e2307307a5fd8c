//! # Nested Trees
//!
//! Documents and templates share one shape: an insertion-ordered mapping
//! from string keys to nodes, where each node is either a leaf or another
//! mapping. The leaf type is the only difference between the two.
//!
//! ```text
//! Document = Mapping<Value>     Template = Mapping<TypeTag>
//! ```
//!
//! Nesting is expressed with an explicit [`Node`] tag. Traversals dispatch
//! on `Leaf` vs `Branch` instead of inspecting runtime types.
//!
//! ## Ordering
//!
//! Entry order is insertion order and is observable: leaf extraction in
//! `tmpl-schema` depends on it. Re-inserting an existing key replaces the
//! node in place without moving it.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ordered::OrderedMap;
use crate::value::{TypeTag, Value};

/// A nested document: mapping from keys to values or sub-documents.
pub type Document = Mapping<Value>;

/// A nested template: mapping from keys to type tags or sub-templates.
pub type Template = Mapping<TypeTag>;

/// A single position in a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node<L> {
    /// Nested mapping.
    Branch(Mapping<L>),
    /// Terminal value.
    Leaf(L),
}

impl<L> Node<L> {
    /// Wrap a leaf.
    pub fn leaf(value: impl Into<L>) -> Self {
        Self::Leaf(value.into())
    }

    /// Wrap a mapping.
    pub fn branch(mapping: Mapping<L>) -> Self {
        Self::Branch(mapping)
    }

    pub fn as_leaf(&self) -> Option<&L> {
        match self {
            Self::Leaf(l) => Some(l),
            Self::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&Mapping<L>> {
        match self {
            Self::Branch(m) => Some(m),
            Self::Leaf(_) => None,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }
}

/// Insertion-ordered mapping with unique string keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping<L> {
    entries: OrderedMap<Node<L>>,
}

impl<L> Default for Mapping<L> {
    fn default() -> Self {
        Self {
            entries: OrderedMap::new(),
        }
    }
}

impl<L> Mapping<L> {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` under `key`.
    ///
    /// If the key already exists its node is replaced in place and the
    /// previous node is returned; otherwise the entry is appended.
    pub fn insert(&mut self, key: impl Into<String>, node: Node<L>) -> Option<Node<L>> {
        self.entries.insert(key, node)
    }

    /// Builder form of [`insert`](Self::insert) for a leaf.
    pub fn with_leaf(mut self, key: impl Into<String>, value: impl Into<L>) -> Self {
        self.insert(key, Node::leaf(value));
        self
    }

    /// Builder form of [`insert`](Self::insert) for a nested mapping.
    pub fn with_branch(mut self, key: impl Into<String>, mapping: Mapping<L>) -> Self {
        self.insert(key, Node::Branch(mapping));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Node<L>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node<L>> {
        self.entries.remove(key)
    }

    /// Number of direct entries (not counting nested ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node<L>)> {
        self.entries.iter()
    }

    /// Direct keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys()
    }

    /// Rebuild the tree with every leaf transformed by `f`, keeping keys,
    /// nesting and order.
    pub fn map_leaves<M, F>(&self, mut f: F) -> Mapping<M>
    where
        F: FnMut(&L) -> M,
    {
        self.map_leaves_with(&mut f)
    }

    fn map_leaves_with<M, F>(&self, f: &mut F) -> Mapping<M>
    where
        F: FnMut(&L) -> M,
    {
        let entries = self.entries.map_values(|node| match node {
            Node::Leaf(l) => Node::Leaf(f(l)),
            Node::Branch(m) => Node::Branch(m.map_leaves_with(&mut *f)),
        });
        Mapping { entries }
    }
}

impl Template {
    /// A document that conforms to this template, with each leaf set to
    /// the zero value of its tag.
    pub fn skeleton(&self) -> Document {
        self.map_leaves(TypeTag::zero_value)
    }
}

impl<L, K: Into<String>> FromIterator<(K, Node<L>)> for Mapping<L> {
    fn from_iter<I: IntoIterator<Item = (K, Node<L>)>>(iter: I) -> Self {
        Mapping {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<L: Serialize> Serialize for Mapping<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in self.entries.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de, L: Deserialize<'de>> Deserialize<'de> for Mapping<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor<L>(PhantomData<L>);

        impl<'de, L: Deserialize<'de>> Visitor<'de> for MappingVisitor<L> {
            type Value = Mapping<L>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut mapping = Mapping::new();
                while let Some((k, v)) = access.next_entry::<String, Node<L>>()? {
                    mapping.insert(k, v);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor(PhantomData))
    }
}
