//! Key-addressed access shared by [`Value`] and the standard maps.
//!
//! Inherent map methods are called by path in this module, since
//! [`Keyed::insert`] takes `self` by value and would otherwise win method lookup.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::Hash;

use super::Value;

/// A structure whose parts can be addressed by key.
///
/// This is what [`Lens::key`](crate::optics::Lens::key) and
/// [`Prism::key`](crate::optics::Prism::key) are built on. A Lens treats a
/// missing key as a contract violation; a Prism treats it as a miss.
pub trait Keyed: Sized {
    /// The key type.
    type Key: Clone + Display + Send + Sync + 'static;

    /// The type stored under each key.
    type Value: Clone;

    /// Looks up a key. Returns `None` when the key is absent or when this
    /// value is not a keyed structure at all.
    fn fetch(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns a copy of `self` with `key` bound to `value`.
    ///
    /// Values that are not keyed structures are returned unchanged.
    #[must_use]
    fn insert(self, key: Self::Key, value: Self::Value) -> Self;

    /// Builds a structure holding only `key` bound to `value`.
    fn singleton(key: Self::Key, value: Self::Value) -> Self;

    /// Returns whether `key` is present.
    fn contains(&self, key: &Self::Key) -> bool {
        self.fetch(key).is_some()
    }

    /// Returns whether this value can hold keys at all.
    fn is_structure(&self) -> bool {
        true
    }

    /// A short description of this value's shape, used in error messages.
    fn kind(&self) -> &'static str {
        "map"
    }
}

impl Keyed for Value {
    type Key = String;
    type Value = Self;

    fn fetch(&self, key: &String) -> Option<&Self> {
        match self {
            Self::Map(fields) => fields.get(key),
            Self::Record(record) => record.fields.get(key),
            _ => None,
        }
    }

    fn insert(self, key: String, value: Self) -> Self {
        match self {
            Self::Map(mut fields) => {
                BTreeMap::insert(&mut fields, key, value);
                Self::Map(fields)
            }
            Self::Record(record) => Self::Record(record.with(key, value)),
            other => other,
        }
    }

    fn singleton(key: String, value: Self) -> Self {
        Self::Map(BTreeMap::from([(key, value)]))
    }

    fn is_structure(&self) -> bool {
        matches!(self, Self::Map(_) | Self::Record(_))
    }

    fn kind(&self) -> &'static str {
        self.kind_name()
    }
}

impl<K, V> Keyed for HashMap<K, V>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn fetch(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert(mut self, key: K, value: V) -> Self {
        Self::insert(&mut self, key, value);
        self
    }

    fn singleton(key: K, value: V) -> Self {
        Self::from([(key, value)])
    }
}

impl<K, V> Keyed for BTreeMap<K, V>
where
    K: Ord + Clone + Display + Send + Sync + 'static,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn fetch(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert(mut self, key: K, value: V) -> Self {
        Self::insert(&mut self, key, value);
        self
    }

    fn singleton(key: K, value: V) -> Self {
        Self::from([(key, value)])
    }
}
