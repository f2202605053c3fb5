//! A dynamic, keyed data model for key- and path-based optics.
//!
//! Typed Rust structs are reached with closures or the [`lens!`](crate::lens)
//! macro. Data whose shape is only known at runtime (decoded documents,
//! heterogeneous records, tagged unions) is modelled with [`Value`]:
//!
//! - [`Value::Map`] is an untagged keyed structure;
//! - [`Value::Record`] is a keyed structure that carries a type tag, which
//!   prisms use to tell variants apart ("this payment is a credit card").
//!
//! [`Keyed`] abstracts over anything optics can index by key, including the
//! standard `HashMap` and `BTreeMap`.
//!
//! # Examples
//!
//! ```rust
//! use monoptic::value::{Keyed, Record, Value};
//!
//! let card = Value::record("CreditCard", [("amount", Value::Int(100))]);
//! assert_eq!(card.tag(), Some("CreditCard"));
//! assert_eq!(card.fetch(&"amount".to_string()), Some(&Value::Int(100)));
//! assert!(!card.contains(&"number".to_string()));
//! ```

mod keyed;

pub use keyed::Keyed;

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A tagged keyed structure, the dynamic counterpart of a Rust struct.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    tag: String,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record with the given type tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Returns the type tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the fields in key order.
    pub const fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Returns a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns this record with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        BTreeMap::insert(&mut self.fields, name.into(), value.into());
        self
    }
}

/// A dynamically shaped value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered list.
    List(Vec<Value>),
    /// An untagged keyed structure.
    Map(BTreeMap<String, Value>),
    /// A tagged keyed structure.
    Record(Record),
}

impl Value {
    /// Builds a [`Value::Map`] from key/value pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a [`Value::Record`] with the given tag from key/value pairs.
    pub fn record<K, V, I>(tag: impl Into<String>, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        let record = entries
            .into_iter()
            .fold(Record::new(tag), |record, (key, value)| record.with(key, value));
        Self::Record(record)
    }

    /// Returns the type tag if this is a [`Value::Record`].
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Record(record) => Some(record.tag()),
            _ => None,
        }
    }

    /// Returns whether this is a record carrying `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    /// Returns the integer payload, if any.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float payload, if any.
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean payload, if any.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// A short name for the variant, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value:?}"),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
            Self::Map(fields) => write_fields(formatter, "", fields),
            Self::Record(record) => write_fields(formatter, record.tag(), record.fields()),
        }
    }
}

fn write_fields(
    formatter: &mut fmt::Formatter<'_>,
    tag: &str,
    fields: &BTreeMap<String, Value>,
) -> fmt::Result {
    if !tag.is_empty() {
        write!(formatter, "{tag} ")?;
    }
    write!(formatter, "{{")?;
    for (index, (key, value)) in fields.iter().enumerate() {
        if index > 0 {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{key}: {value}")?;
    }
    write!(formatter, "}}")
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}
