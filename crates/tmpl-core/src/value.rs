//! # Leaf Values and Type Tags
//!
//! Documents carry [`Value`] leaves; templates carry [`TypeTag`] leaves.
//! Every value has exactly one tag, obtained with [`TypeTag::of`], and a
//! value conforms to a template leaf when the two tags are equal. There is
//! no subtyping: a `Bool` is not an `Integer`, and an `Integer` is not a
//! `Float`.
//!
//! Lists are opaque leaves. Their elements are never inspected, matching
//! the rule that only mappings nest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TmplError;

/// A terminal value inside a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Floating point number, including integers outside the `i64` range.
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// Ordered list of values, compared only as a whole.
    List(Vec<Value>),
}

impl Value {
    /// The type tag of this value.
    pub fn type_tag(&self) -> TypeTag {
        TypeTag::of(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part, so 1.0 does not print as an integer.
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    // Text inside a list is quoted so element boundaries stay visible.
                    match item {
                        Self::Text(s) => write!(f, "{s:?}")?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

/// The expected kind of a template leaf.
///
/// | Tag | Canonical name | Accepted aliases |
/// |-----|----------------|------------------|
/// | `Null` | `null` | `none` |
/// | `Bool` | `bool` | `boolean` |
/// | `Integer` | `int` | `integer` |
/// | `Float` | `float` | `number` |
/// | `Text` | `str` | `string`, `text` |
/// | `List` | `list` | `array` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeTag {
    #[serde(rename = "null", alias = "none")]
    Null,
    #[serde(rename = "bool", alias = "boolean")]
    Bool,
    #[serde(rename = "int", alias = "integer")]
    Integer,
    #[serde(rename = "float", alias = "number")]
    Float,
    #[serde(rename = "str", alias = "string", alias = "text")]
    Text,
    #[serde(rename = "list", alias = "array")]
    List,
}

impl TypeTag {
    /// Returns every tag in declaration order.
    pub fn all() -> &'static [TypeTag] {
        &[
            Self::Null,
            Self::Bool,
            Self::Integer,
            Self::Float,
            Self::Text,
            Self::List,
        ]
    }

    /// The tag of a concrete value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Integer(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::Text(_) => Self::Text,
            Value::List(_) => Self::List,
        }
    }

    /// True when `value` has exactly this tag.
    pub fn admits(&self, value: &Value) -> bool {
        Self::of(value) == *self
    }

    /// The canonical name, as accepted by [`FromStr`] and produced by serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Text => "str",
            Self::List => "list",
        }
    }

    /// A minimal value carrying this tag.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool => Value::Bool(false),
            Self::Integer => Value::Integer(0),
            Self::Float => Value::Float(0.0),
            Self::Text => Value::Text(String::new()),
            Self::List => Value::List(Vec::new()),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = TmplError;

    /// Parse a tag from its canonical name or one of its aliases.
    /// Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" | "none" => Ok(Self::Null),
            "bool" | "boolean" => Ok(Self::Bool),
            "int" | "integer" => Ok(Self::Integer),
            "float" | "number" => Ok(Self::Float),
            "str" | "string" | "text" => Ok(Self::Text),
            "list" | "array" => Ok(Self::List),
            other => Err(TmplError::UnknownTypeTag(other.to_string())),
        }
    }
}
