//! Generic key/value payloads and named-field access.
//!
//! Provides the [FieldAccess] trait, which lets loaders, sibling orders and
//! display labels look up payload fields by name, together with a ready-made
//! dynamic payload [Record] whose values are captured by [FieldValue].
//!
//! Statically typed payloads do not need any of this: closures passed to
//! [LoadOptions](crate::loader::LoadOptions) and
//! [LabelSelector](crate::display::LabelSelector) work for any `T`.
//! Implement [FieldAccess] for a struct only if it should be addressable by
//! field name as well.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Dynamically keyed payload.
pub type Record = BTreeMap<String, FieldValue>;

// =#========================================================================#=
// FIELD ACCESS
// =#========================================================================#=
/// Named-field lookup on a payload.
///
/// Unknown fields yield `None`; callers degrade to a fallback instead of
/// failing.
///
/// # Example
/// ```
/// use arborist::model::{FieldAccess, FieldValue};
///
/// struct Category {
///     id: i64,
///     title: String,
/// }
///
/// impl FieldAccess for Category {
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         match name {
///             "id" => Some(self.id.into()),
///             "title" => Some(self.title.as_str().into()),
///             _ => None,
///         }
///     }
/// }
///
/// let category = Category { id: 7, title: "Birds".to_string() };
/// assert_eq!(category.field("title").unwrap().as_str(), Some("Birds"));
/// assert!(category.field("colour").is_none());
/// ```
pub trait FieldAccess {
    /// Returns the value of field `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

impl FieldAccess for Record {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.get(name).cloned()
    }
}

impl FieldAccess for std::collections::HashMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.get(name).cloned()
    }
}

// =#========================================================================#=
// FIELD VALUE
// =#========================================================================#=
/// Value of a single payload field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// For integer values (ids, sort keys)
    Int(i64),
    /// For floating point values
    Float(f64),
    /// For strings
    Str(String),
    /// For flags
    Bool(bool),
}

impl FieldValue {
    /// Returns the integer held by this value, if it is one.
    ///
    /// Floats are not truncated; only [FieldValue::Int] converts.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string held by this value, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Rank of the variant, used to order values of different kinds.
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Int(_) | FieldValue::Float(_) => 1,
            FieldValue::Str(_) => 2,
        }
    }

    /// Total order over field values, used for sorting siblings by field.
    ///
    /// Numbers compare numerically (ints and floats mixed), strings
    /// lexicographically, and values of different kinds by kind:
    /// booleans < numbers < strings.
    pub fn total_cmp(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::Int(a), FieldValue::Float(b)) => (*a as f64).total_cmp(b),
            (FieldValue::Float(a), FieldValue::Int(b)) => a.total_cmp(&(*b as f64)),
            (FieldValue::Str(a), FieldValue::Str(b)) => a.cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Str(v) => f.write_str(v),
            FieldValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

/// Builds a [Record] from `(field, value)` pairs.
///
/// # Example
/// ```
/// use arborist::model::{record, FieldAccess};
///
/// let r = record([("id", 1.into()), ("parent_id", 0.into()), ("title", "Root".into())]);
/// assert_eq!(r.field("id").and_then(|v| v.as_int()), Some(1));
/// ```
pub fn record<K, I>(fields: I) -> Record
where
    K: Into<String>,
    I: IntoIterator<Item = (K, FieldValue)>,
{
    fields.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
