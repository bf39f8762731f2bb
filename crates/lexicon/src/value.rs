//! Member payload values.
//!
//! [`Value`] is the payload a registry member wraps: one of the scalar shapes
//! loosely-formatted external input arrives in, or a [`Record`] of named
//! scalar fields. No validation is performed on payloads; whatever the
//! declaration site provides is stored as-is.

use core::fmt;
use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The payload of a registry member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating-point value.
	Float(f64),
	/// String value.
	Str(String),
	/// Structured value: ordered mapping of field name to value.
	Record(Record),
}

impl Value {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is a `Float` variant.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `Str` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Str(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the record if this is a `Record` variant.
	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Value::Record(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::Float(_) => "float",
			Value::Str(_) => "string",
			Value::Record(_) => "record",
		}
	}

	/// Canonical JSON rendering.
	///
	/// Serialization of these shapes cannot fail (string keys, finite depth;
	/// non-finite floats render as `null`), so the unreachable error path
	/// degrades to an empty string rather than panicking.
	pub fn to_json(&self) -> String {
		serde_json::to_string(self).unwrap_or_default()
	}

	/// Canonical text rendering, borrowing when the value is already a string.
	pub(crate) fn text(&self) -> Cow<'_, str> {
		match self {
			Value::Str(s) => Cow::Borrowed(s),
			other => Cow::Owned(other.to_string()),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Bool(v) => write!(f, "{v}"),
			Value::Int(v) => write!(f, "{v}"),
			Value::Float(v) => write!(f, "{v}"),
			Value::Str(v) => f.write_str(v),
			Value::Record(_) => f.write_str(&self.to_json()),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(v.into())
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Str(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Str(v.to_string())
	}
}

impl From<Record> for Value {
	fn from(v: Record) -> Self {
		Value::Record(v)
	}
}

/// Ordered mapping of field name to [`Value`], the payload shape of a
/// structured registry member. Field order is insertion order and is
/// preserved by the canonical JSON rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
	/// Creates an empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a field, replacing any previous content under the same name.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(name.into(), value.into());
	}

	/// Returns the content of the named field, if present.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Iterates fields in insertion order.
	pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Returns the number of fields.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when the record has no fields.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}

/// Case-insensitive string equality used for key, override-name, and
/// structured-field comparisons. Exact equality short-circuits the fold.
pub(crate) fn fold_eq(a: &str, b: &str) -> bool {
	a == b || a.to_lowercase() == b.to_lowercase()
}
