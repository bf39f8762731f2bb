//! Engine seam shared by the simple and structured registries.
//!
//! Both registry flavors run the same lookup loop; they differ only in how a
//! member's value is matched against a token and how it is rendered. That
//! strategy lives behind the sealed [`Engine`] trait with two zero-sized
//! implementations, [`Simple`] and [`Structured`].

use core::fmt;

use crate::value::{Value, fold_eq};

mod sealed {
	pub trait Sealed {}
	impl Sealed for super::Simple {}
	impl Sealed for super::Structured {}
}

/// Value-matching and rendering strategy for a registry flavor.
///
/// Sealed: the only engines are [`Simple`] and [`Structured`].
pub trait Engine: sealed::Sealed + Send + Sync + 'static {
	/// Returns true when `token` matches `value` under this engine's rules.
	fn value_matches(value: &Value, token: &Value) -> bool;

	/// Writes the display rendering of a member value.
	fn fmt_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Engine for scalar-valued members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Simple {}

/// Engine for record-valued members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structured {}

impl Engine for Simple {
	fn value_matches(value: &Value, token: &Value) -> bool {
		scalar_matches(value, token)
	}

	fn fmt_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(value, f)
	}
}

impl Engine for Structured {
	fn value_matches(value: &Value, token: &Value) -> bool {
		if let Value::Record(record) = value {
			let text = token.text();
			return record.fields().any(|(name, content)| {
				let content = content.text();
				*text == *content || fold_eq(&text, name) || fold_eq(&text, &content)
			});
		}
		scalar_matches(value, token)
	}

	fn fmt_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&value.to_json())
	}
}

/// Common scalar check: the token equals the value, equals its canonical
/// text, or, when the value is a string, equals it case-insensitively.
/// Records never match here; only the structured engine looks inside them.
fn scalar_matches(value: &Value, token: &Value) -> bool {
	if token == value {
		return true;
	}
	let text = token.text();
	match value {
		Value::Str(s) => fold_eq(&text, s),
		Value::Record(_) => false,
		other => *text == *other.text(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record;

	#[test]
	fn scalar_tokens_match_best_effort() {
		assert!(Simple::value_matches(&Value::Int(4), &Value::Str("4".into())));
		assert!(Simple::value_matches(&Value::Int(4), &Value::Int(4)));
		assert!(Simple::value_matches(&Value::Bool(true), &Value::Str("true".into())));
		assert!(!Simple::value_matches(&Value::Int(4), &Value::Str("5".into())));
	}

	#[test]
	fn string_values_fold_case() {
		let value = Value::from("green");
		assert!(Simple::value_matches(&value, &Value::from("GREEN")));
		assert!(!Simple::value_matches(&value, &Value::from("grn")));
	}

	#[test]
	fn structured_engine_scans_fields() {
		let value = Value::from(record! { "id" => 1, "label" => "Active" });
		// field content, field name (folded), field content (folded)
		assert!(Structured::value_matches(&value, &Value::from("Active")));
		assert!(Structured::value_matches(&value, &Value::from("LABEL")));
		assert!(Structured::value_matches(&value, &Value::from("active")));
		assert!(Structured::value_matches(&value, &Value::from(1)));
		assert!(!Structured::value_matches(&value, &Value::from("inactive")));
	}

	#[test]
	fn simple_engine_never_looks_inside_records() {
		let value = Value::from(record! { "label" => "Active" });
		assert!(!Simple::value_matches(&value, &Value::from("Active")));
		assert!(Simple::value_matches(&value, &value.clone()));
	}
}
