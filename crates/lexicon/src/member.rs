//! Registry members and their declaration-time metadata.

use core::fmt;
use core::marker::PhantomData;

use serde::{Serialize, Serializer};

use crate::engine::{Engine, Simple, Structured};
use crate::value::{Value, fold_eq};

/// How an override name is compared against a query token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
	/// Case-insensitive comparison.
	#[default]
	Fold,
	/// Byte-for-byte comparison.
	Exact,
}

/// Member-specific match rule that supersedes every other criterion for that
/// member: when present, the member resolves through its override name or
/// not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideName {
	/// The sole token this member matches.
	pub name: String,
	/// Comparison mode, [`MatchMode::Fold`] by default.
	pub mode: MatchMode,
}

/// Metadata attached to a member after construction. All fields start empty
/// and each setter replaces its field wholesale (last call wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Settings {
	pub(crate) aliases: Vec<Value>,
	pub(crate) override_name: Option<OverrideName>,
	pub(crate) exposed_name: Option<String>,
}

/// One declared value of a registry.
///
/// A member's identity is the declaration key its registry stores it under;
/// the member itself carries the payload and the metadata settings.
#[derive(Debug, Clone)]
pub struct Member<E: Engine = Simple> {
	value: Value,
	settings: Settings,
	_engine: PhantomData<E>,
}

impl<E: Engine> Member<E> {
	pub(crate) fn new(def: MemberDef) -> Self {
		Self {
			value: def.value,
			settings: def.settings,
			_engine: PhantomData,
		}
	}

	/// Returns the member's payload.
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Returns the member's aliases, empty unless annotated.
	pub fn aliases(&self) -> &[Value] {
		&self.settings.aliases
	}

	/// Returns the member's override name, if annotated.
	pub fn override_name(&self) -> Option<&OverrideName> {
		self.settings.override_name.as_ref()
	}

	/// Returns the member's exposed display name, if annotated.
	pub fn exposed_name(&self) -> Option<&str> {
		self.settings.exposed_name.as_deref()
	}

	pub(crate) fn settings_mut(&mut self) -> &mut Settings {
		&mut self.settings
	}

	/// Match predicate for [`Registry::find`](crate::Registry::find).
	///
	/// An override name, when set, is the exclusive criterion. Otherwise the
	/// token matches through the declaration key (case-insensitive), the
	/// value (per the engine), or the alias list (case-sensitive).
	pub(crate) fn matches(&self, key: &str, token: &Value) -> bool {
		let text = token.text();
		if let Some(over) = &self.settings.override_name {
			return match over.mode {
				MatchMode::Exact => *text == *over.name,
				MatchMode::Fold => fold_eq(&text, &over.name),
			};
		}
		if fold_eq(&text, key) {
			return true;
		}
		if E::value_matches(&self.value, token) {
			return true;
		}
		self.settings
			.aliases
			.iter()
			.any(|alias| alias == token || *alias.text() == *text)
	}
}

impl<E: Engine> fmt::Display for Member<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		E::fmt_value(&self.value, f)
	}
}

/// A member serializes as its payload.
impl<E: Engine> Serialize for Member<E> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.value.serialize(serializer)
	}
}

impl Member<Structured> {
	/// Canonical JSON rendering of the member's value. Stable across calls.
	pub fn to_json(&self) -> String {
		self.value.to_json()
	}
}

/// Declaration-time description of a member: the payload plus optional
/// metadata, kept adjacent to the declaration through the fluent chain.
///
/// ```
/// use lexicon::{MatchMode, def};
///
/// let green = def("green").aliases(["grn"]).exposed_name("Green");
/// let blue = def("blue").override_name("Blue", MatchMode::Exact);
/// # let _ = (green, blue);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDef {
	pub(crate) value: Value,
	pub(crate) settings: Settings,
}

impl MemberDef {
	/// Creates a definition wrapping `value`, with empty settings.
	pub fn new(value: impl Into<Value>) -> Self {
		Self {
			value: value.into(),
			settings: Settings::default(),
		}
	}

	/// Sets the alias list.
	pub fn aliases<I>(mut self, aliases: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		self.settings.aliases = aliases.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the override name.
	pub fn override_name(mut self, name: impl Into<String>, mode: MatchMode) -> Self {
		self.settings.override_name = Some(OverrideName {
			name: name.into(),
			mode,
		});
		self
	}

	/// Sets the exposed display name.
	pub fn exposed_name(mut self, name: impl Into<String>) -> Self {
		self.settings.exposed_name = Some(name.into());
		self
	}
}

impl<T: Into<Value>> From<T> for MemberDef {
	fn from(value: T) -> Self {
		MemberDef::new(value)
	}
}

/// Shorthand for [`MemberDef::new`], for declaration sites.
pub fn def(value: impl Into<Value>) -> MemberDef {
	MemberDef::new(value)
}
