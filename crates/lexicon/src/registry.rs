//! Ordered member registries with tolerant token lookup.

use core::marker::PhantomData;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::engine::{Engine, Simple, Structured};
use crate::error::Error;
use crate::member::{MatchMode, Member, MemberDef, OverrideName};
use crate::value::Value;

/// Listing options for [`Registry::values`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
	/// Follow each member's value with that member's aliases.
	pub include_aliases: bool,
}

/// An ordered enumeration registry: declaration key → [`Member`].
///
/// Declaration order is semantically meaningful. It is the tie-break for
/// [`find`](Registry::find) (first match wins) and the iteration order of
/// every listing operation.
///
/// A registry is built once, optionally annotated through the `set_*`
/// mutators, and read thereafter. Annotation requires `&mut self`, so the
/// setup-before-lookup contract is enforced by borrow rules; a shared
/// registry is immutable and safe for any number of concurrent readers.
#[derive(Debug, Clone)]
pub struct Registry<E: Engine = Simple> {
	members: IndexMap<Box<str>, Member<E>>,
}

/// Registry flavor whose members wrap [`Record`](crate::Record) values.
pub type StructuredRegistry = Registry<Structured>;

impl<E: Engine> Registry<E> {
	/// Starts a declaration-order builder.
	pub fn builder() -> Builder<E> {
		Builder {
			declarations: Vec::new(),
			_engine: PhantomData,
		}
	}

	/// Resolves a token to the first matching member in declaration order.
	///
	/// Returns `None` when nothing matches; no input is an error. Non-string
	/// tokens are compared best-effort through their canonical text.
	pub fn find(&self, token: impl Into<Value>) -> Option<&Member<E>> {
		let token = token.into();
		match self
			.members
			.iter()
			.find(|(key, member)| member.matches(key, &token))
		{
			Some((key, member)) => {
				trace!(%token, %key, "token resolved");
				Some(member)
			}
			None => {
				trace!(%token, "no member matched");
				None
			}
		}
	}

	/// Returns the member declared under exactly `key`.
	pub fn get(&self, key: &str) -> Option<&Member<E>> {
		self.members.get(key)
	}

	/// Returns member values in declaration order; with
	/// [`include_aliases`](ListOptions::include_aliases), each value is
	/// immediately followed by that member's aliases.
	pub fn values(&self, options: ListOptions) -> Vec<Value> {
		let mut out = Vec::with_capacity(self.members.len());
		for member in self.members.values() {
			out.push(member.value().clone());
			if options.include_aliases {
				out.extend(member.aliases().iter().cloned());
			}
		}
		out
	}

	/// Iterates members in declaration order.
	pub fn members(&self) -> impl Iterator<Item = &Member<E>> {
		self.members.values()
	}

	/// Iterates `(declaration key, member)` pairs in declaration order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, &Member<E>)> {
		self.members
			.iter()
			.map(|(key, member)| (key.as_ref(), member))
	}

	/// Returns display keys in declaration order: each member's exposed name
	/// when set, else its declaration key.
	pub fn keys(&self) -> Vec<&str> {
		self.entries()
			.map(|(key, member)| member.exposed_name().unwrap_or(key))
			.collect()
	}

	/// Returns the number of declared members.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true when no members are declared.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Replaces the alias list of the member declared under `key`.
	///
	/// Unknown keys are a no-op; annotation never fails.
	pub fn set_aliases<I>(&mut self, key: &str, aliases: I)
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		match self.members.get_mut(key) {
			Some(member) => {
				member.settings_mut().aliases = aliases.into_iter().map(Into::into).collect();
			}
			None => debug!(key, "alias annotation targets unknown member"),
		}
	}

	/// Replaces the override name of the member declared under `key`.
	pub fn set_override_name(&mut self, key: &str, name: impl Into<String>, mode: MatchMode) {
		match self.members.get_mut(key) {
			Some(member) => {
				member.settings_mut().override_name = Some(OverrideName {
					name: name.into(),
					mode,
				});
			}
			None => debug!(key, "override-name annotation targets unknown member"),
		}
	}

	/// Replaces the exposed display name of the member declared under `key`.
	pub fn set_exposed_name(&mut self, key: &str, name: impl Into<String>) {
		match self.members.get_mut(key) {
			Some(member) => member.settings_mut().exposed_name = Some(name.into()),
			None => debug!(key, "exposed-name annotation targets unknown member"),
		}
	}
}

/// Declaration-order registry builder.
///
/// Key uniqueness is the declaration site's responsibility: [`build`]
/// tolerates duplicates (the later definition wins, keeping the original
/// position), while [`try_build`] reports them.
///
/// [`build`]: Builder::build
/// [`try_build`]: Builder::try_build
pub struct Builder<E: Engine = Simple> {
	declarations: Vec<(Box<str>, MemberDef)>,
	_engine: PhantomData<E>,
}

impl<E: Engine> Builder<E> {
	/// Appends a member declaration. Accepts a bare value or a
	/// [`def`](crate::def) chain.
	pub fn declare(mut self, key: impl Into<Box<str>>, def: impl Into<MemberDef>) -> Self {
		self.declarations.push((key.into(), def.into()));
		self
	}

	/// Builds the registry, resolving duplicate keys in favor of the later
	/// declaration.
	pub fn build(self) -> Registry<E> {
		let mut members = IndexMap::with_capacity(self.declarations.len());
		for (key, def) in self.declarations {
			if members.contains_key(&key) {
				debug!(key = &*key, "duplicate declaration key, later definition wins");
			}
			members.insert(key, Member::new(def));
		}
		Registry { members }
	}

	/// Builds the registry, reporting the first duplicate key instead of
	/// resolving it.
	pub fn try_build(self) -> Result<Registry<E>, Error> {
		let mut members = IndexMap::with_capacity(self.declarations.len());
		for (key, def) in self.declarations {
			if members.contains_key(&key) {
				return Err(Error::DuplicateKey {
					key: key.into_string(),
				});
			}
			members.insert(key, Member::new(def));
		}
		Ok(Registry { members })
	}
}

impl<E: Engine> Default for Builder<E> {
	fn default() -> Self {
		Registry::builder()
	}
}
