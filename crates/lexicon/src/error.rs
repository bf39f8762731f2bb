//! Registry construction errors.
//!
//! Lookup and annotation never fail; the only fallible surface is the
//! opt-in checked build path.

/// Errors surfaced by [`Builder::try_build`](crate::Builder::try_build).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// Two declarations used the same key.
	#[error("duplicate declaration key: {key:?}")]
	DuplicateKey {
		/// The key declared more than once.
		key: String,
	},
}
