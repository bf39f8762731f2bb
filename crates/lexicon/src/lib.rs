//! Enumeration registries with tolerant string lookup.
//!
//! A registry fixes an ordered set of named members at load time, then
//! resolves loosely-formatted external tokens (config values, CLI flags, API
//! payloads) back to them, tolerating case differences, aliases, and custom
//! display names.
//!
//! Two flavors share one contract:
//! - [`Registry`] (the [`Simple`] engine) for members wrapping scalar
//!   [`Value`]s,
//! - [`StructuredRegistry`] for members wrapping [`Record`] values, which
//!   additionally matches tokens against a record's own field names and
//!   contents and renders members as canonical JSON.
//!
//! # Example
//!
//! ```
//! use lexicon::{MatchMode, def, registry};
//!
//! registry! {
//!     static COLORS: Simple {
//!         RED => "red",
//!         GREEN => def("green").aliases(["grn"]),
//!         BLUE => def("blue").override_name("Blue", MatchMode::Exact),
//!     }
//! }
//!
//! assert_eq!(COLORS.find("RED").map(ToString::to_string), Some("red".into()));
//! assert_eq!(COLORS.find("grn").map(ToString::to_string), Some("green".into()));
//! // The exact override is the sole criterion for BLUE.
//! assert!(COLORS.find("blue").is_none());
//! assert!(COLORS.find("Blue").is_some());
//! ```
//!
//! # Contract
//!
//! - Lookup never fails: a miss is `None`, malformed input degrades to "no
//!   match".
//! - Declaration order is meaningful: it is the lookup tie-break and the
//!   order of every listing operation.
//! - Annotation (`set_aliases`, `set_override_name`, `set_exposed_name`)
//!   takes `&mut Registry` and must complete before lookups begin; a shared
//!   registry is immutable and safe for concurrent readers.

mod engine;
mod error;
mod macros;
mod member;
mod registry;
mod value;

#[cfg(test)]
mod tests;

pub use engine::{Engine, Simple, Structured};
pub use error::Error;
pub use member::{MatchMode, Member, MemberDef, OverrideName, def};
pub use registry::{Builder, ListOptions, Registry, StructuredRegistry};
pub use value::{Record, Value};
