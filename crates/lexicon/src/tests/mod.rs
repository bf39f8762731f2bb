//! Engine-level behavior tests.

mod annotation;
mod structured;

use crate::{MatchMode, Registry, def};

/// The shared fixture: three colors exercising keys, aliases, and an exact
/// override name.
pub(crate) fn colors() -> Registry {
	Registry::builder()
		.declare("RED", "red")
		.declare("GREEN", def("green").aliases(["grn"]))
		.declare("BLUE", def("blue").override_name("Blue", MatchMode::Exact))
		.build()
}
