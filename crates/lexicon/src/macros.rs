//! Declaration macros for registries and record values.

/// Declares a registry as a lazily-initialized static, keeping member
/// declarations and their metadata adjacent.
///
/// The engine is named bare (`Simple` or `Structured`); each member is a
/// declaration key followed by a bare value or a [`def`](crate::def) chain.
///
/// ```
/// use lexicon::{MatchMode, def, registry};
///
/// registry! {
///     static COLORS: Simple {
///         RED => "red",
///         GREEN => def("green").aliases(["grn"]),
///         BLUE => def("blue").override_name("Blue", MatchMode::Exact),
///     }
/// }
///
/// assert!(COLORS.find("grn").is_some());
/// assert!(COLORS.find("blue").is_none());
/// ```
#[macro_export]
macro_rules! registry {
	($vis:vis static $name:ident: $engine:ident {
		$($key:ident => $def:expr),+ $(,)?
	}) => {
		$vis static $name: ::std::sync::LazyLock<$crate::Registry<$crate::$engine>> =
			::std::sync::LazyLock::new(|| {
				$crate::Registry::builder()
					$(.declare(stringify!($key), $def))+
					.build()
			});
	};
}

/// Builds a [`Record`](crate::Record) literal, preserving field order.
///
/// ```
/// use lexicon::record;
///
/// let status = record! { "id" => 1, "label" => "Active" };
/// assert_eq!(status.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
	() => {
		$crate::Record::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {{
		let mut record = $crate::Record::new();
		$(record.insert($name, $value);)+
		record
	}};
}
