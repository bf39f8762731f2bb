use super::colors;
use crate::{MatchMode, Value};

#[test]
fn aliases_can_be_attached_after_construction() {
	let mut colors = colors();
	colors.set_aliases("RED", ["r", "rouge"]);
	assert_eq!(colors.find("rouge").unwrap().to_string(), "red");
	assert_eq!(colors.get("RED").unwrap().aliases().len(), 2);
}

#[test]
fn alias_replacement_is_wholesale() {
	let mut colors = colors();
	colors.set_aliases("GREEN", ["g"]);
	assert_eq!(colors.get("GREEN").unwrap().aliases(), &[Value::Str("g".into())]);
	assert!(colors.find("grn").is_none());
	assert!(colors.find("g").is_some());
}

#[test]
fn override_name_replacement_wins_last() {
	let mut colors = colors();
	colors.set_override_name("BLUE", "Azure", MatchMode::Fold);
	assert!(colors.find("Blue").is_none());
	assert!(colors.find("azure").is_some());
}

#[test]
fn exposed_name_substitutes_the_declaration_key() {
	let mut colors = colors();
	colors.set_exposed_name("GREEN", "Verde");
	assert_eq!(colors.keys(), vec!["RED", "Verde", "BLUE"]);
	// Exposed names affect listing only, not lookup.
	assert!(colors.find("Verde").is_none());
	assert!(colors.find("GREEN").is_some());
}

#[test]
fn annotating_an_unknown_key_is_a_no_op() {
	let mut colors = colors();
	colors.set_aliases("MAGENTA", ["m"]);
	colors.set_override_name("MAGENTA", "Magenta", MatchMode::Exact);
	colors.set_exposed_name("MAGENTA", "Magenta");
	assert_eq!(colors.len(), 3);
	assert!(colors.find("m").is_none());
}
