use crate::{ListOptions, MatchMode, Registry, StructuredRegistry, Value, def, record};

fn statuses() -> StructuredRegistry {
	Registry::builder()
		.declare("ACTIVE", record! { "id" => 1, "label" => "Active" })
		.declare(
			"RETIRED",
			def(record! { "id" => 2, "label" => "Retired" }).aliases(["old"]),
		)
		.build()
}

#[test]
fn field_contents_resolve_the_member() {
	let statuses = statuses();
	assert_eq!(statuses.find("Active").unwrap().to_json(), r#"{"id":1,"label":"Active"}"#);
	assert_eq!(statuses.find("retired").unwrap().to_json(), r#"{"id":2,"label":"Retired"}"#);
	assert_eq!(statuses.find(2).unwrap().to_json(), r#"{"id":2,"label":"Retired"}"#);
}

#[test]
fn field_names_resolve_the_first_declared_member() {
	let statuses = statuses();
	// Both members carry a "label" field; declaration order breaks the tie.
	assert_eq!(statuses.find("label").unwrap().to_json(), r#"{"id":1,"label":"Active"}"#);
	assert_eq!(statuses.find("LABEL").unwrap().to_json(), r#"{"id":1,"label":"Active"}"#);
}

#[test]
fn keys_and_aliases_still_apply() {
	let statuses = statuses();
	assert!(statuses.find("ACTIVE").is_some());
	assert!(statuses.find("active").is_some());
	assert_eq!(statuses.find("old").unwrap().to_json(), r#"{"id":2,"label":"Retired"}"#);
	assert!(statuses.find("OLD").is_none());
	assert!(statuses.find("doesNotExist").is_none());
}

#[test]
fn override_is_exclusive_for_structured_members_too() {
	let registry: StructuredRegistry = Registry::builder()
		.declare(
			"ACTIVE",
			def(record! { "label" => "Active" }).override_name("Live", MatchMode::Exact),
		)
		.build();
	assert!(registry.find("Active").is_none());
	assert!(registry.find("label").is_none());
	assert!(registry.find("live").is_none());
	assert!(registry.find("Live").is_some());
}

#[test]
fn display_and_json_render_canonically_and_idempotently() {
	let statuses = statuses();
	let member = statuses.find("ACTIVE").unwrap();
	assert_eq!(member.to_string(), r#"{"id":1,"label":"Active"}"#);
	assert_eq!(member.to_json(), member.to_string());
	assert_eq!(member.to_json(), member.to_json());
}

#[test]
fn members_serialize_as_their_values() {
	let statuses = statuses();
	let member = statuses.get("RETIRED").unwrap();
	assert_eq!(
		serde_json::to_string(member).unwrap(),
		r#"{"id":2,"label":"Retired"}"#
	);
}

#[test]
fn listing_interleaves_scalar_aliases_with_record_values() {
	let statuses = statuses();
	let listed = statuses.values(ListOptions {
		include_aliases: true,
	});
	assert_eq!(listed.len(), 3);
	assert!(listed[0].as_record().is_some());
	assert!(listed[1].as_record().is_some());
	assert_eq!(listed[2], Value::Str("old".into()));
}
