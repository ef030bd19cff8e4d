use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::rule::{CARBON_LIMIT_MESSAGE, EMPTY_MESSAGE, NEGATIVE_MESSAGE, NOT_A_NUMBER_MESSAGE};

fn all_fields() -> Vec<(TableId, &'static str)> {
	TableId::ALL
		.into_iter()
		.flat_map(|id| id.table().fields().map(move |f| (id, f)))
		.collect()
}

fn numeric_fields() -> Vec<(TableId, &'static str)> {
	all_fields().into_iter().filter(|(_, f)| *f != "name").collect()
}

#[test]
fn every_field_rejects_blank_input() {
	for (id, field) in all_fields() {
		for blank in ["", "   ", "\t\n", "\u{FEFF}", "\u{A0}\u{2028}"] {
			assert_eq!(
				validate(id.as_str(), field, blank).message(),
				Some(EMPTY_MESSAGE),
				"{id}.{field} with {blank:?}"
			);
		}
	}
}

#[rstest]
#[case("\u{FEFF}12", None)]
#[case("\u{85}5", Some(NOT_A_NUMBER_MESSAGE))]
#[case("\u{85}", Some(NOT_A_NUMBER_MESSAGE))]
fn weight_uses_loose_whitespace(#[case] value: &str, #[case] expected: Option<&str>) {
	assert_eq!(validate("alloys", "weight", value).message(), expected);
}

#[test]
fn numeric_fields_follow_rule_order() {
	for (id, field) in numeric_fields() {
		let table = id.as_str();
		assert_eq!(validate(table, field, "abc").message(), Some(NOT_A_NUMBER_MESSAGE));
		assert_eq!(validate(table, field, "-1").message(), Some(NEGATIVE_MESSAGE));
		assert!(validate(table, field, "0").is_valid(), "{id}.{field}");
		assert!(validate(table, field, " 0.5 ").is_valid(), "{id}.{field}");
	}
}

#[rstest]
#[case("alloys", "weight", "5")]
#[case("alloys", "weight", "1e5")]
#[case("alloys", "weight", "  12")]
#[case("alloys", "name", "Fe-C eutectoid")]
#[case("admin-alloys", "weight", "5")]
#[case("admin-alloys", "carbon", "0.5")]
#[case("admin-alloys", "carbon", "0.8")]
#[case("user-alloys", "carbon", "0")]
#[case("user-alloys", "name", "x")]
fn valid_inputs(#[case] table: &str, #[case] field: &str, #[case] value: &str) {
	assert_eq!(validate(table, field, value), ValidationResult::Valid);
}

#[rstest]
#[case("admin-alloys", "0.9")]
#[case("admin-alloys", "1e3")]
#[case("admin-alloys", "Infinity")]
#[case("user-alloys", "0.81")]
fn carbon_upper_bound(#[case] table: &str, #[case] value: &str) {
	assert_eq!(validate(table, "carbon", value).message(), Some(CARBON_LIMIT_MESSAGE));
}

#[test]
fn carbon_negative_reports_negative_not_bound() {
	assert_eq!(validate("admin-alloys", "carbon", "-0.1").message(), Some(NEGATIVE_MESSAGE));
}

#[test]
fn name_only_requires_content() {
	assert!(validate("alloys", "name", "-1").is_valid());
	assert!(validate("alloys", "name", "abc").is_valid());
}

#[test]
fn plain_alloys_table_has_no_carbon_rule() {
	assert!(ALLOYS.rules("carbon").is_none());
	assert!(validate("alloys", "carbon", "").is_valid());
}

#[test]
fn unknown_field_and_table_are_valid() {
	assert!(validate("alloys", "manganese", "").is_valid());
	assert!(validate("no-such-table", "weight", "abc").is_valid());
	assert!(rules_for(TableId::Alloys, "manganese").is_empty());
}

#[test]
fn table_ids_parse_from_names() {
	assert_eq!("admin-alloys".parse::<TableId>(), Ok(TableId::AdminAlloys));
	assert_eq!(
		"alloy".parse::<TableId>(),
		Err(ValidationError::UnknownTable("alloy".to_string()))
	);
	for id in TableId::ALL {
		assert_eq!(id.to_string().parse::<TableId>(), Ok(id));
	}
}

#[test]
fn form_report_collects_failures_in_order() {
	let report = ADMIN_ALLOYS.validate_form([
		("name", ""),
		("weight", "2"),
		("carbon", "0.95"),
		("silicon", "?"),
	]);

	assert!(!report.is_valid());
	assert_eq!(report.len(), 4);
	assert_eq!(
		report.errors().collect::<Vec<_>>(),
		vec![("name", EMPTY_MESSAGE), ("carbon", CARBON_LIMIT_MESSAGE)]
	);
	assert_eq!(report.get("silicon"), Some(ValidationResult::Valid));
}

#[test]
fn form_report_keeps_first_failure_for_repeated_field() {
	let report = ALLOYS.validate_form([("weight", "x"), ("weight", "-1"), ("weight", "3")]);
	assert_eq!(report.get("weight").and_then(|r| r.message()), Some(NOT_A_NUMBER_MESSAGE));
}

#[test]
fn empty_form_is_valid() {
	let report = USER_ALLOYS.validate_form(std::iter::empty());
	assert!(report.is_valid());
	assert!(report.is_empty());
}

proptest! {
	#[test]
	fn rules_are_total(s in "\\PC*") {
		for (id, field) in all_fields() {
			let _ = validate(id.as_str(), field, &s);
		}
	}

	#[test]
	fn whitespace_only_always_empty(s in "[ \t\n\r]*") {
		for (id, field) in all_fields() {
			prop_assert_eq!(validate(id.as_str(), field, &s).message(), Some(EMPTY_MESSAGE));
		}
	}

	#[test]
	fn non_negative_numbers_pass_weight(n in 0.0f64..1.0e9) {
		prop_assert!(validate("alloys", "weight", &n.to_string()).is_valid());
	}
}
