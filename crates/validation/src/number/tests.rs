use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("5", 5.0)]
#[case("  12", 12.0)]
#[case("12  ", 12.0)]
#[case("\t3.5\n", 3.5)]
#[case("1e5", 100_000.0)]
#[case("1E-2", 0.01)]
#[case(".5", 0.5)]
#[case("5.", 5.0)]
#[case("+3", 3.0)]
#[case("-1", -1.0)]
#[case("-0.25", -0.25)]
#[case("0x10", 16.0)]
#[case("0o17", 15.0)]
#[case("0b101", 5.0)]
#[case("007", 7.0)]
#[case("\u{FEFF}12", 12.0)]
#[case("\u{A0}4\u{3000}", 4.0)]
#[case("\u{2028}2.5\u{2029}", 2.5)]
fn accepts_loose_numbers(#[case] input: &str, #[case] expected: f64) {
	assert_eq!(parse_number(input), Some(expected));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("abc")]
#[case("12abc")]
#[case("1_000")]
#[case("1,5")]
#[case("NaN")]
#[case("nan")]
#[case("inf")]
#[case("infinity")]
#[case("-0x10")]
#[case("0x")]
#[case("0xZZ")]
#[case(".")]
#[case("e5")]
#[case("1e")]
#[case("--1")]
#[case("1 2")]
#[case("\u{FEFF}")]
#[case("\u{85}5")]
#[case("5\u{85}")]
#[case("\u{180E}1")]
fn rejects_non_numbers(#[case] input: &str) {
	assert_eq!(parse_number(input), None);
}

#[test]
fn infinity_literal_is_case_sensitive() {
	assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
	assert_eq!(parse_number(" -Infinity "), Some(f64::NEG_INFINITY));
	assert_eq!(parse_number("+Infinity"), Some(f64::INFINITY));
	assert_eq!(parse_number("INFINITY"), None);
}

#[rstest]
#[case('\u{FEFF}', true)]
#[case('\u{B}', true)]
#[case('\u{202F}', true)]
#[case('\u{85}', false)]
#[case('\u{180E}', false)]
#[case('\u{200B}', false)]
fn loose_whitespace_set(#[case] c: char, #[case] expected: bool) {
	assert_eq!(is_loose_whitespace(c), expected, "{c:?}");
}

#[test]
fn trim_loose_keeps_next_line() {
	assert_eq!(trim_loose("\u{FEFF} x \u{FEFF}"), "x");
	assert_eq!(trim_loose("\u{85}x"), "\u{85}x");
}

#[test]
fn is_number_matches_parse() {
	assert!(is_number("1e5"));
	assert!(!is_number(""));
}

proptest! {
	#[test]
	fn never_yields_nan(s in "\\PC*") {
		if let Some(n) = parse_number(&s) {
			prop_assert!(!n.is_nan());
		}
	}

	#[test]
	fn finite_floats_parse_back(n in -1.0e12f64..1.0e12) {
		let rendered = n.to_string();
		prop_assert_eq!(parse_number(&rendered), Some(n));
	}
}
