//! Rules, rule sets and validation results.

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::number::{parse_number, trim_loose};


/// Predicate over raw input. Must be total: any string, including `""`.
pub type RuleCheck = fn(&str) -> bool;

/// Ordered rules for one field. The first failing rule wins.
pub type RuleSet = [Rule];

/// A predicate plus the message reported when it returns `false`.
#[derive(Clone, Copy)]
pub struct Rule {
	pub check: RuleCheck,
	pub message: &'static str,
}

impl Rule {
	pub const fn new(check: RuleCheck, message: &'static str) -> Self {
		Self { check, message }
	}

	/// Returns `true` when `value` satisfies this rule.
	#[inline]
	pub fn passes(&self, value: &str) -> bool {
		(self.check)(value)
	}
}

impl core::fmt::Debug for Rule {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Rule").field("message", &self.message).finish()
	}
}

/// Outcome of validating one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
	Valid,
	Invalid { message: &'static str },
}

impl ValidationResult {
	pub fn is_valid(&self) -> bool {
		matches!(self, Self::Valid)
	}

	/// The failing rule's message, or `None` when valid.
	pub fn message(&self) -> Option<&'static str> {
		match self {
			Self::Valid => None,
			Self::Invalid { message } => Some(*message),
		}
	}
}

/// Serializes as `{ "valid": bool, "message": string | null }`.
impl Serialize for ValidationResult {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut s = serializer.serialize_struct("ValidationResult", 2)?;
		s.serialize_field("valid", &self.is_valid())?;
		s.serialize_field("message", &self.message())?;
		s.end()
	}
}

/// Runs `rules` in order against `value`, stopping at the first failure.
pub fn evaluate(rules: &RuleSet, value: &str) -> ValidationResult {
	rules
		.iter()
		.find(|rule| !rule.passes(value))
		.map_or(ValidationResult::Valid, |rule| ValidationResult::Invalid {
			message: rule.message,
		})
}

pub const EMPTY_MESSAGE: &str = "Can't be empty";
pub const NOT_A_NUMBER_MESSAGE: &str = "Must be a number";
pub const NEGATIVE_MESSAGE: &str = "Can't be negative";
pub const CARBON_LIMIT_MESSAGE: &str = "Carbon can't be more than 0.8 wt%";

/// Upper bound for carbon content in weight percent.
pub const CARBON_LIMIT: f64 = 0.8;

pub fn not_empty(value: &str) -> bool {
	!trim_loose(value).is_empty()
}

pub fn numeric(value: &str) -> bool {
	parse_number(value).is_some()
}

/// Must run after [`numeric`]; a non-number is treated as failing.
pub fn non_negative(value: &str) -> bool {
	parse_number(value).is_some_and(|n| n >= 0.0)
}

/// Must run after [`numeric`]; a non-number is treated as failing.
pub fn within_carbon_limit(value: &str) -> bool {
	parse_number(value).is_some_and(|n| n <= CARBON_LIMIT)
}

pub const NOT_EMPTY: Rule = Rule::new(not_empty, EMPTY_MESSAGE);
pub const NUMERIC: Rule = Rule::new(numeric, NOT_A_NUMBER_MESSAGE);
pub const NON_NEGATIVE: Rule = Rule::new(non_negative, NEGATIVE_MESSAGE);
pub const CARBON_LIMIT_RULE: Rule = Rule::new(within_carbon_limit, CARBON_LIMIT_MESSAGE);
