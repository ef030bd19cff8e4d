//! Constraint tables, one per form context.
//!
//! Tables are static data. Each maps a field name to its ordered
//! [`RuleSet`]; fields without an entry carry no rules and always validate.

use std::str::FromStr;

use tracing::debug;

use crate::error::ValidationError;
use crate::form::FormReport;
use crate::rule::{
	CARBON_LIMIT_RULE, NON_NEGATIVE, NOT_EMPTY, NUMERIC, Rule, RuleSet, ValidationResult, evaluate,
};

#[cfg(test)]
mod tests;

const WEIGHT_RULES: &RuleSet = &[NOT_EMPTY, NUMERIC, NON_NEGATIVE];
const CARBON_RULES: &RuleSet = &[NOT_EMPTY, NUMERIC, NON_NEGATIVE, CARBON_LIMIT_RULE];
const NAME_RULES: &RuleSet = &[NOT_EMPTY];

/// Immutable field → rules mapping for one form.
#[derive(Debug)]
pub struct ConstraintTable {
	name: &'static str,
	fields: &'static [(&'static str, &'static RuleSet)],
}

impl ConstraintTable {
	pub const fn new(name: &'static str, fields: &'static [(&'static str, &'static RuleSet)]) -> Self {
		Self { name, fields }
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Rules for `field`, or `None` if the table does not constrain it.
	pub fn rules(&self, field: &str) -> Option<&'static RuleSet> {
		self.fields
			.iter()
			.find(|(name, _)| *name == field)
			.map(|(_, rules)| *rules)
	}

	/// Constrained field names in definition order.
	pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.fields.iter().map(|(name, _)| *name)
	}

	/// Validates one value. Unknown fields are always valid.
	pub fn validate(&self, field: &str, value: &str) -> ValidationResult {
		match self.rules(field) {
			Some(rules) => evaluate(rules, value),
			None => ValidationResult::Valid,
		}
	}

	/// Validates a whole form submission, keeping input order.
	pub fn validate_form<'a, I>(&self, pairs: I) -> FormReport
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut report = FormReport::default();
		for (field, value) in pairs {
			report.record(field, self.validate(field, value));
		}
		report
	}
}

/// Generic alloy composition form.
pub static ALLOYS: ConstraintTable =
	ConstraintTable::new("alloys", &[("weight", WEIGHT_RULES), ("name", NAME_RULES)]);

/// Admin alloy editor, with the carbon upper bound.
pub static ADMIN_ALLOYS: ConstraintTable = ConstraintTable::new(
	"admin-alloys",
	&[("weight", WEIGHT_RULES), ("carbon", CARBON_RULES), ("name", NAME_RULES)],
);

/// User-owned alloy editor.
pub static USER_ALLOYS: ConstraintTable = ConstraintTable::new(
	"user-alloys",
	&[("weight", WEIGHT_RULES), ("carbon", CARBON_RULES), ("name", NAME_RULES)],
);

/// Identifies one of the built-in constraint tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
	Alloys,
	AdminAlloys,
	UserAlloys,
}

impl TableId {
	pub const ALL: [TableId; 3] = [TableId::Alloys, TableId::AdminAlloys, TableId::UserAlloys];

	pub fn table(self) -> &'static ConstraintTable {
		match self {
			TableId::Alloys => &ALLOYS,
			TableId::AdminAlloys => &ADMIN_ALLOYS,
			TableId::UserAlloys => &USER_ALLOYS,
		}
	}

	pub fn as_str(self) -> &'static str {
		self.table().name()
	}
}

impl FromStr for TableId {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TableId::ALL
			.into_iter()
			.find(|id| id.as_str() == s)
			.ok_or_else(|| ValidationError::UnknownTable(s.to_string()))
	}
}

impl core::fmt::Display for TableId {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Validates `value` for `field` in the table named `table`.
///
/// Never fails. An unknown table or field has no rules, so the value is
/// valid.
pub fn validate(table: &str, field: &str, value: &str) -> ValidationResult {
	match table.parse::<TableId>() {
		Ok(id) => id.table().validate(field, value),
		Err(_) => {
			debug!(table, field, "no constraint table; treating value as valid");
			ValidationResult::Valid
		}
	}
}

/// Rule list lookup across tables, for callers that render hints.
pub fn rules_for(table: TableId, field: &str) -> &'static [Rule] {
	table.table().rules(field).unwrap_or(&[])
}
