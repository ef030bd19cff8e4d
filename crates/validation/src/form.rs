//! Submit-time validation of many fields at once.

use indexmap::IndexMap;
use serde::Serialize;

use crate::rule::ValidationResult;

/// Per-field outcomes of a form submission, in input order.
///
/// A field submitted more than once keeps its first failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormReport {
	fields: IndexMap<String, ValidationResult>,
}

impl FormReport {
	pub(crate) fn record(&mut self, field: &str, result: ValidationResult) {
		match self.fields.get_mut(field) {
			Some(existing) if !existing.is_valid() => {}
			Some(existing) => *existing = result,
			None => {
				self.fields.insert(field.to_string(), result);
			}
		}
	}

	/// `true` when no field failed.
	pub fn is_valid(&self) -> bool {
		self.fields.values().all(ValidationResult::is_valid)
	}

	pub fn get(&self, field: &str) -> Option<ValidationResult> {
		self.fields.get(field).copied()
	}

	/// Failing fields and their messages, in input order.
	pub fn errors(&self) -> impl Iterator<Item = (&str, &'static str)> {
		self.fields
			.iter()
			.filter_map(|(field, result)| result.message().map(|m| (field.as_str(), m)))
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}
