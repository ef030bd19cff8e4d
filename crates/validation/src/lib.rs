//! Field validation for the alloy forms.
//!
//! A [`ConstraintTable`] maps field names to ordered rule lists. Validating a
//! value runs the rules in order and reports the first failing message:
//!
//! ```
//! use alloysim_validation::{validate, ValidationResult};
//!
//! assert_eq!(validate("admin-alloys", "carbon", "0.5"), ValidationResult::Valid);
//! assert_eq!(
//! 	validate("admin-alloys", "carbon", "abc").message(),
//! 	Some("Must be a number")
//! );
//! ```
//!
//! Rule order is load-bearing: the non-empty check runs before the numeric
//! check, which runs before any comparison.

pub mod error;
pub mod form;
pub mod number;
pub mod rule;
pub mod tables;

pub use error::ValidationError;
pub use form::FormReport;
pub use number::{is_loose_whitespace, is_number, parse_number, trim_loose};
pub use rule::{Rule, RuleCheck, RuleSet, ValidationResult, evaluate};
pub use tables::{ADMIN_ALLOYS, ALLOYS, ConstraintTable, TableId, USER_ALLOYS, rules_for, validate};
