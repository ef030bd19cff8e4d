use thiserror::Error;

/// Errors raised when resolving constraint tables by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
	#[error("unknown constraint table: {0}")]
	UnknownTable(String),
}
