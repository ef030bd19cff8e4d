use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum UnitError {
	#[error("value must be finite, got {0}")]
	NonFinite(f64),

	#[error("grain diameter must be positive, got {0}")]
	NonPositiveDiameter(f64),
}
