use crate::error::UnitError;


/// Precision of every converted value.
pub const DECIMAL_PLACES: i32 = 2;

/// Mean diameter in µm of grains with ASTM number 1.
const ASTM_ONE_DIAMETER_UM: f64 = 254.0;

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
	let scale = 10f64.powi(places);
	(value * scale).round() / scale
}

/// ASTM grain-size number to mean grain diameter in µm.
pub fn astm_to_diameter(astm: f64) -> Result<f64, UnitError> {
	if !astm.is_finite() {
		return Err(UnitError::NonFinite(astm));
	}
	let diameter = ASTM_ONE_DIAMETER_UM / 2f64.powf((astm - 1.0) / 2.0);
	Ok(round_to(diameter, DECIMAL_PLACES))
}

/// Mean grain diameter in µm to ASTM grain-size number.
pub fn diameter_to_astm(diameter: f64) -> Result<f64, UnitError> {
	if !diameter.is_finite() {
		return Err(UnitError::NonFinite(diameter));
	}
	if diameter <= 0.0 {
		return Err(UnitError::NonPositiveDiameter(diameter));
	}
	let astm = 1.0 + 2.0 * (ASTM_ONE_DIAMETER_UM / diameter).log2();
	Ok(round_to(astm, DECIMAL_PLACES))
}
