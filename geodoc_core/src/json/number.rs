use serde_json::Value;

/// Rounds `value` to `precision` decimal places; `None` keeps it unchanged.
///
/// Values too large to be scaled by `10^precision` already have no fractional digits
/// at that precision and are returned as they are.
#[must_use]
pub fn round_to_precision(value: f64, precision: Option<u8>) -> f64 {
	match precision {
		Some(prec) => {
			let factor = 10f64.powi(i32::from(prec));
			let scaled = value * factor;
			if scaled.is_finite() {
				scaled.round() / factor
			} else {
				value
			}
		}
		None => value,
	}
}

/// Converts a list of numbers into a JSON array, rounding each to `precision`.
///
/// Non-finite values become `null`, as JSON has no representation for them.
#[must_use]
pub fn numbers_to_json(values: &[f64], precision: Option<u8>) -> Value {
	Value::Array(
		values
			.iter()
			.map(|v| Value::from(round_to_precision(*v, precision)))
			.collect(),
	)
}
