/// Base units (MIST) per display unit (SUI).
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Convert a base-unit balance to the display unit. The integer balance
/// itself is never rounded; only this view of it is fractional.
pub fn from_unit(mist: u64) -> f64 {
	mist as f64 / MIST_PER_SUI as f64
}
