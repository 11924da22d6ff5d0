//! Conversion helpers shared between the warning logic and the display.

use uom::si::f64::*;

/// Fixed conversion factor between meters and feet. All altitude handling
/// runs on this constant rather than a per-call derivation.
pub const FEET_PER_METER: f64 = 3.28;

/// Converts a metric altitude to feet at the input boundary. Altitudes are
/// stored in feet everywhere else.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// The Mach number for a given airspeed. No rounding is applied; callers
/// needing a human-facing decimal place round themselves.
pub fn knots_to_mach(speed: Velocity, mach_one: Velocity) -> Ratio {
    speed / mach_one
}
