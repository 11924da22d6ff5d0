use std::env;

use jet_systems::flight_warning::thresholds::{ThresholdError, WarningThresholds};
use tracing::warn;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::mass::kilogram;
use uom::si::velocity::knot;

/// Host configuration, read once at startup. Every value can be overridden
/// through a `JET_*` environment variable; unparsable values fall back to the
/// default with a logged warning, inconsistent thresholds abort startup.
pub struct SimulationConfig {
    pub initial_fuel_kg: f64,
    pub burn_rate_kg_per_min: f64,
    pub minutes_per_tick: f64,
    pub tick_interval_ms: u64,
    pub ticks: u32,
    mach_one_kt: f64,
    max_speed_kt: f64,
    low_fuel_kg: f64,
    max_altitude_ft: f64,
    stall_speed_kt: f64,
    low_altitude_warning_ft: f64,
}

impl SimulationConfig {
    pub fn from_env() -> Self {
        Self {
            initial_fuel_kg: env_f64("JET_INITIAL_FUEL_KG", 3_500.0),
            burn_rate_kg_per_min: env_f64("JET_BURN_RATE_KG_PER_MIN", 18.0),
            minutes_per_tick: env_f64("JET_MINUTES_PER_TICK", 5.0),
            tick_interval_ms: env_u64("JET_TICK_INTERVAL_MS", 1_000),
            ticks: env_u32("JET_TICKS", 10),
            mach_one_kt: env_f64("JET_MACH_ONE_KT", 667.0),
            max_speed_kt: env_f64("JET_MAX_SPEED_KT", 1_500.0),
            low_fuel_kg: env_f64("JET_LOW_FUEL_KG", 500.0),
            max_altitude_ft: env_f64("JET_MAX_ALTITUDE_FT", 15_240.0),
            stall_speed_kt: env_f64("JET_STALL_SPEED_KT", 120.0),
            low_altitude_warning_ft: env_f64("JET_LOW_ALTITUDE_WARNING_FT", 500.0),
        }
    }

    /// The validated threshold set for this run.
    pub fn thresholds(&self) -> Result<WarningThresholds, ThresholdError> {
        WarningThresholds::new(
            Velocity::new::<knot>(self.mach_one_kt),
            Velocity::new::<knot>(self.max_speed_kt),
            Mass::new::<kilogram>(self.low_fuel_kg),
            Length::new::<foot>(self.max_altitude_ft),
            Velocity::new::<knot>(self.stall_speed_kt),
            Length::new::<foot>(self.low_altitude_warning_ft),
        )
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    env_parsed(key, default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env_parsed(key, default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env_parsed(key, default)
}

fn env_parsed<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("ignoring unparsable {key}={raw}, falling back to {default}");
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_validate() {
        let config = SimulationConfig::from_env();
        assert!(config.thresholds().is_ok());
    }
}
