use thiserror::Error;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::mass::kilogram;
use uom::si::velocity::knot;

#[derive(Debug, Error)]
pub enum ThresholdError {
    #[error("threshold `{name}` must be strictly positive")]
    NonPositive { name: &'static str },
    #[error("stall reference speed ({stall_kt} kt) must stay below the maximum operating speed ({max_kt} kt)")]
    StallSpeedAtOrAboveMaxSpeed { stall_kt: f64, max_kt: f64 },
    #[error("low altitude warning floor ({floor_ft} ft) must stay below the service ceiling ({ceiling_ft} ft)")]
    WarningFloorAtOrAboveCeiling { floor_ft: f64, ceiling_ft: f64 },
}

/// The set of limits the warning computer evaluates against. Built and
/// validated once at startup, then passed by reference into every cycle, so
/// tests can run with alternate sets without touching shared state.
#[derive(Clone, Debug)]
pub struct WarningThresholds {
    mach_one: Velocity,
    max_speed: Velocity,
    low_fuel: Mass,
    max_altitude: Length,
    stall_speed: Velocity,
    low_altitude_warning: Length,
}

impl WarningThresholds {
    pub fn new(
        mach_one: Velocity,
        max_speed: Velocity,
        low_fuel: Mass,
        max_altitude: Length,
        stall_speed: Velocity,
        low_altitude_warning: Length,
    ) -> Result<Self, ThresholdError> {
        let thresholds = Self {
            mach_one,
            max_speed,
            low_fuel,
            max_altitude,
            stall_speed,
            low_altitude_warning,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    fn validate(&self) -> Result<(), ThresholdError> {
        let positive = [
            ("mach_one", self.mach_one.get::<knot>()),
            ("max_speed", self.max_speed.get::<knot>()),
            ("low_fuel", self.low_fuel.get::<kilogram>()),
            ("max_altitude", self.max_altitude.get::<foot>()),
            ("stall_speed", self.stall_speed.get::<knot>()),
            (
                "low_altitude_warning",
                self.low_altitude_warning.get::<foot>(),
            ),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ThresholdError::NonPositive { name });
            }
        }

        if self.stall_speed >= self.max_speed {
            return Err(ThresholdError::StallSpeedAtOrAboveMaxSpeed {
                stall_kt: self.stall_speed.get::<knot>(),
                max_kt: self.max_speed.get::<knot>(),
            });
        }

        if self.low_altitude_warning >= self.max_altitude {
            return Err(ThresholdError::WarningFloorAtOrAboveCeiling {
                floor_ft: self.low_altitude_warning.get::<foot>(),
                ceiling_ft: self.max_altitude.get::<foot>(),
            });
        }

        Ok(())
    }

    pub fn mach_one(&self) -> Velocity {
        self.mach_one
    }

    pub fn max_speed(&self) -> Velocity {
        self.max_speed
    }

    pub fn low_fuel(&self) -> Mass {
        self.low_fuel
    }

    pub fn max_altitude(&self) -> Length {
        self.max_altitude
    }

    pub fn stall_speed(&self) -> Velocity {
        self.stall_speed
    }

    pub fn low_altitude_warning(&self) -> Length {
        self.low_altitude_warning
    }
}

impl Default for WarningThresholds {
    /// The reference limits of the simulated jet.
    fn default() -> Self {
        Self {
            mach_one: Velocity::new::<knot>(667.0),
            max_speed: Velocity::new::<knot>(1_500.0),
            low_fuel: Mass::new::<kilogram>(500.0),
            max_altitude: Length::new::<foot>(15_240.0),
            stall_speed: Velocity::new::<knot>(120.0),
            low_altitude_warning: Length::new::<foot>(500.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn default_parts() -> (Velocity, Velocity, Mass, Length, Velocity, Length) {
        let thresholds = WarningThresholds::default();
        (
            thresholds.mach_one(),
            thresholds.max_speed(),
            thresholds.low_fuel(),
            thresholds.max_altitude(),
            thresholds.stall_speed(),
            thresholds.low_altitude_warning(),
        )
    }

    #[test]
    fn default_thresholds_pass_validation() {
        let (mach_one, max_speed, low_fuel, max_altitude, stall_speed, low_altitude_warning) =
            default_parts();
        assert!(WarningThresholds::new(
            mach_one,
            max_speed,
            low_fuel,
            max_altitude,
            stall_speed,
            low_altitude_warning,
        )
        .is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-500.0)]
    fn rejects_non_positive_low_fuel(#[case] low_fuel_kg: f64) {
        let (mach_one, max_speed, _, max_altitude, stall_speed, low_altitude_warning) =
            default_parts();
        let result = WarningThresholds::new(
            mach_one,
            max_speed,
            Mass::new::<kilogram>(low_fuel_kg),
            max_altitude,
            stall_speed,
            low_altitude_warning,
        );
        assert!(matches!(
            result,
            Err(ThresholdError::NonPositive { name: "low_fuel" })
        ));
    }

    #[test]
    fn rejects_stall_speed_at_max_speed() {
        let (mach_one, max_speed, low_fuel, max_altitude, _, low_altitude_warning) =
            default_parts();
        let result = WarningThresholds::new(
            mach_one,
            max_speed,
            low_fuel,
            max_altitude,
            max_speed,
            low_altitude_warning,
        );
        assert!(matches!(
            result,
            Err(ThresholdError::StallSpeedAtOrAboveMaxSpeed { .. })
        ));
    }

    #[test]
    fn rejects_warning_floor_above_ceiling() {
        let (mach_one, max_speed, low_fuel, max_altitude, stall_speed, _) = default_parts();
        let result = WarningThresholds::new(
            mach_one,
            max_speed,
            low_fuel,
            max_altitude,
            stall_speed,
            max_altitude + Length::new::<foot>(1.0),
        );
        assert!(matches!(
            result,
            Err(ThresholdError::WarningFloorAtOrAboveCeiling { .. })
        ));
    }

    #[test]
    fn accepts_a_stricter_alternate_set() {
        let result = WarningThresholds::new(
            Velocity::new::<knot>(661.0),
            Velocity::new::<knot>(900.0),
            Mass::new::<kilogram>(1_000.0),
            Length::new::<foot>(40_000.0),
            Velocity::new::<knot>(140.0),
            Length::new::<foot>(1_000.0),
        );
        assert!(result.is_ok());
    }
}
