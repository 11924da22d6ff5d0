use super::thresholds::WarningThresholds;
use systems::flight_warning::parameters::{SensorParameter, SensorValidity};
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::velocity::knot;

pub(super) trait AltitudeParameter {
    fn altitude(&self) -> &SensorParameter<Length>;
}

pub(super) trait ComputedSpeed {
    fn computed_speed(&self) -> &SensorParameter<Velocity>;
}

pub(super) trait MagneticHeading {
    fn magnetic_heading(&self) -> &SensorParameter<Angle>;
}

pub(super) trait FuelOnBoard {
    fn fuel_on_board(&self) -> &SensorParameter<Mass>;
}

/// The fixed-shape record of one acquisition cycle. A fresh table is built
/// per cycle and discarded once the report has been assembled.
#[derive(Default)]
pub struct JetSignalTable {
    altitude: SensorParameter<Length>,
    computed_speed: SensorParameter<Velocity>,
    magnetic_heading: SensorParameter<Angle>,
    fuel_on_board: SensorParameter<Mass>,
}

impl JetSignalTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds a table from raw readings, flagging anything outside its
    /// documented range as invalid. Out-of-range readings are carried, not
    /// rejected: the warning logic still evaluates them.
    pub fn from_readings(
        altitude: Length,
        computed_speed: Velocity,
        magnetic_heading: Angle,
        fuel_on_board: Mass,
        thresholds: &WarningThresholds,
    ) -> Self {
        let mut table = Self::new();

        let altitude_in_range =
            (Length::new::<foot>(0.0)..=thresholds.max_altitude()).contains(&altitude);
        table.set_altitude(if altitude_in_range {
            SensorParameter::new(altitude)
        } else {
            SensorParameter::new_inv(altitude)
        });

        let speed_in_range = computed_speed >= Velocity::new::<knot>(0.0);
        table.set_computed_speed(if speed_in_range {
            SensorParameter::new(computed_speed)
        } else {
            SensorParameter::new_inv(computed_speed)
        });

        let heading_deg = magnetic_heading.get::<degree>();
        table.set_magnetic_heading(if (0.0..360.0).contains(&heading_deg) {
            SensorParameter::new(magnetic_heading)
        } else {
            SensorParameter::new_inv(magnetic_heading)
        });

        // A negative fuel quantity is a legitimate derived value, so the
        // fuel signal is always taken as-is.
        table.set_fuel_on_board(SensorParameter::new(fuel_on_board));

        table
    }

    pub fn set_altitude(&mut self, altitude: SensorParameter<Length>) {
        self.altitude = altitude;
    }

    pub fn set_computed_speed(&mut self, computed_speed: SensorParameter<Velocity>) {
        self.computed_speed = computed_speed;
    }

    pub fn set_magnetic_heading(&mut self, magnetic_heading: SensorParameter<Angle>) {
        self.magnetic_heading = magnetic_heading;
    }

    pub fn set_fuel_on_board(&mut self, fuel_on_board: SensorParameter<Mass>) {
        self.fuel_on_board = fuel_on_board;
    }

    pub fn all_val(&self) -> bool {
        self.altitude.is_val()
            && self.computed_speed.is_val()
            && self.magnetic_heading.is_val()
            && self.fuel_on_board.is_val()
    }
}

impl AltitudeParameter for JetSignalTable {
    fn altitude(&self) -> &SensorParameter<Length> {
        &self.altitude
    }
}

impl ComputedSpeed for JetSignalTable {
    fn computed_speed(&self) -> &SensorParameter<Velocity> {
        &self.computed_speed
    }
}

impl MagneticHeading for JetSignalTable {
    fn magnetic_heading(&self) -> &SensorParameter<Angle> {
        &self.magnetic_heading
    }
}

impl FuelOnBoard for JetSignalTable {
    fn fuel_on_board(&self) -> &SensorParameter<Mass> {
        &self.fuel_on_board
    }
}
