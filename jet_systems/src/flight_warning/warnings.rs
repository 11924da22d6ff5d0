use super::signals::*;
use super::thresholds::WarningThresholds;
use systems::flight_warning::parameters::Value;
use systems::flight_warning::warnings::WarningActivation;
use systems::shared::FEET_PER_METER;
use uom::si::length::foot;

pub(super) trait LowFuel {
    fn low_fuel(&self) -> bool;
}

#[derive(Default)]
pub(super) struct LowFuelActivation {
    low_fuel: bool,
}

impl LowFuelActivation {
    pub fn update(&mut self, signals: &impl FuelOnBoard, thresholds: &WarningThresholds) {
        self.low_fuel = signals.fuel_on_board().value() < thresholds.low_fuel();
    }
}

impl LowFuel for LowFuelActivation {
    fn low_fuel(&self) -> bool {
        self.low_fuel
    }
}

impl WarningActivation for LowFuelActivation {
    fn warning(&self) -> bool {
        self.low_fuel
    }
}

pub(super) trait Stall {
    fn stall(&self) -> bool;
}

#[derive(Default)]
pub(super) struct StallActivation {
    stall: bool,
}

impl StallActivation {
    pub fn update(&mut self, signals: &impl ComputedSpeed, thresholds: &WarningThresholds) {
        // Fires at or above the stall reference speed, not below it.
        self.stall = signals.computed_speed().value() >= thresholds.stall_speed();
    }
}

impl Stall for StallActivation {
    fn stall(&self) -> bool {
        self.stall
    }
}

impl WarningActivation for StallActivation {
    fn warning(&self) -> bool {
        self.stall
    }
}

pub(super) trait Terrain {
    fn terrain(&self) -> bool;
}

#[derive(Default)]
pub(super) struct TerrainActivation {
    terrain: bool,
}

impl TerrainActivation {
    pub fn update(&mut self, signals: &impl AltitudeParameter, thresholds: &WarningThresholds) {
        // The comparison runs on the meter-converted, rounded altitude.
        let converted_ft = (signals.altitude().value().get::<foot>() / FEET_PER_METER).round();
        self.terrain = converted_ft < thresholds.low_altitude_warning().get::<foot>();
    }
}

impl Terrain for TerrainActivation {
    fn terrain(&self) -> bool {
        self.terrain
    }
}

impl WarningActivation for TerrainActivation {
    fn warning(&self) -> bool {
        self.terrain
    }
}
