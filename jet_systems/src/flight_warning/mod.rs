use std::fmt::{Display, Formatter};

use signals::*;
use systems::flight_warning::parameters::Value;
use systems::flight_warning::warnings::WarningActivation;
use thresholds::WarningThresholds;
use uom::si::f64::*;
use warnings::*;

pub mod fuel;
pub mod signals;
pub mod thresholds;
pub mod warnings;


/// The warnings the jet's flight warning computer can raise. A cycle reports
/// them in evaluation order: low fuel, then stall, then terrain.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum WarningCode {
    LowFuel,
    Stall,
    Terrain,
}

impl Display for WarningCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningCode::LowFuel => write!(f, "LOW FUEL"),
            WarningCode::Stall => write!(f, "STALL"),
            WarningCode::Terrain => write!(f, "TERRAIN"),
        }
    }
}

/// The structured outcome of one warning cycle, handed to the display for
/// rendering. The computer defines no text formatting of its own.
pub struct CockpitReport {
    altitude: Length,
    computed_speed: Velocity,
    magnetic_heading: Angle,
    fuel_on_board: Mass,
    degraded: bool,
    warnings: Vec<WarningCode>,
}

impl CockpitReport {
    pub fn altitude(&self) -> Length {
        self.altitude
    }

    pub fn computed_speed(&self) -> Velocity {
        self.computed_speed
    }

    pub fn magnetic_heading(&self) -> Angle {
        self.magnetic_heading
    }

    pub fn fuel_on_board(&self) -> Mass {
        self.fuel_on_board
    }

    /// True when at least one signal of the cycle was outside its documented
    /// range.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn warnings(&self) -> &[WarningCode] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// This struct represents a simulation of the software runtime that is
/// executed on the jet's flight warning computer. Its task is to take the
/// acquired signals, run the warning logic and assemble the cockpit report.
#[derive(Default)]
pub struct JetFlightWarningComputerRuntime {
    low_fuel: LowFuelActivation,
    stall: StallActivation,
    terrain: TerrainActivation,
}

impl JetFlightWarningComputerRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one warning cycle against the given signals and thresholds.
    pub fn update(&mut self, signals: &JetSignalTable, thresholds: &WarningThresholds) {
        // The order is fixed: fuel, then stall, then terrain.
        self.low_fuel.update(signals, thresholds);
        self.stall.update(signals, thresholds);
        self.terrain.update(signals, thresholds);
    }

    /// The warnings raised by the last cycle, in evaluation order and free of
    /// duplicates by construction.
    pub fn warnings(&self) -> Vec<WarningCode> {
        let mut warnings = Vec::new();
        if self.low_fuel.warning() {
            warnings.push(WarningCode::LowFuel);
        }
        if self.stall.warning() {
            warnings.push(WarningCode::Stall);
        }
        if self.terrain.warning() {
            warnings.push(WarningCode::Terrain);
        }
        warnings
    }

    /// Assembles the report for the signals of the last cycle.
    pub fn report(&self, signals: &JetSignalTable) -> CockpitReport {
        CockpitReport {
            altitude: signals.altitude().value(),
            computed_speed: signals.computed_speed().value(),
            magnetic_heading: signals.magnetic_heading().value(),
            fuel_on_board: signals.fuel_on_board().value(),
            degraded: !signals.all_val(),
            warnings: self.warnings(),
        }
    }
}
