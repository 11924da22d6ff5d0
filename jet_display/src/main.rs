use std::thread;
use std::time::Duration;

use anyhow::Context;
use jet_systems::flight_warning::fuel::fuel_remaining;
use jet_systems::flight_warning::signals::JetSignalTable;
use jet_systems::flight_warning::JetFlightWarningComputerRuntime;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uom::si::f64::*;
use uom::si::mass::kilogram;
use uom::si::time::minute;

mod config;
mod display;
mod sensors;

use crate::config::SimulationConfig;
use crate::sensors::{SensorSource, SimulatedSensors};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SimulationConfig::from_env();
    let thresholds = config
        .thresholds()
        .context("refusing to start with an inconsistent threshold set")?;

    info!(
        ticks = config.ticks,
        initial_fuel_kg = config.initial_fuel_kg,
        burn_rate_kg_per_min = config.burn_rate_kg_per_min,
        "starting cockpit simulation"
    );

    let mut sensors = SimulatedSensors::new();
    let mut runtime = JetFlightWarningComputerRuntime::new();
    let initial_fuel = Mass::new::<kilogram>(config.initial_fuel_kg);
    let burn_rate_per_minute = Mass::new::<kilogram>(config.burn_rate_kg_per_min);

    for tick in 0..config.ticks {
        let elapsed = Time::new::<minute>(config.minutes_per_tick * f64::from(tick + 1));
        let fuel = fuel_remaining(initial_fuel, burn_rate_per_minute, elapsed);

        let signals = JetSignalTable::from_readings(
            sensors.altitude(thresholds.max_altitude()),
            sensors.computed_speed(),
            sensors.magnetic_heading(),
            fuel,
            &thresholds,
        );

        runtime.update(&signals, &thresholds);
        let report = runtime.report(&signals);
        debug!(
            tick,
            warnings = report.warnings().len(),
            degraded = report.is_degraded(),
            "warning cycle complete"
        );

        println!("{}", display::render(&report, thresholds.mach_one()));

        if tick + 1 < config.ticks {
            thread::sleep(Duration::from_millis(config.tick_interval_ms));
        }
    }

    info!("cockpit simulation finished");
    Ok(())
}
