use rand::rngs::ThreadRng;
use rand::Rng;
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::velocity::knot;

/// A source of raw cockpit readings. Each reading is independently callable;
/// how the values come about is the source's concern alone.
pub trait SensorSource {
    /// Barometric altitude in feet, capped at the given service ceiling.
    fn altitude(&mut self, ceiling: Length) -> Length;

    /// Indicated airspeed.
    fn computed_speed(&mut self) -> Velocity;

    /// Magnetic compass bearing in [0, 360).
    fn magnetic_heading(&mut self) -> Angle;
}

/// Simulated sensors backed by a thread-local RNG.
pub struct SimulatedSensors {
    rng: ThreadRng,
}

impl SimulatedSensors {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for SimulatedSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for SimulatedSensors {
    fn altitude(&mut self, ceiling: Length) -> Length {
        // 16 bit sensor word, capped at the service ceiling.
        let raw = f64::from(self.rng.gen_range(0..=u16::MAX));
        let altitude = Length::new::<foot>(raw);
        if altitude > ceiling {
            ceiling
        } else {
            altitude
        }
    }

    fn computed_speed(&mut self) -> Velocity {
        // 11 bit sensor word.
        let raw = f64::from(self.rng.gen_range(0u16..2_048));
        Velocity::new::<knot>(raw)
    }

    fn magnetic_heading(&mut self) -> Angle {
        Angle::new::<degree>(self.rng.gen_range(0.0..360.0))
    }
}
