use jet_systems::flight_warning::CockpitReport;
use systems::shared::knots_to_mach;
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::mass::kilogram;
use uom::si::ratio::ratio;
use uom::si::velocity::knot;

/// Above this Mach number the speed line switches from knots to Mach.
const MACH_DISPLAY_THRESHOLD: f64 = 0.8;

/// Renders one cockpit report as the text dashboard.
pub fn render(report: &CockpitReport, mach_one: Velocity) -> String {
    let mut out = String::new();

    out.push_str("=== DASHBOARD ===\n");
    out.push_str(&format!(
        "ALT:     {:.0} ft\n",
        report.altitude().get::<foot>()
    ));

    let mach = knots_to_mach(report.computed_speed(), mach_one).get::<ratio>();
    if mach >= MACH_DISPLAY_THRESHOLD {
        out.push_str(&format!("SPEED:   M {mach:.1}\n"));
    } else {
        out.push_str(&format!(
            "SPEED:   {:.0} kt\n",
            report.computed_speed().get::<knot>()
        ));
    }

    out.push_str(&format!(
        "HEADING: {:.0}°\n",
        report.magnetic_heading().get::<degree>()
    ));
    out.push_str(&format!(
        "FUEL:    {:.1} kg\n",
        report.fuel_on_board().get::<kilogram>()
    ));

    if report.is_degraded() {
        out.push_str("SENSORS: DEGRADED DATA\n");
    }

    if report.has_warnings() {
        let joined = report
            .warnings()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("WARNINGS: {joined}\n"));
    }

    out
}
