use uom::si::f64::*;
use uom::si::time::minute;

/// Estimates the fuel remaining after burning for the given elapsed time.
///
/// The burn rate is specified per minute and the consumed amount scales with
/// the elapsed fraction of an hour; the rate is never multiplied directly by
/// elapsed minutes. The result is deliberately not floored at zero: a
/// negative remainder is a boundary condition the warning logic handles.
pub fn fuel_remaining(initial_fuel: Mass, burn_rate_per_minute: Mass, elapsed: Time) -> Mass {
    let consumed = burn_rate_per_minute * (elapsed.get::<minute>() / 60.0);
    initial_fuel - consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uom::si::mass::kilogram;

    fn fuel_remaining_kg(initial_kg: f64, rate_kg: f64, elapsed_min: f64) -> f64 {
        fuel_remaining(
            Mass::new::<kilogram>(initial_kg),
            Mass::new::<kilogram>(rate_kg),
            Time::new::<minute>(elapsed_min),
        )
        .get::<kilogram>()
    }

    #[test]
    fn a_full_hour_burns_exactly_one_rate_unit() {
        assert_eq!(fuel_remaining_kg(1_000.0, 10.0, 60.0), 990.0);
    }

    #[test]
    fn nothing_is_burnt_at_zero_elapsed_time() {
        assert_eq!(fuel_remaining_kg(3_500.0, 18.0, 0.0), 3_500.0);
    }

    #[test]
    fn fifty_minutes_burn_five_sixths_of_the_rate() {
        let remaining = fuel_remaining_kg(1_000.0, 10.0, 50.0);
        assert!((remaining - (1_000.0 - 10.0 * 50.0 / 60.0)).abs() < 1e-9);
    }

    #[rstest]
    #[case(30.0)]
    #[case(90.0)]
    #[case(240.0)]
    fn consumption_is_linear_in_elapsed_time(#[case] elapsed_min: f64) {
        let single = fuel_remaining_kg(1_000.0, 12.0, elapsed_min);
        let doubled = fuel_remaining_kg(1_000.0, 12.0, elapsed_min * 2.0);
        let burnt = 1_000.0 - single;
        assert!((1_000.0 - doubled - burnt * 2.0).abs() < 1e-9);
    }

    #[test]
    fn overconsumption_goes_negative_instead_of_clamping() {
        let remaining = fuel_remaining_kg(100.0, 10.0, 6_000.0);
        assert_eq!(remaining, -900.0);
    }
}
