//! Imperial distance units.
//!
//! Each descriptor carries the unit's exact metres-equivalent as its
//! multiplier (`period = 1/1`), following the current international
//! definitions: the inch is exactly `0.0254 m`, the nautical mile exactly
//! `1852 m`.

use crate::{Quantity, Ratio};
use measurement_derive::Unit;

/// Inch (`254/10_000 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "in", multiplier = Ratio::new(254, 10_000), period = Ratio::UNIT)]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;
/// One inch.
pub const INCH: Inches = Inches::new(1.0);

/// Foot (`3048/10_000 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "ft", multiplier = Ratio::new(3048, 10_000), period = Ratio::UNIT)]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// Yard (`9144/10_000 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "yd", multiplier = Ratio::new(9144, 10_000), period = Ratio::UNIT)]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards = Quantity<Yard>;
/// One yard.
pub const YD: Yards = Yards::new(1.0);

/// Statute mile (`160_934/100 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "mi", multiplier = Ratio::new(160_934, 100), period = Ratio::UNIT)]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles = Quantity<Mile>;
/// One mile.
pub const MI: Miles = Miles::new(1.0);

/// Nautical mile (`1852 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "nmi", multiplier = Ratio::new(1852, 1), period = Ratio::UNIT)]
pub struct NauticalMile;
/// A quantity measured in nautical miles.
pub type NauticalMiles = Quantity<NauticalMile>;
/// One nautical mile.
pub const NMI: NauticalMiles = NauticalMiles::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::si::{Kilometer, Kilometers, Meter, Meters};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn feet_to_inches() {
        let ft = Feet::new(1.0);
        let inches = ft.to::<Inch>();
        assert_abs_diff_eq!(inches.count(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn inches_to_feet() {
        let inches = Inches::new(12.0);
        let ft = inches.to::<Foot>();
        assert_abs_diff_eq!(ft.count(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn miles_to_yards() {
        let mi = Miles::new(1.0);
        let yd = mi.to::<Yard>();
        assert_abs_diff_eq!(yd.count(), 1760.0, epsilon = 0.01);
    }

    #[test]
    fn yards_to_miles() {
        let yd = Yards::new(1760.0);
        let mi = yd.to::<Mile>();
        assert_abs_diff_eq!(mi.count(), 1.0, epsilon = 0.01);
    }

    #[test]
    fn inch_to_meter_exact_ratio() {
        let inch = Inches::new(1.0);
        let m = inch.to::<Meter>();
        // International inch: exactly 0.0254 m
        assert_relative_eq!(m.count(), 0.0254, max_relative = 1e-15);
    }

    #[test]
    fn nautical_mile_to_meter_exact_ratio() {
        let nmi = NauticalMiles::new(1.0);
        let m = nmi.to::<Meter>();
        // International nautical mile: exactly 1852 m
        assert_abs_diff_eq!(m.count(), 1852.0, epsilon = 1e-12);
    }

    #[test]
    fn meters_to_feet() {
        let m = Meters::new(1.0);
        let ft = m.to::<Foot>();
        assert_abs_diff_eq!(ft.count(), 3.28084, epsilon = 1e-5);
    }

    #[test]
    fn kilometers_to_miles() {
        let km = Kilometers::new(1.60934);
        let mi = km.to::<Mile>();
        assert_abs_diff_eq!(mi.count(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn from_impl_mile_to_kilometer() {
        let mi = Miles::new(1.0);
        let km: Kilometers = mi.into();
        assert_abs_diff_eq!(km.count(), 1.60934, epsilon = 1e-5);
    }

    #[test]
    fn same_length_compares_equal_across_systems() {
        assert_eq!(NauticalMiles::new(1.0), Meters::new(1852.0));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_inch_m(i in -1e6..1e6f64) {
            let original = Inches::new(i);
            let back = original.to::<Meter>().to::<Inch>();
            let scale = i.abs().max(1.0);
            prop_assert!((back.count() - original.count()).abs() < 1e-9 * scale);
        }

        #[test]
        fn prop_roundtrip_mile_nmi(x in -1e6..1e6f64) {
            let original = Miles::new(x);
            let back = original.to::<NauticalMile>().to::<Mile>();
            let scale = x.abs().max(1.0);
            prop_assert!((back.count() - original.count()).abs() < 1e-9 * scale);
        }
    }
}
