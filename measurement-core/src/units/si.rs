//! Metric distance units.
//!
//! The canonical scaling unit is [`Meter`] (`Meter::FACTOR == 1.0`). Every
//! other unit here is the metre under one SI prefix: its descriptor is
//! `(multiplier = 1/1, period = <prefix ratio>)`, with the prefix family
//! spanning `10^-18` ([`Attometer`]) through `10^18` ([`Exameter`]).
//!
//! ```rust
//! use measurement_core::units::si::{Kilometer, Meters};
//!
//! let m = Meters::new(1500.0);
//! let km = m.to::<Kilometer>();
//! assert_eq!(km.count(), 1.5);
//! ```

use crate::{Quantity, Ratio};
use measurement_derive::Unit;

/// Metre, the canonical unit.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "m", multiplier = Ratio::UNIT, period = Ratio::UNIT)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Attometre (`1e-18 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "am", multiplier = Ratio::UNIT, period = Ratio::ATTO)]
pub struct Attometer;
/// A quantity measured in attometres.
pub type Attometers = Quantity<Attometer>;
/// One attometre.
pub const AM: Attometers = Attometers::new(1.0);

/// Femtometre (`1e-15 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "fm", multiplier = Ratio::UNIT, period = Ratio::FEMTO)]
pub struct Femtometer;
/// A quantity measured in femtometres.
pub type Femtometers = Quantity<Femtometer>;
/// One femtometre.
pub const FM: Femtometers = Femtometers::new(1.0);

/// Picometre (`1e-12 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "pm", multiplier = Ratio::UNIT, period = Ratio::PICO)]
pub struct Picometer;
/// A quantity measured in picometres.
pub type Picometers = Quantity<Picometer>;
/// One picometre.
pub const PM: Picometers = Picometers::new(1.0);

/// Nanometre (`1e-9 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "nm", multiplier = Ratio::UNIT, period = Ratio::NANO)]
pub struct Nanometer;
/// Type alias shorthand for [`Nanometer`].
pub type Nm = Nanometer;
/// A quantity measured in nanometres.
pub type Nanometers = Quantity<Nm>;
/// One nanometre.
pub const NM: Nanometers = Nanometers::new(1.0);

/// Micrometre (`1e-6 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "um", multiplier = Ratio::UNIT, period = Ratio::MICRO)]
pub struct Micrometer;
/// Type alias shorthand for [`Micrometer`].
pub type Um = Micrometer;
/// A quantity measured in micrometres.
pub type Micrometers = Quantity<Um>;
/// One micrometre.
pub const UM: Micrometers = Micrometers::new(1.0);

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "mm", multiplier = Ratio::UNIT, period = Ratio::MILLI)]
pub struct Millimeter;
/// Type alias shorthand for [`Millimeter`].
pub type Mm = Millimeter;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Mm>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Centimetre (`1e-2 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "cm", multiplier = Ratio::UNIT, period = Ratio::CENTI)]
pub struct Centimeter;
/// Type alias shorthand for [`Centimeter`].
pub type Cm = Centimeter;
/// A quantity measured in centimetres.
pub type Centimeters = Quantity<Cm>;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Decimetre (`1e-1 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "dm", multiplier = Ratio::UNIT, period = Ratio::DECI)]
pub struct Decimeter;
/// A quantity measured in decimetres.
pub type Decimeters = Quantity<Decimeter>;
/// One decimetre.
pub const DM: Decimeters = Decimeters::new(1.0);

/// Decametre (`1e1 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "dam", multiplier = Ratio::UNIT, period = Ratio::DECA)]
pub struct Decameter;
/// A quantity measured in decametres.
pub type Decameters = Quantity<Decameter>;
/// One decametre.
pub const DAM: Decameters = Decameters::new(1.0);

/// Hectometre (`1e2 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "hm", multiplier = Ratio::UNIT, period = Ratio::HECTO)]
pub struct Hectometer;
/// A quantity measured in hectometres.
pub type Hectometers = Quantity<Hectometer>;
/// One hectometre.
pub const HM: Hectometers = Hectometers::new(1.0);

/// Kilometre (`1e3 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "km", multiplier = Ratio::UNIT, period = Ratio::KILO)]
pub struct Kilometer;
/// Type alias shorthand for [`Kilometer`].
pub type Km = Kilometer;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Km>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Megametre (`1e6 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "Mm", multiplier = Ratio::UNIT, period = Ratio::MEGA)]
pub struct Megameter;
/// A quantity measured in megametres.
pub type Megameters = Quantity<Megameter>;
/// One megametre. Spelled out: uppercasing the symbol `Mm` would collide
/// with [`MM`] (millimetre), and the lowercase-symbol unit keeps the
/// symbol-derived name.
pub const MEGAMETER: Megameters = Megameters::new(1.0);

/// Gigametre (`1e9 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "Gm", multiplier = Ratio::UNIT, period = Ratio::GIGA)]
pub struct Gigameter;
/// A quantity measured in gigametres.
pub type Gigameters = Quantity<Gigameter>;
/// One gigametre.
pub const GM: Gigameters = Gigameters::new(1.0);

/// Terametre (`1e12 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "Tm", multiplier = Ratio::UNIT, period = Ratio::TERA)]
pub struct Terameter;
/// A quantity measured in terametres.
pub type Terameters = Quantity<Terameter>;
/// One terametre.
pub const TM: Terameters = Terameters::new(1.0);

/// Petametre (`1e15 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "Pm", multiplier = Ratio::UNIT, period = Ratio::PETA)]
pub struct Petameter;
/// A quantity measured in petametres.
pub type Petameters = Quantity<Petameter>;
/// One petametre. Spelled out: uppercasing the symbol `Pm` would collide
/// with [`PM`] (picometre), and the lowercase-symbol unit keeps the
/// symbol-derived name.
pub const PETAMETER: Petameters = Petameters::new(1.0);

/// Exametre (`1e18 m`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "Em", multiplier = Ratio::UNIT, period = Ratio::EXA)]
pub struct Exameter;
/// A quantity measured in exametres.
pub type Exameters = Quantity<Exameter>;
/// One exametre.
pub const EM: Exameters = Exameters::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn meter_to_kilometer() {
        let m = Meters::new(1000.0);
        let km = m.to::<Kilometer>();
        assert_abs_diff_eq!(km.count(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn kilometer_to_meter() {
        let km = Kilometers::new(1.0);
        let m = km.to::<Meter>();
        assert_abs_diff_eq!(m.count(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn millimeter_to_meter() {
        let mm = Millimeters::new(1000.0);
        let m = mm.to::<Meter>();
        assert_abs_diff_eq!(m.count(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn meter_to_millimeter() {
        let m = Meters::new(1.0);
        let mm = m.to::<Millimeter>();
        assert_abs_diff_eq!(mm.count(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn nanometer_to_meter() {
        let nm = Nanometers::new(1e9);
        let m = nm.to::<Meter>();
        assert_abs_diff_eq!(m.count(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn attometer_exameter_span() {
        let em = Exameters::new(1.0);
        let am = em.to::<Attometer>();
        assert_relative_eq!(am.count(), 1e36, max_relative = 1e-12);
    }

    #[test]
    fn one_unit_consts_carry_their_scale() {
        assert_eq!(M.canonical(), 1.0);
        assert_eq!(KM.canonical(), 1000.0);
        assert_eq!(MM.canonical(), 1e-3);
        assert_eq!(MEGAMETER.canonical(), 1e6);
        assert_eq!(PM.canonical(), 1e-12);
        assert_eq!(PETAMETER.canonical(), 1e15);
    }

    #[test]
    fn factor_is_prefix_value() {
        assert_eq!(Meter::FACTOR, 1.0);
        assert_eq!(Kilometer::FACTOR, 1000.0);
        assert_eq!(Centimeter::FACTOR, 0.01);
        assert_eq!(Attometer::FACTOR, 1e-18);
        assert_eq!(Exameter::FACTOR, 1e18);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // From impls and canonical equality
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_impl_meter_to_kilometer() {
        let m = Meters::new(2500.0);
        let km: Kilometers = m.into();
        assert_abs_diff_eq!(km.count(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn conversion_preserves_canonical_value() {
        let m = Meters::new(1234.5);
        let km = m.to::<Kilometer>();
        let cm = m.to::<Centimeter>();
        assert_eq!(km.canonical(), m.canonical());
        assert_eq!(cm.canonical(), m.canonical());
    }

    #[test]
    fn same_length_compares_equal_across_units() {
        assert_eq!(Meters::new(1000.0), Kilometers::new(1.0));
        assert_eq!(Centimeters::new(100.0), Meters::new(1.0));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Roundtrip conversions
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn roundtrip_km_m() {
        let original = Kilometers::new(42.5);
        let back = original.to::<Meter>().to::<Kilometer>();
        assert_abs_diff_eq!(back.count(), original.count(), epsilon = 1e-12);
    }

    #[test]
    fn roundtrip_nm_km() {
        let original = Nanometers::new(123.456);
        let back = original.to::<Kilometer>().to::<Nanometer>();
        assert_relative_eq!(back.count(), original.count(), max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_km_m(k in -1e6..1e6f64) {
            let original = Kilometers::new(k);
            let back = original.to::<Meter>().to::<Kilometer>();
            prop_assert!((back.count() - original.count()).abs() < 1e-9 * k.abs().max(1.0));
        }

        #[test]
        fn prop_km_m_ratio(k in 1e-6..1e6f64) {
            let km = Kilometers::new(k);
            let m = km.to::<Meter>();
            // 1 km = 1000 m
            prop_assert!((m.count() / km.count() - 1000.0).abs() < 1e-9);
        }

        #[test]
        fn prop_count_is_canonical_over_factor(x in -1e9..1e9f64) {
            let cm = Centimeters::new(x);
            prop_assert!((cm.count() - cm.canonical() / Centimeter::FACTOR).abs() <= f64::EPSILON * x.abs());
        }
    }
}
