//! Predefined distance units.
//!
//! The catalog is a table of unit descriptor instantiations; it adds no
//! behavior of its own. Extending it means defining one more marker type
//! with `#[derive(Unit)]` and listing it in the conversion table below.
//!
//! ## Modules
//!
//! - [`si`]: the metric prefix family for metres, from atto- to exa-.
//! - [`imperial`]: inch, foot, yard, statute mile, nautical mile.

pub mod imperial;
pub mod si;

// Generate all bidirectional From implementations between catalog units.
//
// A single invocation so that any quantity in one unit converts into any
// other via `From`/`Into`, across the SI/imperial split.
crate::impl_unit_conversions!(
    si::Attometer,
    si::Femtometer,
    si::Picometer,
    si::Nanometer,
    si::Micrometer,
    si::Millimeter,
    si::Centimeter,
    si::Decimeter,
    si::Meter,
    si::Decameter,
    si::Hectometer,
    si::Kilometer,
    si::Megameter,
    si::Gigameter,
    si::Terameter,
    si::Petameter,
    si::Exameter,
    imperial::Inch,
    imperial::Foot,
    imperial::Yard,
    imperial::Mile,
    imperial::NauticalMile,
);
