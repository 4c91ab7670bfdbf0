//! Core type system for unit-safe distance measurements.
//!
//! `measurement-core` provides a minimal, zero-cost model of linear distance:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`], described by
//!   two exact [`Ratio`] constants whose product is the unit's conversion
//!   factor to the canonical metre scale.
//! - A value tagged with a unit is a [`Quantity<U>`], backed by a single
//!   `f64` holding the **canonical value** (the distance in metres), whatever
//!   `U` is.
//! - Conversion between units is therefore a copy: [`Quantity::to`] and the
//!   generated `From` impls never re-apply a factor. The factor only matters
//!   at the raw-scalar boundary ([`Quantity::new`] / [`Quantity::count`]).
//! - Arithmetic and comparisons act on canonical values, so quantities of
//!   different units mix freely; results keep the left operand's unit.
//!
//! Most users should depend on `measurement` (the facade crate) unless they
//! need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Automatic, lossless-at-the-representation conversion between any pair
//!   of distance units.
//! - Zero runtime overhead for unit tags (phantom types only).
//! - A catalog of SI-prefixed metres and imperial units that is trivially
//!   extensible: one marker type per new unit, no change to the core.
//!
//! # What this crate does not try to solve
//!
//! - Dimensions other than linear distance, or affine/offset unit systems.
//! - Type-level unit-mismatch detection: every unit converts to every other
//!   by design.
//! - Exact arithmetic (`Quantity` is `f64`).
//!
//! # Quick start
//!
//! ```rust
//! use measurement_core::units::imperial::Feet;
//! use measurement_core::units::si::{Kilometer, Meters};
//!
//! let total = Meters::new(1.0) + Feet::new(3.28084);
//! assert!((total.count() - 2.0).abs() < 1e-5);
//!
//! let km = total.to::<Kilometer>();
//! assert_eq!(km.canonical(), total.canonical());
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `measurement-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! measurement-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in
//! `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is
//!   the plain count in `U`, with an opt-in [`serde_with_unit`] helper that
//!   adds the unit symbol.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result`
//! from its core operations. Conversions and arithmetic are pure `f64`
//! computations; they do not panic on their own, but they follow IEEE-754
//! behavior (NaN and infinities propagate according to the underlying
//! operation, division by zero yields infinity, overflow saturates to
//! infinity).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod distance;
mod macros;
mod quantity;
mod ratio;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use distance::{distance_cast, Distance};
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined distance units (SI and imperial).
///
/// These are defined in `measurement-core` so they can implement formatting
/// and conversion traits without running into Rust's orphan rules.
pub mod units;

pub use units::imperial;
pub use units::si;
