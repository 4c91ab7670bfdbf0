//! Unit-safe distance quantities with automatic conversions.
//!
//! `measurement` is the user-facing crate in this workspace. It re-exports
//! the full API from `measurement-core` plus the predefined unit catalog
//! (SI-prefixed metres and imperial units).
//!
//! The core idea is: a distance is always a `Quantity<U>`, where `U` is a
//! zero-sized type describing the unit, and the stored `f64` is always the
//! **canonical value** — the distance in metres. Units exist only at compile
//! time; converting between them copies the canonical value and changes
//! nothing but the typed view.
//!
//! # What this crate solves
//!
//! - Automatic conversion whenever units mix: construction from another
//!   unit, assignment, comparison, and arithmetic all "just work" across the
//!   whole catalog.
//! - Mixed-unit arithmetic that stays correct by operating on canonical
//!   values; results keep the left operand's unit.
//! - Rendering of any quantity as `<count> <symbol>` via `Display`.
//!
//! # What this crate does not try to solve
//!
//! - Dimensions other than linear distance (no seconds, no kilograms).
//! - Type-level unit-mismatch detection: every distance unit is
//!   inter-convertible with every other by design.
//! - Exact or arbitrary-precision arithmetic: quantities are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use measurement::{Feet, Kilometer, Meters};
//!
//! let m = Meters::new(1000.0);
//! let km = m.to::<Kilometer>();
//! assert!((km.count() - 1.0).abs() < 1e-9);
//!
//! // Mixed-unit arithmetic: the result keeps the left operand's unit.
//! let total = Meters::new(1.0) + Feet::new(3.28084);
//! assert!((total.count() - 2.0).abs() < 1e-5);
//! ```
//!
//! Erase and recover units at runtime:
//!
//! ```rust
//! use measurement::{distance_cast, Distance, Kilometers, Meter};
//!
//! let erased: Distance = Kilometers::new(1.0).into();
//! let m = distance_cast::<Meter>(erased);
//! assert_eq!(m.count(), 1000.0);
//! ```
//!
//! # Comparison policy
//!
//! Equality and `<=`/`>=` tolerate an absolute difference of
//! [`f64::EPSILON`] between canonical values; `<` and `>` are strict. See
//! the `Quantity` documentation for the consequences near the tolerance
//! boundary.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `measurement-core`.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is
//!   the plain count, with the `serde_with_unit` helper for symbol-carrying
//!   formats.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! measurement = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result`
//! from its core operations. Conversions and arithmetic are pure `f64`
//! computations; they do not panic on their own, but they follow IEEE-754
//! behavior (NaN and infinities propagate according to the underlying
//! operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use measurement_core::*;

/// Derive macro used by `measurement-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit`, `crate::Ratio` and
/// `crate::Quantity`, so it is intended for use inside `measurement-core`
/// (or crates exposing the same crate-root API). Most users should not need
/// this.
pub use measurement_derive::Unit;

pub use measurement_core::units::imperial;
pub use measurement_core::units::si;

pub use measurement_core::units::imperial::*;
pub use measurement_core::units::si::*;
