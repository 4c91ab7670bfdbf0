//! The unit descriptor trait.

use crate::Ratio;
use core::fmt::Debug;

/// Trait implemented by every **unit** marker type.
///
/// A unit descriptor is a pair of exact [`Ratio`] constants:
///
/// * `MULTIPLIER` — the unit's defining rational (e.g. `3048/10_000` metres
///   for a foot, `1/1` for any metric unit);
/// * `PERIOD` — the scale prefix applied on top (e.g. [`Ratio::KILO`] for a
///   kilometre, `1/1` for non-prefixed units).
///
/// Their product is [`Unit::FACTOR`], the conversion factor from this unit
/// to the canonical metre scale. It is resolved once at compile time and is
/// the only place a unit influences behavior: quantities store canonical
/// values and apply `FACTOR` solely at the raw-scalar boundary
/// ([`Quantity::new`](crate::Quantity::new) and
/// [`Quantity::count`](crate::Quantity::count)).
///
/// # Invariants
///
/// - Implementations should be zero-sized marker structs; use
///   `#[derive(Unit)]` from `measurement-derive` rather than implementing by
///   hand.
/// - `FACTOR` must be finite and non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Defining rational of the unit, in metres.
    const MULTIPLIER: Ratio;

    /// Scale prefix applied to the multiplier.
    const PERIOD: Ratio;

    /// Printable symbol (e.g. `"m"` or `"km"`), shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Unit-to-canonical conversion factor, resolved once at compile time.
    const FACTOR: f64 = Self::MULTIPLIER.value() * Self::PERIOD.value();
}
