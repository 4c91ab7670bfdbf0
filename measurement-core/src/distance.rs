//! Unit-erased distances and the cast utility.

use crate::quantity::abs;
use crate::{Quantity, Unit};
use core::fmt::{Display, Formatter, Result};

/// A distance whose unit is known only at runtime.
///
/// `Distance` is the erased form of a [`Quantity`]: it carries the canonical
/// value together with a tag describing the unit it was erased from (the
/// resolved factor and printable symbol). It is useful when quantities of
/// heterogeneous units must travel through a common type, e.g. in a `Vec` or
/// across an API boundary that does not want to be generic.
///
/// Recover a typed view with [`distance_cast`].
///
/// ```rust
/// use measurement_core::units::si::{Kilometers, Meter};
/// use measurement_core::{distance_cast, Distance};
///
/// let erased = Distance::from(Kilometers::new(1.0));
/// let m = distance_cast::<Meter>(erased);
/// assert_eq!(m.count(), 1000.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Distance {
    canonical: f64,
    factor: f64,
    symbol: &'static str,
}

impl Distance {
    /// Returns the canonical (metre-scale) value.
    #[inline]
    pub const fn canonical(self) -> f64 {
        self.canonical
    }

    /// Returns the count in the unit this distance was erased from.
    #[inline]
    pub const fn count(self) -> f64 {
        self.canonical / self.factor
    }

    /// Returns the symbol of the unit this distance was erased from.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        self.symbol
    }
}

impl<U: Unit> From<Quantity<U>> for Distance {
    /// Erases the unit, keeping the canonical value and the unit tag.
    #[inline]
    fn from(quantity: Quantity<U>) -> Self {
        Self {
            canonical: quantity.canonical(),
            factor: U::FACTOR,
            symbol: U::SYMBOL,
        }
    }
}

impl PartialEq for Distance {
    /// Same tolerance policy as [`Quantity`]: absolute [`f64::EPSILON`] on
    /// canonical values. The unit tag does not participate in equality.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        abs(self.canonical - other.canonical) < f64::EPSILON
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.count(), self.symbol)
    }
}

/// Converts a unit-erased [`Distance`] into a concrete [`Quantity`].
///
/// The canonical value is copied verbatim; no factor is re-applied, because
/// canonical values are unit-independent. The target must implement
/// [`Unit`] — requesting anything else fails to compile.
///
/// ```rust
/// use measurement_core::units::imperial::{Foot, NauticalMiles};
/// use measurement_core::{distance_cast, Distance};
///
/// let erased: Distance = NauticalMiles::new(1.0).into();
/// let ft = distance_cast::<Foot>(erased);
/// assert!((ft.count() - 6076.115).abs() < 1e-2);
/// ```
#[inline]
pub fn distance_cast<U: Unit>(dist: Distance) -> Quantity<U> {
    Quantity::from_canonical(dist.canonical())
}
