//! Quantity type and its implementations.

use crate::unit::Unit;
use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fabs(x)
    }
}

/// A distance with a specific unit.
///
/// `Quantity<U>` wraps a single `f64` together with phantom type information
/// about its unit `U`. The stored number is the **canonical value**: the
/// distance expressed in the canonical metre scale, regardless of `U`.
/// Because of this, converting between units never touches the stored
/// number — the unit's [`FACTOR`](Unit::FACTOR) is applied only when a raw
/// scalar enters ([`new`](Quantity::new)) or leaves
/// ([`count`](Quantity::count)) the type.
///
/// Arithmetic and comparisons operate purely on canonical values, so
/// quantities of *different* units combine freely; the result is typed in
/// the left operand's unit.
///
/// # Examples
///
/// ```rust
/// use measurement_core::units::si::{Kilometer, Meters};
///
/// let m = Meters::new(1500.0);
/// let km = m.to::<Kilometer>();
/// assert_eq!(km.count(), 1.5);
/// assert_eq!(km.canonical(), m.canonical());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use measurement_core::units::si::Meters;
    /// assert!(Meters::NAN.count().is_nan());
    /// ```
    pub const NAN: Self = Self::from_canonical(f64::NAN);

    /// Creates a new quantity from a raw count expressed in `U`.
    ///
    /// This is the only operation that applies the unit's factor to external
    /// input: the stored canonical value is `count * U::FACTOR`. Overflow
    /// follows IEEE-754 semantics and saturates to infinity.
    ///
    /// ```rust
    /// use measurement_core::units::si::Kilometers;
    /// let d = Kilometers::new(3.0);
    /// assert_eq!(d.count(), 3.0);
    /// assert_eq!(d.canonical(), 3000.0);
    /// ```
    #[inline]
    pub const fn new(count: f64) -> Self {
        Self(count * U::FACTOR, PhantomData)
    }

    /// Creates a quantity directly from a canonical value.
    ///
    /// The number is stored verbatim; no factor is applied.
    #[inline]
    pub const fn from_canonical(canonical: f64) -> Self {
        Self(canonical, PhantomData)
    }

    /// Returns the count expressed in `U`, i.e. `canonical / U::FACTOR`.
    ///
    /// ```rust
    /// use measurement_core::units::si::Centimeters;
    /// let d = Centimeters::new(250.0);
    /// assert_eq!(d.count(), 250.0);
    /// ```
    #[inline]
    pub const fn count(self) -> f64 {
        self.0 / U::FACTOR
    }

    /// Returns the canonical (metre-scale) value.
    #[inline]
    pub const fn canonical(self) -> f64 {
        self.0
    }

    /// Converts this quantity to another unit.
    ///
    /// The canonical value is copied unchanged; only the typed view differs.
    /// Any unit converts to any other.
    ///
    /// ```rust
    /// use measurement_core::units::imperial::{Feet, Inch};
    ///
    /// let ft = Feet::new(1.0);
    /// let inches = ft.to::<Inch>();
    /// assert!((inches.count() - 12.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub const fn to<T: Unit>(self) -> Quantity<T> {
        Quantity::<T>::from_canonical(self.0)
    }

    /// Reinterprets a raw count in this quantity's own unit, discarding the
    /// previous value.
    ///
    /// ```rust
    /// use measurement_core::units::si::Kilometers;
    /// let mut d = Kilometers::new(5.0);
    /// d.set_count(2.0);
    /// assert_eq!(d.canonical(), 2000.0);
    /// ```
    #[inline]
    pub fn set_count(&mut self, count: f64) {
        self.0 = Self::new(count).0;
    }

    /// Advances by one unit of this quantity's own scale and returns `self`
    /// for chaining.
    ///
    /// ```rust
    /// use measurement_core::units::si::Kilometers;
    /// let mut d = Kilometers::new(1.0);
    /// d.inc().inc();
    /// assert_eq!(d.count(), 3.0);
    /// ```
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        *self += 1.0;
        self
    }

    /// Retreats by one unit of this quantity's own scale and returns `self`
    /// for chaining.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        *self -= 1.0;
        self
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use measurement_core::units::si::Meters;
    /// assert_eq!(Meters::new(-10.0).abs().count(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_canonical(abs(self.0))
    }
}

impl<U: Unit> Default for Quantity<U> {
    /// The zero distance.
    #[inline]
    fn default() -> Self {
        Self::from_canonical(0.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, E: Unit> Add<Quantity<E>> for Quantity<U> {
    type Output = Self;
    /// Canonical addition; the result keeps the left operand's unit.
    #[inline]
    fn add(self, rhs: Quantity<E>) -> Self {
        Self::from_canonical(self.0 + rhs.0)
    }
}

impl<U: Unit, E: Unit> AddAssign<Quantity<E>> for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<E>) {
        self.0 += rhs.0;
    }
}

impl<U: Unit, E: Unit> Sub<Quantity<E>> for Quantity<U> {
    type Output = Self;
    /// Canonical subtraction; the result keeps the left operand's unit.
    #[inline]
    fn sub(self, rhs: Quantity<E>) -> Self {
        Self::from_canonical(self.0 - rhs.0)
    }
}

impl<U: Unit, E: Unit> SubAssign<Quantity<E>> for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<E>) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit> Add<f64> for Quantity<U> {
    type Output = Self;
    /// Adds a raw count interpreted in this quantity's own unit.
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::from_canonical(self.0 + Self::new(rhs).0)
    }
}

impl<U: Unit> AddAssign<f64> for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.0 += Self::new(rhs).0;
    }
}

impl<U: Unit> Sub<f64> for Quantity<U> {
    type Output = Self;
    /// Subtracts a raw count interpreted in this quantity's own unit.
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::from_canonical(self.0 - Self::new(rhs).0)
    }
}

impl<U: Unit> SubAssign<f64> for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self.0 -= Self::new(rhs).0;
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    /// Linear scaling of the canonical value; descriptor-independent.
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_canonical(self.0 * rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    /// Division of the canonical value. There is no zero check: dividing by
    /// zero yields infinity or NaN per IEEE-754.
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_canonical(self.0 / rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_canonical(-self.0)
    }
}

impl<U: Unit> From<f64> for Quantity<U> {
    /// Equivalent to [`Quantity::new`]: the scalar is a count in `U`.
    #[inline]
    fn from(count: f64) -> Self {
        Self::new(count)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

/// Absolute tolerance used by equality and by `<=`/`>=`.
const EPS: f64 = f64::EPSILON;

impl<U: Unit, E: Unit> PartialEq<Quantity<E>> for Quantity<U> {
    /// Equality with an absolute tolerance of [`f64::EPSILON`] on the
    /// canonical values.
    ///
    /// The tolerance is fixed regardless of magnitude, so canonically equal
    /// lengths compare equal across units, while very large values that
    /// differ by a few ULPs may not. See the ordering impl for how this
    /// interacts with `<` and `<=`.
    ///
    /// `ne` is the default negation of `eq`, so a canonical difference of
    /// exactly [`f64::EPSILON`] compares unequal (the strict `< EPSILON`
    /// bound puts the boundary itself on the unequal side).
    ///
    /// ```rust
    /// use measurement_core::units::si::{Kilometers, Meters};
    /// assert_eq!(Meters::new(1000.0), Kilometers::new(1.0));
    /// ```
    #[inline]
    fn eq(&self, other: &Quantity<E>) -> bool {
        abs(self.0 - other.0) < EPS
    }
}

impl<U: Unit, E: Unit> PartialOrd<Quantity<E>> for Quantity<U> {
    /// Orders canonical values, reporting `Equal` within the same absolute
    /// tolerance as [`PartialEq`].
    #[inline]
    fn partial_cmp(&self, other: &Quantity<E>) -> Option<Ordering> {
        if self.0.is_nan() || other.0.is_nan() {
            None
        } else if abs(self.0 - other.0) < EPS {
            Some(Ordering::Equal)
        } else if self.0 < other.0 {
            Some(Ordering::Less)
        } else {
            Some(Ordering::Greater)
        }
    }

    /// Strict, tolerance-free comparison of canonical values.
    ///
    /// Note the deliberate asymmetry: `<` and `>` are strict while `<=`,
    /// `>=` and `==` are epsilon-tolerant, so near the tolerance boundary a
    /// pair can be both `==` and `<`. This mirrors long-standing behavior
    /// that callers may rely on; it deviates from the default `PartialOrd`
    /// derivations, which would make `<` exclude epsilon-equal pairs.
    #[inline]
    fn lt(&self, other: &Quantity<E>) -> bool {
        self.0 < other.0
    }

    /// Strict, tolerance-free comparison of canonical values. See [`PartialOrd::lt`].
    #[inline]
    fn gt(&self, other: &Quantity<E>) -> bool {
        self.0 > other.0
    }

    /// Tolerant comparison: true when `self - other < EPSILON`.
    #[inline]
    fn le(&self, other: &Quantity<E>) -> bool {
        self.0 - other.0 < EPS
    }

    /// Tolerant comparison: true when `self - other > -EPSILON`.
    #[inline]
    fn ge(&self, other: &Quantity<E>) -> bool {
        self.0 - other.0 > -EPS
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    /// Serializes as the plain count in `U` (a bare `f64`).
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.count().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    /// Deserializes a bare `f64` interpreted as a count in `U`.
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let count = f64::deserialize(deserializer)?;
        Ok(Quantity::new(count))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit
/// symbols in serialized data. Useful for external APIs, configuration
/// files, or self-documenting data formats.
///
/// # Examples
///
/// ```rust
/// use measurement_core::units::si::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "measurement_core::serde_with_unit")]
///     max_distance: Meters,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Meters,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<U>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.count())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Quantity<U>` from a struct with `value` and optionally
    /// `unit` fields.
    ///
    /// The `unit` field is validated if present but not required for
    /// backwards compatibility; a mismatching symbol is rejected.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(core::marker::PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(ref unit_str) = unit {
                    if unit_str != U::SYMBOL {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            U::SYMBOL,
                            unit_str
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(core::marker::PhantomData),
        )
    }
}
