//! Exact rational constants used to build unit conversion factors.

/// A compile-time exact rational number.
///
/// `Ratio` is the building block of a unit descriptor: every unit carries a
/// `multiplier` and a `period` ratio whose product is the unit's conversion
/// factor to the canonical metre scale. The rational form keeps defined
/// relationships exact (an inch is exactly `254/10_000` of a metre) until the
/// single resolution to `f64` at constant-evaluation time.
///
/// ```rust
/// use measurement_core::Ratio;
///
/// const THIRD: Ratio = Ratio::new(1, 3);
/// assert!((THIRD.value() - 1.0 / 3.0).abs() < 1e-16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ratio {
    /// Numerator.
    pub num: i64,
    /// Denominator. Never zero.
    pub den: i64,
}

impl Ratio {
    /// Creates a ratio from a numerator and a non-zero denominator.
    ///
    /// A zero denominator is a contract violation. Because unit descriptors
    /// are built in `const` context, violating it fails constant evaluation
    /// rather than surfacing as a runtime error.
    #[inline]
    pub const fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "Ratio denominator must be non-zero");
        Self { num, den }
    }

    /// Resolves the ratio to its `f64` approximation.
    ///
    /// ```rust
    /// use measurement_core::Ratio;
    /// assert_eq!(Ratio::KILO.value(), 1000.0);
    /// ```
    #[inline]
    pub const fn value(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// The identity ratio `1/1`.
    pub const UNIT: Ratio = Ratio::new(1, 1);

    // SI prefixes, 10^-18 through 10^18.

    /// `10^-18`.
    pub const ATTO: Ratio = Ratio::new(1, 1_000_000_000_000_000_000);
    /// `10^-15`.
    pub const FEMTO: Ratio = Ratio::new(1, 1_000_000_000_000_000);
    /// `10^-12`.
    pub const PICO: Ratio = Ratio::new(1, 1_000_000_000_000);
    /// `10^-9`.
    pub const NANO: Ratio = Ratio::new(1, 1_000_000_000);
    /// `10^-6`.
    pub const MICRO: Ratio = Ratio::new(1, 1_000_000);
    /// `10^-3`.
    pub const MILLI: Ratio = Ratio::new(1, 1_000);
    /// `10^-2`.
    pub const CENTI: Ratio = Ratio::new(1, 100);
    /// `10^-1`.
    pub const DECI: Ratio = Ratio::new(1, 10);
    /// `10^1`.
    pub const DECA: Ratio = Ratio::new(10, 1);
    /// `10^2`.
    pub const HECTO: Ratio = Ratio::new(100, 1);
    /// `10^3`.
    pub const KILO: Ratio = Ratio::new(1_000, 1);
    /// `10^6`.
    pub const MEGA: Ratio = Ratio::new(1_000_000, 1);
    /// `10^9`.
    pub const GIGA: Ratio = Ratio::new(1_000_000_000, 1);
    /// `10^12`.
    pub const TERA: Ratio = Ratio::new(1_000_000_000_000, 1);
    /// `10^15`.
    pub const PETA: Ratio = Ratio::new(1_000_000_000_000_000, 1);
    /// `10^18`.
    pub const EXA: Ratio = Ratio::new(1_000_000_000_000_000_000, 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_resolves_division() {
        assert_eq!(Ratio::new(3, 4).value(), 0.75);
        assert_eq!(Ratio::new(-1, 2).value(), -0.5);
    }

    #[test]
    fn unit_is_one() {
        assert_eq!(Ratio::UNIT.value(), 1.0);
    }

    #[test]
    fn prefixes_are_reciprocal_pairs() {
        assert_eq!(Ratio::KILO.value() * Ratio::MILLI.value(), 1.0);
        assert_eq!(Ratio::MEGA.value() * Ratio::MICRO.value(), 1.0);
        assert_eq!(Ratio::GIGA.value() * Ratio::NANO.value(), 1.0);
        assert_eq!(Ratio::TERA.value() * Ratio::PICO.value(), 1.0);
        assert_eq!(Ratio::PETA.value() * Ratio::FEMTO.value(), 1.0);
        assert_eq!(Ratio::EXA.value() * Ratio::ATTO.value(), 1.0);
        assert_eq!(Ratio::HECTO.value() * Ratio::CENTI.value(), 1.0);
        assert_eq!(Ratio::DECA.value() * Ratio::DECI.value(), 1.0);
    }

    #[test]
    fn prefix_span() {
        assert_eq!(Ratio::EXA.value(), 1e18);
        assert_eq!(Ratio::ATTO.value(), 1e-18);
    }
}
