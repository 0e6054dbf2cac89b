//! Unit-tagged values and their resolution to pixels.

use crate::error::ModelError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Unit in which a distance (size or margin) is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Multiple of the keyboard's base key size
    Key,
    /// Absolute pixels
    Pixel,
}

impl Unit {
    /// All supported units.
    pub const ALL: [Self; 2] = [Self::Key, Self::Pixel];

    /// Symbol used in definition files.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Key => "k",
            Self::Pixel => "px",
        }
    }

    /// Looks up a unit by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Result<Self, ModelError> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| ModelError::UnknownUnit {
                symbol: symbol.to_string(),
            })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A decimal magnitude tagged with a unit, e.g. `1.5k` or `20px`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueWithUnit {
    /// Magnitude as written
    pub value: Decimal,
    /// Unit of the magnitude
    pub unit: Unit,
}

impl ValueWithUnit {
    /// Creates a new value with the given unit.
    #[must_use]
    pub const fn new(value: Decimal, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Creates a value measured in keys.
    #[must_use]
    pub const fn keys(value: Decimal) -> Self {
        Self::new(value, Unit::Key)
    }

    /// Creates a value measured in pixels.
    #[must_use]
    pub const fn pixels(value: Decimal) -> Self {
        Self::new(value, Unit::Pixel)
    }

    /// Returns true if the magnitude is zero, regardless of unit.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Resolves the value to whole pixels.
    ///
    /// Key values scale `base` (the key size in pixels) and round half away from zero;
    /// pixel values ignore `base` and are only rounded.
    #[must_use]
    pub fn resolve_to_pixels(&self, base: i32) -> i32 {
        match self.unit {
            Unit::Key => multiply(base, self.value),
            Unit::Pixel => round_to_int(self.value),
        }
    }

    /// Returns true if this is a key value spanning more than one key slot.
    #[must_use]
    pub fn spans_multiple_keys(&self) -> bool {
        self.unit == Unit::Key && self.value > Decimal::ONE
    }
}

impl fmt::Display for ValueWithUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Multiplies an integer by a decimal and rounds the result half away from zero.
#[must_use]
pub fn multiply(a: i32, b: Decimal) -> i32 {
    let product = Decimal::from(a).checked_mul(b).unwrap_or(if (a < 0) == b.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    });
    round_to_int(product)
}

/// Rounds a decimal half away from zero, saturating at the `i32` range.
#[must_use]
pub fn round_to_int(value: Decimal) -> i32 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i32().unwrap_or(if rounded.is_sign_negative() {
        i32::MIN
    } else {
        i32::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_unit_from_symbol() {
        assert_eq!(Unit::from_symbol("k").unwrap(), Unit::Key);
        assert_eq!(Unit::from_symbol("px").unwrap(), Unit::Pixel);
        assert!(Unit::from_symbol("PX").is_err());
        assert!(Unit::from_symbol("K").is_err());
    }

    #[test]
    fn test_unit_from_unknown_symbol() {
        let err = Unit::from_symbol("boop").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown unit 'boop'. Supported units: keys (k), pixels (px)"
        );
    }

    #[test]
    fn test_multiply_rounds_half_up() {
        assert_eq!(multiply(3, Decimal::TEN), 30);
        assert_eq!(multiply(40, dec("-0.2")), -8);
        assert_eq!(multiply(3, dec("0.5")), 2);
        assert_eq!(multiply(40, dec("0.75")), 30);
    }

    #[test]
    fn test_round_to_int() {
        assert_eq!(round_to_int(dec("0.4")), 0);
        assert_eq!(round_to_int(dec("0.5")), 1);
        assert_eq!(round_to_int(dec("-2.8")), -3);
        assert_eq!(round_to_int(dec("-1.4")), -1);
    }

    #[test]
    fn test_pixel_resolution_ignores_base() {
        let value = ValueWithUnit::pixels(dec("30.5"));
        assert_eq!(value.resolve_to_pixels(40), 31);
        assert_eq!(value.resolve_to_pixels(7), 31);
    }

    #[test]
    fn test_key_resolution_scales_with_base() {
        let value = ValueWithUnit::keys(dec("1.5"));
        assert_eq!(value.resolve_to_pixels(40), 60);
        assert_eq!(value.resolve_to_pixels(80), 120);
        assert_eq!(value.resolve_to_pixels(35), 53);
    }

    #[test]
    fn test_spans_multiple_keys() {
        assert!(ValueWithUnit::keys(dec("2")).spans_multiple_keys());
        assert!(!ValueWithUnit::keys(Decimal::ONE).spans_multiple_keys());
        assert!(!ValueWithUnit::pixels(dec("80")).spans_multiple_keys());
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueWithUnit::keys(dec("2.5")).to_string(), "2.5k");
        assert_eq!(ValueWithUnit::pixels(dec("20")).to_string(), "20px");
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        assert_eq!(round_to_int(Decimal::MAX), i32::MAX);
        assert_eq!(multiply(-40, Decimal::MAX), i32::MIN);
    }
}
