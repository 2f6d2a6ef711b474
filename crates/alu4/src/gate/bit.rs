//! Single-bit value type.

use core::fmt;

/// A single bit, always 0 or 1.
///
/// Raw integers are normalized to their least significant bit on the way in,
/// so callers may hand over multi-bit values and gates never observe anything
/// but 0 or 1.
///
/// # Example
///
/// ```
/// use alu4::gate::Bit;
///
/// assert_eq!(Bit::new(0b1110), Bit::ZERO);
/// assert_eq!(Bit::new(0xFF), Bit::ONE);
/// assert_eq!(u8::from(Bit::from(true)), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Bit(u8);

impl Bit {
    /// Logic low.
    pub const ZERO: Self = Self(0);

    /// Logic high.
    pub const ONE: Self = Self(1);

    /// Creates a bit from any raw value, keeping only bit 0.
    #[inline]
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw & 0x01)
    }

    /// Returns the bit as `0` or `1`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` for logic high.
    #[inline]
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 == 1
    }
}

impl From<u8> for Bit {
    #[inline]
    fn from(raw: u8) -> Self {
        Self::new(raw)
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(b: bool) -> Self {
        Self(b as u8)
    }
}

impl From<Bit> for u8 {
    #[inline]
    fn from(b: Bit) -> Self {
        b.0
    }
}

impl From<Bit> for bool {
    #[inline]
    fn from(b: Bit) -> Self {
        b.is_set()
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bit({})", self.0)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_to_low_bit() {
        for raw in 0..=255u8 {
            assert_eq!(Bit::new(raw).value(), raw & 1, "raw={}", raw);
        }
    }

    #[test]
    fn test_bool_conversions() {
        assert_eq!(Bit::from(true), Bit::ONE);
        assert_eq!(Bit::from(false), Bit::ZERO);
        assert!(bool::from(Bit::ONE));
        assert!(!bool::from(Bit::ZERO));
    }
}
