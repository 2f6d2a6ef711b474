//! 4-bit registers and the register codec.
//!
//! A [`Register`] is a fixed array of 4 [`Bit`]s with index 0 the most
//! significant bit. It is a `Copy` value type: units read their operands and
//! return a fresh register, so no stage can corrupt a caller's input.
//!
//! # Example
//!
//! ```
//! use alu4::Register;
//!
//! let r = Register::from_value(0xA).unwrap();
//! assert_eq!(r.to_string(), "1010");
//! assert_eq!(r.hex_digit(), 'A');
//! assert!(r.sign_bit().is_set());
//! ```

mod codec;

pub use codec::{binary_to_decimal, decimal_to_binary, hex_char_to_value, hex_digit, HEX_DIGITS};

use crate::error::Result;
use crate::gate::Bit;
use core::fmt;

/// Register width in bits.
pub const REG_SIZE: usize = 4;

/// A 4-bit register, most significant bit first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Register([Bit; REG_SIZE]);

impl Register {
    /// All bits clear.
    pub const ZERO: Self = Self([Bit::ZERO; REG_SIZE]);

    /// `0001`
    pub const ONE: Self = Self([Bit::ZERO, Bit::ZERO, Bit::ZERO, Bit::ONE]);

    /// Largest unsigned value a register holds.
    pub const MAX_VALUE: u8 = 0xF;

    /// Builds a register from its bits, most significant first.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: [Bit; REG_SIZE]) -> Self {
        Self(bits)
    }

    /// Builds a register from an unsigned value.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::OutOfRange`](crate::AluError::OutOfRange) if
    /// `value > 15`.
    pub fn from_value(value: u8) -> Result<Self> {
        decimal_to_binary(value as u32)
    }

    /// Builds a register from one uppercase hex character.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidHexDigit`](crate::AluError::InvalidHexDigit)
    /// if `c` is not `0-9` / `A-F`.
    pub fn from_hex_char(c: char) -> Result<Self> {
        Self::from_value(hex_char_to_value(c)?)
    }

    /// The bits, most significant first.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> [Bit; REG_SIZE] {
        self.0
    }

    /// Bit at `index` (0 = most significant), or `None` past the end.
    #[inline]
    #[must_use]
    pub fn bit(self, index: usize) -> Option<Bit> {
        self.0.get(index).copied()
    }

    /// The most significant bit, which is the two's-complement sign.
    #[inline]
    #[must_use]
    pub const fn sign_bit(self) -> Bit {
        self.0[0]
    }

    /// Unsigned value, `0..=15`.
    #[inline]
    #[must_use]
    pub fn value(self) -> u8 {
        binary_to_decimal(self)
    }

    /// Hex character of the unsigned value.
    #[must_use]
    pub fn hex_digit(self) -> char {
        HEX_DIGITS[self.value() as usize] as char
    }
}

impl From<[Bit; REG_SIZE]> for Register {
    fn from(bits: [Bit; REG_SIZE]) -> Self {
        Self(bits)
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Register({})", self)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0 {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}
