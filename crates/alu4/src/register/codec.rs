//! Conversions between integers, registers and hex characters.
//!
//! Every entry point rejects values that do not fit in 4 bits with
//! [`AluError::OutOfRange`] instead of masking them.

use super::{Register, REG_SIZE};
use crate::error::{AluError, Result};
use crate::gate::Bit;

/// The 16 hex characters, indexed by value.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// 4-bit unsigned binary expansion of `n`, most significant bit first.
///
/// # Errors
///
/// Returns [`AluError::OutOfRange`] if `n > 15`.
///
/// # Example
///
/// ```
/// use alu4::register::decimal_to_binary;
///
/// let r = decimal_to_binary(6).unwrap();
/// assert_eq!(r.to_string(), "0110");
/// assert!(decimal_to_binary(16).is_err());
/// ```
pub fn decimal_to_binary(n: u32) -> Result<Register> {
    if n > Register::MAX_VALUE as u32 {
        return Err(AluError::OutOfRange { value: n });
    }

    let mut bits = [Bit::ZERO; REG_SIZE];
    let mut num = n;
    let mut index = REG_SIZE;
    while num > 0 {
        index -= 1;
        bits[index] = Bit::new((num % 2) as u8);
        num /= 2;
    }
    Ok(Register::from_bits(bits))
}

/// Unsigned positional value of `r`, in `0..=15`.
#[must_use]
pub fn binary_to_decimal(r: Register) -> u8 {
    r.bits()
        .iter()
        .fold(0u8, |acc, bit| (acc << 1) | bit.value())
}

/// Hex character for `n`.
///
/// # Errors
///
/// Returns [`AluError::OutOfRange`] if `n > 15`.
pub fn hex_digit(n: u8) -> Result<char> {
    HEX_DIGITS
        .get(n as usize)
        .map(|&c| c as char)
        .ok_or(AluError::OutOfRange { value: n as u32 })
}

/// Value of an uppercase hex character.
///
/// # Errors
///
/// Returns [`AluError::InvalidHexDigit`] for anything outside `0-9` / `A-F`,
/// lowercase letters included.
pub fn hex_char_to_value(c: char) -> Result<u8> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(AluError::InvalidHexDigit { digit: c }),
    }
}
