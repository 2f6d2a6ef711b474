//! Two's-complement decoder.
//!
//! Negation is expressed with the other units only:
//!
//! ```text
//! negate(r) = add(not(r), 0001)
//! ```
//!
//! The decoder works on its own copy of the register. The caller keeps the
//! unsigned sum for the hex digit and uses the negated magnitude only for the
//! signed decimal.

use super::bitwise::BitwiseUnit;
use super::ripple_carry::RippleCarryAdder;
use crate::gate::GatePrimitives;
use crate::register::Register;

/// Two's-complement decoder.
pub struct TwosComplement;

impl TwosComplement {
    /// `NOT(r) + 1` modulo 16.
    ///
    /// `negate(1000)` is `1000` again; the magnitude of -8 does not fit in a
    /// signed 4-bit register but reads correctly as unsigned 8.
    pub fn negate<G>(gates: &G, r: Register) -> Register
    where
        G: GatePrimitives + ?Sized,
    {
        let inverted = BitwiseUnit::not(gates, r);
        RippleCarryAdder::add(gates, inverted, Register::ONE)
    }

    /// Signed value of `r`, in `-8..=7`.
    ///
    /// Runs the negation circuit only when the sign bit is set.
    ///
    /// # Example
    ///
    /// ```
    /// use alu4::gate::ScalarGates;
    /// use alu4::unit::TwosComplement;
    /// use alu4::Register;
    ///
    /// let r = Register::from_value(0xA).unwrap();
    /// assert_eq!(TwosComplement::signed_value(&ScalarGates, r), -6);
    /// ```
    pub fn signed_value<G>(gates: &G, r: Register) -> i8
    where
        G: GatePrimitives + ?Sized,
    {
        if r.sign_bit().is_set() {
            let magnitude = Self::negate(gates, r);
            tracing::debug!(%r, %magnitude, "sign bit set, decoded magnitude");
            -(magnitude.value() as i8)
        } else {
            r.value() as i8
        }
    }
}
