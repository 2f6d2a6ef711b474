//! Ripple-carry adder built from gate primitives.
//!
//! Four full-adder stages are chained from the least significant bit
//! (index 3) to the most significant (index 0). Each stage is two half
//! adders joined by an OR:
//!
//! - Propagate: `p = XOR(a[i], b[i])`
//! - Sum bit: `s[i] = XOR(p, c_in)`
//! - Carry out: `c_out = OR(AND(c_in, p), AND(a[i], b[i]))`
//!
//! The carry out of index 0 is dropped. The unit models a 4-bit ALU without
//! overflow detection, so the sum is exact modulo 16.
//!
//! # Gate Count
//!
//! | Stage | XOR | AND | OR |
//! |-------|-----|-----|----|
//! | 1 bit | 2 | 2 | 1 |
//! | 4 bit | 8 | 8 | 4 |

use crate::gate::{Bit, GatePrimitives};
use crate::register::{Register, REG_SIZE};

/// Ripple-carry adder.
///
/// A namespace for the adder; it holds no state.
pub struct RippleCarryAdder;

impl RippleCarryAdder {
    /// One full-adder stage: returns `(sum, carry_out)`.
    ///
    /// Gates fire in the order XOR, XOR, AND, AND, OR.
    #[inline]
    pub fn full_adder<G>(gates: &G, a: Bit, b: Bit, carry_in: Bit) -> (Bit, Bit)
    where
        G: GatePrimitives + ?Sized,
    {
        let propagate = gates.xor(a, b);
        let sum = gates.xor(carry_in, propagate);
        let carry_out = gates.or(gates.and(carry_in, propagate), gates.and(a, b));
        (sum, carry_out)
    }

    /// Adds two registers modulo 16.
    ///
    /// # Example
    ///
    /// ```
    /// use alu4::gate::ScalarGates;
    /// use alu4::unit::RippleCarryAdder;
    /// use alu4::Register;
    ///
    /// let a = Register::from_value(9).unwrap();
    /// let b = Register::from_value(8).unwrap();
    /// assert_eq!(RippleCarryAdder::add(&ScalarGates, a, b).value(), 1);
    /// ```
    pub fn add<G>(gates: &G, a: Register, b: Register) -> Register
    where
        G: GatePrimitives + ?Sized,
    {
        let (a_bits, b_bits) = (a.bits(), b.bits());
        let mut result = [Bit::ZERO; REG_SIZE];
        let mut carry = Bit::ZERO;

        for index in (0..REG_SIZE).rev() {
            let (sum, carry_out) = Self::full_adder(gates, a_bits[index], b_bits[index], carry);
            tracing::trace!(
                index,
                a = a_bits[index].value(),
                b = b_bits[index].value(),
                carry_in = carry.value(),
                sum = sum.value(),
                carry_out = carry_out.value(),
                "full adder stage"
            );
            result[index] = sum;
            carry = carry_out;
        }

        Register::from_bits(result)
    }
}
