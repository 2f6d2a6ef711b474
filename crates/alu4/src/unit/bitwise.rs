//! Element-wise AND and NOT units.

use crate::gate::{Bit, GatePrimitives};
use crate::register::{Register, REG_SIZE};

/// Bitwise logic unit.
pub struct BitwiseUnit;

impl BitwiseUnit {
    /// AND gate at each of the 4 positions; no carry.
    pub fn and<G>(gates: &G, a: Register, b: Register) -> Register
    where
        G: GatePrimitives + ?Sized,
    {
        let (a_bits, b_bits) = (a.bits(), b.bits());
        let result: [Bit; REG_SIZE] = core::array::from_fn(|i| gates.and(a_bits[i], b_bits[i]));
        Register::from_bits(result)
    }

    /// NOT gate at each of the 4 positions.
    pub fn not<G>(gates: &G, a: Register) -> Register
    where
        G: GatePrimitives + ?Sized,
    {
        Register::from_bits(a.bits().map(|bit| gates.not(bit)))
    }
}
