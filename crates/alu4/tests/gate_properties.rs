//! Property-based tests for gates and units.
//!
//! Uses proptest to verify the algebraic identities of the gate-level
//! circuits. Raw inputs are deliberately left un-normalized.

use alu4::gate::{Bit, GatePrimitives, ScalarGates};
use alu4::register::{binary_to_decimal, decimal_to_binary, hex_char_to_value, hex_digit};
use alu4::unit::{BitwiseUnit, RippleCarryAdder, TwosComplement};
use alu4::Register;
use proptest::prelude::*;

fn reg(n: u8) -> Register {
    Register::from_value(n).unwrap()
}

// =============================================================================
// Gate Properties
// =============================================================================

proptest! {
    /// Every gate depends on bit 0 of its inputs only
    #[test]
    fn prop_gates_mask_raw_inputs(x: u8, y: u8) {
        let g = ScalarGates;
        let (a, b) = (Bit::new(x), Bit::new(y));
        let (lx, ly) = (x & 1 == 1, y & 1 == 1);

        prop_assert_eq!(g.and(a, b).is_set(), lx && ly);
        prop_assert_eq!(g.or(a, b).is_set(), lx || ly);
        prop_assert_eq!(g.xor(a, b).is_set(), lx != ly);
        prop_assert_eq!(g.not(a).is_set(), !lx);
    }

    /// Gate outputs are always 0 or 1
    #[test]
    fn prop_gate_outputs_normalized(x: u8, y: u8) {
        let g = ScalarGates;
        let (a, b) = (Bit::new(x), Bit::new(y));
        for out in [g.and(a, b), g.or(a, b), g.xor(a, b), g.not(a)] {
            prop_assert!(out.value() <= 1);
        }
    }

    /// De Morgan: NOT(AND(a, b)) = OR(NOT(a), NOT(b))
    #[test]
    fn prop_de_morgan(x: u8, y: u8) {
        let g = ScalarGates;
        let (a, b) = (Bit::new(x), Bit::new(y));
        prop_assert_eq!(g.nand(a, b), g.or(g.not(a), g.not(b)));
        prop_assert_eq!(g.nor(a, b), g.and(g.not(a), g.not(b)));
    }
}

// =============================================================================
// Codec Properties
// =============================================================================

proptest! {
    /// binary_to_decimal(decimal_to_binary(n)) = n
    #[test]
    fn prop_register_roundtrip(n in 0u32..16) {
        let r = decimal_to_binary(n).unwrap();
        prop_assert_eq!(binary_to_decimal(r) as u32, n);
    }

    /// hex_char_to_value(hex_digit(n)) = n
    #[test]
    fn prop_hex_roundtrip(n in 0u8..16) {
        prop_assert_eq!(hex_char_to_value(hex_digit(n).unwrap()).unwrap(), n);
    }

    /// Values that do not fit in 4 bits are rejected, never masked
    #[test]
    fn prop_out_of_range_rejected(n in 16u32..) {
        prop_assert!(decimal_to_binary(n).is_err());
    }
}

// =============================================================================
// Unit Properties
// =============================================================================

proptest! {
    /// add(a, b) = (a + b) mod 16
    #[test]
    fn prop_add_mod_16(a in 0u8..16, b in 0u8..16) {
        let sum = RippleCarryAdder::add(&ScalarGates, reg(a), reg(b));
        prop_assert_eq!(sum.value(), (a + b) % 16);
    }

    /// add(a, b) = add(b, a)
    #[test]
    fn prop_add_commutative(a in 0u8..16, b in 0u8..16) {
        let g = ScalarGates;
        prop_assert_eq!(
            RippleCarryAdder::add(&g, reg(a), reg(b)),
            RippleCarryAdder::add(&g, reg(b), reg(a))
        );
    }

    /// add(a, negate(a)) = 0
    #[test]
    fn prop_add_inverse(a in 0u8..16) {
        let g = ScalarGates;
        let neg = TwosComplement::negate(&g, reg(a));
        prop_assert_eq!(RippleCarryAdder::add(&g, reg(a), neg), Register::ZERO);
    }

    /// bitwise AND matches a & b
    #[test]
    fn prop_and_matches_native(a in 0u8..16, b in 0u8..16) {
        prop_assert_eq!(BitwiseUnit::and(&ScalarGates, reg(a), reg(b)).value(), a & b);
    }

    /// bitwise NOT is 15 - a
    #[test]
    fn prop_not_is_complement(a in 0u8..16) {
        prop_assert_eq!(BitwiseUnit::not(&ScalarGates, reg(a)).value(), 15 - a);
    }

    /// signed_value agrees with native i8 reinterpretation of the low nibble
    #[test]
    fn prop_signed_value(a in 0u8..16) {
        let expected = ((a << 4) as i8) >> 4;
        prop_assert_eq!(TwosComplement::signed_value(&ScalarGates, reg(a)), expected);
    }
}
