//! The 4 gate primitives.
//!
//! Every ALU unit is composed from these operations and nothing else:
//!
//! - `and`: 1 iff both inputs are 1
//! - `or`: 1 iff at least one input is 1
//! - `xor`: 1 iff the inputs differ
//! - `not`: 1 iff the input is 0
//!
//! # Truth Tables
//!
//! ```text
//! a b | AND OR XOR      a | NOT
//! 0 0 |  0   0   0      0 |  1
//! 0 1 |  0   1   1      1 |  0
//! 1 0 |  0   1   1
//! 1 1 |  1   1   0
//! ```

use super::bit::Bit;
use core::fmt;

/// Identifies a gate primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Gate {
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
    /// Exclusive or.
    Xor,
    /// Inversion (unary).
    Not,
}

impl Gate {
    /// All gates, in declaration order.
    pub const ALL: [Gate; 4] = [Gate::And, Gate::Or, Gate::Xor, Gate::Not];

    /// Number of inputs the gate takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Gate::Not => 1,
            _ => 2,
        }
    }

    /// Upper-case mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Xor => "XOR",
            Gate::Not => "NOT",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}

/// The gate set every ALU unit is built on.
///
/// Units are generic over this trait, so swapping the implementation (for
/// instance for [`TracingGates`](super::TracingGates)) changes how gates are
/// evaluated without touching the circuits built from them.
///
/// # Example Implementation
///
/// ```
/// use alu4::gate::{Bit, GatePrimitives};
///
/// struct BoolGates;
///
/// impl GatePrimitives for BoolGates {
///     fn and(&self, a: Bit, b: Bit) -> Bit { Bit::from(a.is_set() && b.is_set()) }
///     fn or(&self, a: Bit, b: Bit) -> Bit { Bit::from(a.is_set() || b.is_set()) }
///     fn xor(&self, a: Bit, b: Bit) -> Bit { Bit::from(a != b) }
///     fn not(&self, a: Bit) -> Bit { Bit::from(!a.is_set()) }
/// }
///
/// assert_eq!(BoolGates.nand(Bit::ONE, Bit::ONE), Bit::ZERO);
/// ```
pub trait GatePrimitives {
    /// AND: 1 iff both inputs are 1.
    fn and(&self, a: Bit, b: Bit) -> Bit;

    /// OR: 1 iff at least one input is 1.
    fn or(&self, a: Bit, b: Bit) -> Bit;

    /// XOR: 1 iff the inputs differ.
    fn xor(&self, a: Bit, b: Bit) -> Bit;

    /// NOT: 1 iff the input is 0.
    fn not(&self, a: Bit) -> Bit;

    // -------------------------------------------------------------------------
    // Convenience gates with default implementations
    // -------------------------------------------------------------------------

    /// NAND: `NOT(AND(a, b))`
    #[inline(always)]
    fn nand(&self, a: Bit, b: Bit) -> Bit {
        self.not(self.and(a, b))
    }

    /// NOR: `NOT(OR(a, b))`
    #[inline(always)]
    fn nor(&self, a: Bit, b: Bit) -> Bit {
        self.not(self.or(a, b))
    }

    /// XNOR (equivalence): `NOT(XOR(a, b))`
    #[inline(always)]
    fn xnor(&self, a: Bit, b: Bit) -> Bit {
        self.not(self.xor(a, b))
    }
}

impl<G: GatePrimitives + ?Sized> GatePrimitives for &G {
    #[inline(always)]
    fn and(&self, a: Bit, b: Bit) -> Bit {
        (**self).and(a, b)
    }
    #[inline(always)]
    fn or(&self, a: Bit, b: Bit) -> Bit {
        (**self).or(a, b)
    }
    #[inline(always)]
    fn xor(&self, a: Bit, b: Bit) -> Bit {
        (**self).xor(a, b)
    }
    #[inline(always)]
    fn not(&self, a: Bit) -> Bit {
        (**self).not(a)
    }
}

/// Reference gate implementation.
///
/// Stateless and `Copy`; the default gate set of [`Alu`](crate::Alu).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarGates;

impl GatePrimitives for ScalarGates {
    #[inline(always)]
    fn and(&self, a: Bit, b: Bit) -> Bit {
        Bit::from(a.is_set() && b.is_set())
    }
    #[inline(always)]
    fn or(&self, a: Bit, b: Bit) -> Bit {
        Bit::from(a.is_set() || b.is_set())
    }
    #[inline(always)]
    fn xor(&self, a: Bit, b: Bit) -> Bit {
        Bit::from(a.is_set() != b.is_set())
    }
    #[inline(always)]
    fn not(&self, a: Bit) -> Bit {
        Bit::from(!a.is_set())
    }
}
