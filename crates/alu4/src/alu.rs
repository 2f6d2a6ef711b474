//! The ALU: dispatches an instruction to its unit and formats the result.
//!
//! # Pipeline
//!
//! ```text
//! Instruction ──► unit (adder / AND / NOT) ──► result register
//!                                               │
//!                        ADD and sign bit set ──┴──► two's-complement decoder
//! ```
//!
//! The hex digit of an [`Outcome`] always comes from the unsigned result
//! register. Only the decimal annotation of an ADD goes through the decoder.

use crate::gate::{GatePrimitives, ScalarGates};
use crate::opcode::{Instruction, Opcode};
use crate::register::Register;
use crate::unit::{BitwiseUnit, RippleCarryAdder, TwosComplement};
use core::fmt;

/// A 4-bit ALU over a gate set.
#[derive(Debug, Clone, Default)]
pub struct Alu<G = ScalarGates> {
    gates: G,
}

impl Alu {
    /// ALU over [`ScalarGates`].
    #[must_use]
    pub const fn new() -> Self {
        Self { gates: ScalarGates }
    }
}

impl<G: GatePrimitives> Alu<G> {
    /// ALU over a custom gate set.
    pub const fn with_gates(gates: G) -> Self {
        Self { gates }
    }

    /// The gate set this ALU evaluates with.
    pub const fn gates(&self) -> &G {
        &self.gates
    }

    /// Consumes the ALU and returns its gate set.
    pub fn into_gates(self) -> G {
        self.gates
    }

    /// Runs one instruction.
    ///
    /// # Example
    ///
    /// ```
    /// use alu4::{Alu, Instruction, Register};
    ///
    /// let alu = Alu::new();
    /// let a = Register::from_value(9).unwrap();
    /// let b = Register::from_value(1).unwrap();
    ///
    /// let out = alu.execute(Instruction::Add(a, b));
    /// assert_eq!(out.to_string(), "-> 0xA = -6");
    /// ```
    pub fn execute(&self, instruction: Instruction) -> Outcome {
        let opcode = instruction.opcode();
        tracing::debug!(%instruction, control_code = opcode.control_code(), "dispatch");

        let (result, decimal) = match instruction {
            Instruction::Add(a, b) => {
                let sum = RippleCarryAdder::add(&self.gates, a, b);
                (sum, Some(TwosComplement::signed_value(&self.gates, sum)))
            }
            Instruction::And(a, b) => {
                let r = BitwiseUnit::and(&self.gates, a, b);
                (r, Some(r.value() as i8))
            }
            Instruction::Not(a) => (BitwiseUnit::not(&self.gates, a), None),
        };

        Outcome {
            opcode,
            result,
            decimal,
        }
    }
}

/// Result of one ALU operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outcome {
    /// The operation that ran.
    pub opcode: Opcode,
    /// Unsigned result register.
    pub result: Register,
    /// Signed value for ADD, unsigned value for AND, `None` for NOT.
    pub decimal: Option<i8>,
}

impl Outcome {
    /// Hex digit of the unsigned result.
    #[must_use]
    pub fn hex_digit(&self) -> char {
        self.result.hex_digit()
    }
}

impl fmt::Display for Outcome {
    /// `-> 0x<H> = <D>` for ADD and AND, `-> 0x<H>` for NOT.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decimal {
            Some(d) => write!(f, "-> 0x{} = {}", self.hex_digit(), d),
            None => write!(f, "-> 0x{}", self.hex_digit()),
        }
    }
}
