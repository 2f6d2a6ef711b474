//! alu4 - a 4-bit ALU simulated at gate level
//!
//! Every operation is composed from four gate primitives (AND, OR, XOR, NOT)
//! acting on single bits. The ALU holds 4-bit registers and performs one of
//! three operations:
//!
//! | Operation | Unit | Decimal shown |
//! |-----------|------|---------------|
//! | ADD | ripple-carry adder | signed (two's complement) |
//! | AND | bitwise AND | unsigned |
//! | NOT | bitwise NOT | none |
//!
//! # Overflow Policy
//!
//! The adder drops its final carry. Sums are exact modulo 16 and no overflow
//! is reported.
//!
//! # Example
//!
//! ```
//! use alu4::{Alu, Instruction, Register};
//!
//! let alu = Alu::new();
//! let a = Register::from_value(0xC).unwrap();
//! let b = Register::from_value(0xA).unwrap();
//!
//! assert_eq!(alu.execute(Instruction::And(a, b)).to_string(), "-> 0x8 = 8");
//! assert_eq!(alu.execute(Instruction::Add(a, b)).to_string(), "-> 0x6 = 6");
//! ```
//!
//! # Example: Command-line Contract
//!
//! ```
//! use alu4::invocation;
//!
//! let out = invocation::run(&["-a", "0x9", "0x1"]).unwrap();
//! assert_eq!(out.to_string(), "-> 0xA = -6");
//! ```
//!
//! # Design Principles
//!
//! - **Gates only**: units never use native integer arithmetic on bits
//! - **Value registers**: `Register` is `Copy`; no unit mutates its input
//! - **Swappable gates**: units are generic over [`gate::GatePrimitives`]

#![deny(missing_docs, clippy::missing_errors_doc)]

// Single-bit gates and the trace recorder
pub mod gate;

// 4-bit registers and the hex/binary codec
pub mod register;

// Adder, bitwise and two's-complement units
pub mod unit;

// Opcode decoding and instructions
pub mod opcode;

// Dispatch and output formatting
mod alu;

// Command-line contract
pub mod invocation;

mod error;

pub use alu::{Alu, Outcome};
pub use error::{AluError, Result};
pub use gate::{Bit, Gate, GatePrimitives, ScalarGates, TracingGates};
pub use opcode::{Instruction, Opcode};
pub use register::{Register, REG_SIZE};

/// Prelude module for convenient imports.
///
/// ```
/// use alu4::prelude::*;
/// ```
pub mod prelude {
    pub use crate::alu::{Alu, Outcome};
    pub use crate::error::{AluError, Result};
    pub use crate::gate::{Bit, Gate, GatePrimitives, GateTrace, ScalarGates, TracingGates};
    pub use crate::opcode::{Instruction, Opcode};
    pub use crate::register::{
        binary_to_decimal, decimal_to_binary, hex_char_to_value, hex_digit, Register,
    };
    pub use crate::unit::{BitwiseUnit, RippleCarryAdder, TwosComplement};
}
