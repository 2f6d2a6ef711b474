//! Gate primitives the ALU is built from.
//!
//! This module defines the single-bit value type and the 4 gate primitives
//! from which every ALU unit is composed:
//!
//! - `and`, `or`, `xor`: binary gates
//! - `not`: unary gate
//!
//! # Usage
//!
//! Units take any [`GatePrimitives`] implementation. [`ScalarGates`] is the
//! reference implementation; [`TracingGates`] records each evaluation.
//!
//! ```
//! use alu4::gate::{Bit, GatePrimitives, ScalarGates};
//!
//! let g = ScalarGates;
//! assert_eq!(g.xor(Bit::ONE, Bit::new(0b10)), Bit::ONE);
//! ```

pub mod bit;
pub mod primitives;
pub mod trace;

pub use bit::Bit;
pub use primitives::{Gate, GatePrimitives, ScalarGates};
pub use trace::{GateEvent, GateTrace, TracingGates};
