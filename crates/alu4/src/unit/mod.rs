//! ALU units composed from gate primitives.
//!
//! - [`RippleCarryAdder`]: 4-bit addition, final carry dropped
//! - [`BitwiseUnit`]: element-wise AND and NOT
//! - [`TwosComplement`]: negation and signed decoding
//!
//! Every unit is a stateless namespace whose functions take the gate set as
//! their first argument.

pub mod bitwise;
pub mod ripple_carry;
pub mod twos_complement;

pub use bitwise::BitwiseUnit;
pub use ripple_carry::RippleCarryAdder;
pub use twos_complement::TwosComplement;
