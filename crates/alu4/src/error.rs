//! Error taxonomy for the ALU and its driver.
//!
//! Every failure is fatal to the single invocation that produced it; nothing
//! is retried and no partial result is ever returned.

use thiserror::Error;

/// Result alias used by every fallible function in this crate.
pub type Result<T> = core::result::Result<T, AluError>;

/// Errors produced by the register codec, the opcode decoder and the
/// invocation parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AluError {
    /// Fewer arguments than the selected operation requires.
    #[error("missing argument: {what}")]
    MissingArgument {
        /// Name of the argument that was expected.
        what: &'static str,
    },

    /// More operands than any operation accepts.
    #[error("unexpected argument '{argument}' at position {position}")]
    UnexpectedArgument {
        /// The surplus argument as given.
        argument: String,
        /// 1-based position on the command line.
        position: usize,
    },

    /// Flag is not a single dash followed by a single character.
    #[error("invalid flag '{flag}': expected '-a', '-d' or '-<char>'")]
    InvalidFlag {
        /// The flag as given.
        flag: String,
    },

    /// Operand is not `0x` followed by one uppercase hex digit.
    #[error("invalid hex literal '{literal}': expected 0x0-0xF (uppercase digit)")]
    InvalidHexLiteral {
        /// The literal as given.
        literal: String,
    },

    /// Character outside `0-9` / `A-F`.
    #[error("invalid hex digit {digit:?}")]
    InvalidHexDigit {
        /// The offending character.
        digit: char,
    },

    /// Value does not fit in a 4-bit register.
    #[error("value {value} does not fit in a 4-bit register (0-15)")]
    OutOfRange {
        /// The offending value.
        value: u32,
    },

    /// Control code 0b11 (reserved) or wider than two bits.
    #[error("control code {code:#04b} is reserved")]
    ReservedControlCode {
        /// The offending code.
        code: u8,
    },
}
