//! Operation selection.
//!
//! The ALU performs one of three operations. They are selected on the command
//! line by a flag character and, in hardware terms, by a 2-bit control field:
//!
//! | Opcode | Flag | Control code |
//! |--------|------|--------------|
//! | ADD | `a` | `00` |
//! | NOT | any other | `01` |
//! | AND | `d` | `10` |
//!
//! Control code `11` is reserved and has no [`Opcode`] value.

use crate::error::{AluError, Result};
use crate::register::Register;
use core::fmt;

/// One of the three ALU operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Opcode {
    /// Ripple-carry addition with signed decimal display.
    Add,
    /// Bitwise AND.
    And,
    /// Bitwise NOT (unary).
    Not,
}

impl Opcode {
    /// Decodes a flag character: `'a'` is ADD, `'d'` is AND, and every other
    /// character falls back to NOT.
    #[must_use]
    pub const fn from_flag(flag: char) -> Self {
        match flag {
            'a' => Opcode::Add,
            'd' => Opcode::And,
            _ => Opcode::Not,
        }
    }

    /// The 2-bit control code.
    #[must_use]
    pub const fn control_code(self) -> u8 {
        match self {
            Opcode::Add => 0b00,
            Opcode::Not => 0b01,
            Opcode::And => 0b10,
        }
    }

    /// Inverse of [`control_code`](Self::control_code).
    ///
    /// # Errors
    ///
    /// Returns [`AluError::ReservedControlCode`] for `0b11` and for any value
    /// wider than two bits.
    pub fn from_control_code(code: u8) -> Result<Self> {
        match code {
            0b00 => Ok(Opcode::Add),
            0b01 => Ok(Opcode::Not),
            0b10 => Ok(Opcode::And),
            _ => Err(AluError::ReservedControlCode { code }),
        }
    }

    /// Upper-case mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::And => "AND",
            Opcode::Not => "NOT",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}

/// An opcode together with its operands.
///
/// The operand count is part of the type, so a NOT can never carry a second
/// register and an ADD can never miss one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `a + b` modulo 16.
    Add(Register, Register),
    /// `a & b`.
    And(Register, Register),
    /// `!a`.
    Not(Register),
}

impl Instruction {
    /// The operation this instruction performs.
    #[must_use]
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Add(..) => Opcode::Add,
            Instruction::And(..) => Opcode::And,
            Instruction::Not(_) => Opcode::Not,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Add(a, b) | Instruction::And(a, b) => write!(
                f,
                "{} 0x{} 0x{}",
                self.opcode(),
                a.hex_digit(),
                b.hex_digit()
            ),
            Instruction::Not(a) => write!(f, "{} 0x{}", self.opcode(), a.hex_digit()),
        }
    }
}
