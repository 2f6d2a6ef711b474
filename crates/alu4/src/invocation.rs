//! Command-line invocation contract.
//!
//! ```text
//! alu -a 0xH 0xH     ADD
//! alu -d 0xH 0xH     AND
//! alu -d 0xH         NOT
//! alu -<c> 0xH       NOT (any other flag character)
//! ```
//!
//! Operands are `0x` followed by exactly one uppercase hex digit. Parsing is
//! strict: anything the contract does not describe is rejected with an
//! [`AluError`] rather than guessed at.

use crate::error::{AluError, Result};
use crate::opcode::{Instruction, Opcode};
use crate::register::{hex_char_to_value, Register};

/// Prefix every hex literal carries.
pub const HEX_PREFIX: &str = "0x";

/// Parses the arguments that follow the program name.
///
/// # Errors
///
/// - [`AluError::MissingArgument`] if the flag or a required operand is absent
/// - [`AluError::InvalidFlag`] if the flag is not `-` plus one character
/// - [`AluError::UnexpectedArgument`] if more operands than the operation
///   takes are given
/// - [`AluError::InvalidHexLiteral`] if an operand is malformed
///
/// # Example
///
/// ```
/// use alu4::invocation::parse;
/// use alu4::{Instruction, Opcode};
///
/// let insn = parse(&["-d", "0x5"]).unwrap();
/// assert_eq!(insn.opcode(), Opcode::Not);
/// assert!(parse(&["-a", "0x5"]).is_err());
/// ```
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Instruction> {
    let (flag, operands) = match args.split_first() {
        Some((flag, rest)) => (flag.as_ref(), rest),
        None => return Err(AluError::MissingArgument { what: "flag" }),
    };

    let opcode = parse_flag(flag)?;

    let first = match operands.first() {
        Some(s) => s.as_ref(),
        None => {
            return Err(AluError::MissingArgument {
                what: "first operand",
            })
        }
    };
    let second: Option<&str> = operands.get(1).map(AsRef::as_ref);

    // Positions are 1-based on the command line, flag at 1.
    if let Some(extra) = operands.get(2) {
        return Err(AluError::UnexpectedArgument {
            argument: extra.as_ref().to_string(),
            position: 4,
        });
    }

    match (opcode, second) {
        (Opcode::Add, Some(second)) => Ok(Instruction::Add(
            parse_hex_literal(first)?,
            parse_hex_literal(second)?,
        )),
        (Opcode::Add, None) => Err(AluError::MissingArgument {
            what: "second operand",
        }),
        (Opcode::And, Some(second)) => Ok(Instruction::And(
            parse_hex_literal(first)?,
            parse_hex_literal(second)?,
        )),
        // `-d` with a single operand is NOT
        (Opcode::And, None) | (Opcode::Not, None) => {
            Ok(Instruction::Not(parse_hex_literal(first)?))
        }
        (Opcode::Not, Some(second)) => Err(AluError::UnexpectedArgument {
            argument: second.to_string(),
            position: 3,
        }),
    }
}

/// Decodes a `-<c>` flag.
///
/// Any single character is accepted; see [`Opcode::from_flag`].
///
/// # Errors
///
/// Returns [`AluError::InvalidFlag`] unless `flag` is one dash followed by
/// exactly one character.
pub fn parse_flag(flag: &str) -> Result<Opcode> {
    let mut chars = flag.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(c), None) if c != '-' => Ok(Opcode::from_flag(c)),
        _ => Err(AluError::InvalidFlag {
            flag: flag.to_string(),
        }),
    }
}

/// Parses a `0xH` literal into a register.
///
/// # Errors
///
/// Returns [`AluError::InvalidHexLiteral`] unless `literal` is `0x` followed
/// by exactly one of `0-9` / `A-F`.
pub fn parse_hex_literal(literal: &str) -> Result<Register> {
    let invalid = || AluError::InvalidHexLiteral {
        literal: literal.to_string(),
    };

    let digits = literal.strip_prefix(HEX_PREFIX).ok_or_else(invalid)?;
    let mut chars = digits.chars();
    let digit = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(invalid()),
    };

    let value = hex_char_to_value(digit).map_err(|_| invalid())?;
    Register::from_value(value)
}

/// Parses the arguments and runs them on a scalar [`Alu`](crate::Alu).
///
/// # Errors
///
/// Same as [`parse`].
pub fn run<S: AsRef<str>>(args: &[S]) -> Result<crate::Outcome> {
    let instruction = parse(args)?;
    Ok(crate::Alu::new().execute(instruction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(n: u8) -> Register {
        Register::from_value(n).unwrap()
    }

    #[test]
    fn test_parse_add_and() {
        assert_eq!(
            parse(&["-a", "0x3", "0x4"]),
            Ok(Instruction::Add(reg(3), reg(4)))
        );
        assert_eq!(
            parse(&["-d", "0xC", "0xA"]),
            Ok(Instruction::And(reg(0xC), reg(0xA)))
        );
    }

    #[test]
    fn test_parse_not_forms() {
        assert_eq!(parse(&["-d", "0x5"]), Ok(Instruction::Not(reg(5))));
        assert_eq!(parse(&["-n", "0x5"]), Ok(Instruction::Not(reg(5))));
        assert_eq!(parse(&["-z", "0x0"]), Ok(Instruction::Not(reg(0))));
    }

    #[test]
    fn test_missing_arguments() {
        let empty: [&str; 0] = [];
        assert_eq!(
            parse(&empty),
            Err(AluError::MissingArgument { what: "flag" })
        );
        assert_eq!(
            parse(&["-a"]),
            Err(AluError::MissingArgument {
                what: "first operand"
            })
        );
        assert_eq!(
            parse(&["-a", "0x1"]),
            Err(AluError::MissingArgument {
                what: "second operand"
            })
        );
    }

    #[test]
    fn test_unexpected_arguments() {
        assert_eq!(
            parse(&["-n", "0x1", "0x2"]),
            Err(AluError::UnexpectedArgument {
                argument: "0x2".to_string(),
                position: 3
            })
        );
        assert_eq!(
            parse(&["-a", "0x1", "0x2", "0x3"]),
            Err(AluError::UnexpectedArgument {
                argument: "0x3".to_string(),
                position: 4
            })
        );
    }

    #[test]
    fn test_invalid_flags() {
        for flag in ["a", "-", "--", "-ad", "--add", ""] {
            assert_eq!(
                parse_flag(flag),
                Err(AluError::InvalidFlag {
                    flag: flag.to_string()
                }),
                "flag {:?}",
                flag
            );
        }
    }

    #[test]
    fn test_invalid_hex_literals() {
        for literal in ["0xa", "0xG", "3", "0x", "0x10", "0X3", "x3", "0x3 ", "1x3"] {
            assert_eq!(
                parse_hex_literal(literal),
                Err(AluError::InvalidHexLiteral {
                    literal: literal.to_string()
                }),
                "literal {:?}",
                literal
            );
        }
    }

    #[test]
    fn test_all_valid_literals() {
        for n in 0..=15u8 {
            let literal = format!("0x{}", reg(n).hex_digit());
            assert_eq!(parse_hex_literal(&literal), Ok(reg(n)));
        }
    }

    #[test]
    fn test_run() {
        assert_eq!(run(&["-a", "0x9", "0x1"]).unwrap().to_string(), "-> 0xA = -6");
        assert_eq!(run(&["-d", "0x5"]).unwrap().to_string(), "-> 0xA");
        assert!(run(&["-a", "0xZ", "0x1"]).is_err());
    }
}
