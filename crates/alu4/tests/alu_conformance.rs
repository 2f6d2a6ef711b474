//! Exhaustive conformance of the ALU over every operand pair.
//!
//! Each of the 256 ADD and AND pairs and the 16 NOT operands is checked
//! against native integer arithmetic, through both the typed API and the
//! command-line contract.

use alu4::gate::{Gate, TracingGates};
use alu4::{invocation, Alu, Instruction, Register};

fn reg(n: u8) -> Register {
    Register::from_value(n).unwrap()
}

fn literal(n: u8) -> String {
    format!("0x{}", reg(n).hex_digit())
}

/// Decimal the ADD line must show for `a + b`.
fn expected_add_decimal(a: u8, b: u8) -> i8 {
    let sum = (a + b) % 16;
    if sum & 0b1000 != 0 {
        -(16 - sum as i8)
    } else {
        sum as i8
    }
}

#[test]
fn add_all_pairs() {
    let alu = Alu::new();
    for a in 0..=15u8 {
        for b in 0..=15u8 {
            let out = alu.execute(Instruction::Add(reg(a), reg(b)));
            let sum = (a + b) % 16;

            assert_eq!(out.result.value(), sum, "{} + {}", a, b);
            assert_eq!(out.decimal, Some(expected_add_decimal(a, b)), "{} + {}", a, b);
            assert_eq!(
                out.to_string(),
                format!("-> 0x{:X} = {}", sum, expected_add_decimal(a, b))
            );
        }
    }
}

#[test]
fn and_all_pairs() {
    let alu = Alu::new();
    for a in 0..=15u8 {
        for b in 0..=15u8 {
            let out = alu.execute(Instruction::And(reg(a), reg(b)));
            assert_eq!(out.to_string(), format!("-> 0x{:X} = {}", a & b, a & b));
        }
    }
}

#[test]
fn not_all_operands() {
    let alu = Alu::new();
    for a in 0..=15u8 {
        let out = alu.execute(Instruction::Not(reg(a)));
        assert_eq!(out.to_string(), format!("-> 0x{:X}", 15 - a));
    }
}

#[test]
fn command_line_matches_typed_api() {
    let alu = Alu::new();
    for a in 0..=15u8 {
        for b in 0..=15u8 {
            let add = invocation::run(&["-a", literal(a).as_str(), literal(b).as_str()]).unwrap();
            assert_eq!(add, alu.execute(Instruction::Add(reg(a), reg(b))));

            let and = invocation::run(&["-d", literal(a).as_str(), literal(b).as_str()]).unwrap();
            assert_eq!(and, alu.execute(Instruction::And(reg(a), reg(b))));
        }
        let not = invocation::run(&["-d", literal(a).as_str()]).unwrap();
        assert_eq!(not, alu.execute(Instruction::Not(reg(a))));
    }
}

#[test]
fn documented_scenarios() {
    let cases: [(&[&str], &str); 6] = [
        (&["-a", "0x3", "0x4"], "-> 0x7 = 7"),
        (&["-a", "0xF", "0x1"], "-> 0x0 = 0"),
        (&["-a", "0x8", "0x8"], "-> 0x0 = 0"),
        (&["-a", "0x9", "0x1"], "-> 0xA = -6"),
        (&["-d", "0xC", "0xA"], "-> 0x8 = 8"),
        (&["-d", "0x5"], "-> 0xA"),
    ];
    for (args, expected) in cases {
        assert_eq!(invocation::run(args).unwrap().to_string(), expected, "{:?}", args);
    }
}

#[test]
fn gate_budget_per_operation() {
    // (instruction, gates when result is non-negative)
    let cases = [
        (Instruction::Add(reg(1), reg(2)), 20),
        (Instruction::And(reg(1), reg(2)), 4),
        (Instruction::Not(reg(1)), 4),
    ];
    for (instruction, expected) in cases {
        let alu = Alu::with_gates(TracingGates::scalar());
        alu.execute(instruction);
        let trace = alu.into_gates().into_trace();
        assert_eq!(trace.len(), expected, "{}", instruction);
    }

    let alu = Alu::with_gates(TracingGates::scalar());
    alu.execute(Instruction::Add(reg(7), reg(1)));
    let trace = alu.into_gates().into_trace();
    assert_eq!(trace.count(Gate::Not), 4);
    assert_eq!(trace.count(Gate::Xor), 16);
}
