//! Gate-level trace recording.
//!
//! [`TracingGates`] wraps another gate set and records every evaluation in
//! order, so a computation can be replayed gate by gate. One full-adder stage
//! records five events (XOR, XOR, AND, AND, OR); a 4-bit ADD records twenty.
//!
//! ```
//! use alu4::gate::{Gate, TracingGates};
//! use alu4::{Alu, Instruction, Register};
//!
//! let alu = Alu::with_gates(TracingGates::scalar());
//! let a = Register::from_value(3).unwrap();
//! let b = Register::from_value(4).unwrap();
//! alu.execute(Instruction::Add(a, b));
//!
//! let trace = alu.gates().take_trace();
//! assert_eq!(trace.len(), 20);
//! assert_eq!(trace.count(Gate::Xor), 8);
//! ```

use super::bit::Bit;
use super::primitives::{Gate, GatePrimitives, ScalarGates};
use core::cell::RefCell;
use core::fmt;

/// One recorded gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GateEvent {
    /// Which gate fired.
    pub gate: Gate,
    /// First (or only) input.
    pub a: Bit,
    /// Second input; `None` for NOT.
    pub b: Option<Bit>,
    /// Gate output.
    pub output: Bit,
}

impl fmt::Display for GateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.b {
            Some(b) => write!(f, "{:<3} {} {} -> {}", self.gate, self.a, b, self.output),
            None => write!(f, "{:<3} {}   -> {}", self.gate, self.a, self.output),
        }
    }
}

/// An ordered record of gate evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GateTrace {
    events: Vec<GateEvent>,
}

impl GateTrace {
    /// Number of recorded evaluations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of evaluations of one gate kind.
    #[must_use]
    pub fn count(&self, gate: Gate) -> usize {
        self.events.iter().filter(|e| e.gate == gate).count()
    }

    /// The recorded events, in evaluation order.
    #[must_use]
    pub fn events(&self) -> &[GateEvent] {
        &self.events
    }
}

impl fmt::Display for GateTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            writeln!(f, "{:>3}: {}", i, event)?;
        }
        write!(f, "{} gates (", self.len())?;
        for (i, gate) in Gate::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", gate, self.count(gate))?;
        }
        f.write_str(")")
    }
}

/// Gate set that records every evaluation of an inner gate set.
///
/// Uses interior mutability, so it is not `Sync`; keep one per computation.
#[derive(Debug, Default)]
pub struct TracingGates<G = ScalarGates> {
    inner: G,
    events: RefCell<Vec<GateEvent>>,
}

impl TracingGates {
    /// Records evaluations of [`ScalarGates`].
    pub fn scalar() -> Self {
        Self::new(ScalarGates)
    }
}

impl<G: GatePrimitives> TracingGates<G> {
    /// Wraps `inner` with an empty trace.
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            events: RefCell::new(Vec::new()),
        }
    }

    /// Removes and returns everything recorded so far.
    pub fn take_trace(&self) -> GateTrace {
        GateTrace {
            events: self.events.take(),
        }
    }

    /// Consumes the recorder and returns its trace.
    pub fn into_trace(self) -> GateTrace {
        GateTrace {
            events: self.events.into_inner(),
        }
    }

    fn record(&self, gate: Gate, a: Bit, b: Option<Bit>, output: Bit) -> Bit {
        self.events.borrow_mut().push(GateEvent { gate, a, b, output });
        output
    }
}

impl<G: GatePrimitives> GatePrimitives for TracingGates<G> {
    fn and(&self, a: Bit, b: Bit) -> Bit {
        self.record(Gate::And, a, Some(b), self.inner.and(a, b))
    }

    fn or(&self, a: Bit, b: Bit) -> Bit {
        self.record(Gate::Or, a, Some(b), self.inner.or(a, b))
    }

    fn xor(&self, a: Bit, b: Bit) -> Bit {
        self.record(Gate::Xor, a, Some(b), self.inner.xor(a, b))
    }

    fn not(&self, a: Bit) -> Bit {
        self.record(Gate::Not, a, None, self.inner.not(a))
    }
}
