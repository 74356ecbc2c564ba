//! Two-input gate kinds and their truth tables.

use std::fmt;

/// A two-input boolean gate.
///
/// `And`/`Or` occur only in input expressions before optimization; the
/// optimizer's output is restricted to a single target kind (`Nand` or `Nor`)
/// plus literal leaves.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GateKind {
    And,
    Or,
    Nand,
    Nor,
}

impl GateKind {
    /// Evaluates the gate's truth table on two inputs.
    pub fn eval(self, a: bool, b: bool) -> bool {
        match self {
            GateKind::And => a && b,
            GateKind::Or => a || b,
            GateKind::Nand => !(a && b),
            GateKind::Nor => !(a || b),
        }
    }

    pub fn is_nand(self) -> bool {
        self == GateKind::Nand
    }

    pub fn is_nor(self) -> bool {
        self == GateKind::Nor
    }

    /// Precedence level used by the postfix converter.
    ///
    /// AND and NAND bind tighter than OR and NOR; there are no other levels.
    pub fn precedence(self) -> u8 {
        match self {
            GateKind::And | GateKind::Nand => 2,
            GateKind::Or | GateKind::Nor => 1,
        }
    }

    /// The De Morgan dual: AND <-> OR, NAND <-> NOR.
    pub fn dual(self) -> Self {
        match self {
            GateKind::And => GateKind::Or,
            GateKind::Or => GateKind::And,
            GateKind::Nand => GateKind::Nor,
            GateKind::Nor => GateKind::Nand,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GateKind::And => "\u{2227}",
            GateKind::Or => "\u{2228}",
            GateKind::Nand => "\u{22BC}",
            GateKind::Nor => "\u{22BD}",
        };
        write!(f, "{}", s)
    }
}
