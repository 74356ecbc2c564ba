//! Expression trees over literals and two-input gates.

use std::fmt;

use crate::error::Error;
use crate::gate::GateKind;
use crate::literal::Literal;
use crate::postfix::{to_postfix, Token};

/// An expression: a literal leaf or a two-input gate over two sub-expressions.
///
/// The tree shape encodes precedence; parentheses are a display concern and
/// are generated only at output time.
///
/// # Examples
///
/// ```
/// use gatemin::expr::Expr;
/// use gatemin::gate::GateKind;
/// use gatemin::literal::Literal;
///
/// let f = Expr::gate(
///     GateKind::Nand,
///     Expr::literal(Literal::positive(1)),
///     Expr::literal(Literal::positive(2)),
/// );
/// assert_eq!(f.to_string(), "x1\u{22BC}x2");
/// assert_eq!(f.gate_count(), 1);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Gate {
        kind: GateKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(lit: Literal) -> Self {
        Expr::Literal(lit)
    }

    pub fn gate(kind: GateKind, left: Expr, right: Expr) -> Self {
        Expr::Gate {
            kind,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }

    /// Number of physical gates in the expression.
    ///
    /// A gate whose two operands are the same sub-expression (a self-gate, or
    /// the reused inner gate of the direct reconstruction branch) owns that
    /// sub-circuit once: `(A ⊼ B) ⊼ (A ⊼ B)` is three occurrences of `⊼` in
    /// text but two physical gates.
    pub fn gate_count(&self) -> u64 {
        match self {
            Expr::Literal(_) => 0,
            Expr::Gate { left, right, .. } => {
                if left == right {
                    left.gate_count() + 1
                } else {
                    left.gate_count() + right.gate_count() + 1
                }
            }
        }
    }

    /// Literal occurrences in left-to-right order, duplicates included.
    pub fn literals(&self) -> Vec<Literal> {
        let mut out = Vec::new();
        self.collect_literals(&mut out);
        out
    }

    fn collect_literals(&self, out: &mut Vec<Literal>) {
        match self {
            Expr::Literal(lit) => out.push(*lit),
            Expr::Gate { left, right, .. } => {
                left.collect_literals(out);
                right.collect_literals(out);
            }
        }
    }

    /// Checks that the expression uses only the given gate kind.
    pub fn uses_only(&self, kind: GateKind) -> bool {
        match self {
            Expr::Literal(_) => true,
            Expr::Gate {
                kind: k,
                left,
                right,
            } => *k == kind && left.uses_only(kind) && right.uses_only(kind),
        }
    }

    /// Flattens the tree into an infix token stream with explicit grouping.
    ///
    /// Every gate is parenthesized except the outermost one, so the stream
    /// round-trips through the postfix converter regardless of precedence.
    pub fn to_infix_tokens(&self) -> Vec<Token> {
        let mut out = Vec::new();
        self.push_tokens(&mut out, true);
        out
    }

    fn push_tokens(&self, out: &mut Vec<Token>, top: bool) {
        match self {
            Expr::Literal(lit) => out.push(Token::Literal(*lit)),
            Expr::Gate { kind, left, right } => {
                if !top {
                    out.push(Token::Open);
                }
                left.push_tokens(out, false);
                out.push(Token::Op(*kind));
                right.push_tokens(out, false);
                if !top {
                    out.push(Token::Close);
                }
            }
        }
    }

    /// Converts the tree to postfix (reverse Polish) token form.
    pub fn to_postfix(&self) -> Result<Vec<Token>, Error> {
        to_postfix(&self.to_infix_tokens())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_operand(expr: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match expr {
                Expr::Literal(lit) => write!(f, "{}", lit),
                Expr::Gate { .. } => write!(f, "({})", expr),
            }
        }

        match self {
            Expr::Literal(lit) => write!(f, "{}", lit),
            Expr::Gate { kind, left, right } => {
                write_operand(left, f)?;
                write!(f, "{}", kind)?;
                write_operand(right, f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(v: i32) -> Expr {
        Expr::literal(Literal::from_dimacs(v))
    }

    #[test]
    fn test_display_grouping() {
        let inner = Expr::gate(GateKind::Nand, lit(1), lit(3));
        let f = Expr::gate(GateKind::Nand, inner, lit(2));
        assert_eq!(f.to_string(), "(x1\u{22BC}x3)\u{22BC}x2");
    }

    #[test]
    fn test_gate_count_shared() {
        let inner = Expr::gate(GateKind::Nand, lit(1), lit(2));
        let outer = Expr::gate(GateKind::Nand, inner.clone(), inner);
        assert_eq!(outer.gate_count(), 2);
    }

    #[test]
    fn test_gate_count_distinct() {
        let a = Expr::gate(GateKind::Nor, lit(1), lit(2));
        let b = Expr::gate(GateKind::Nor, lit(3), lit(4));
        let f = Expr::gate(GateKind::Nor, a, b);
        assert_eq!(f.gate_count(), 3);
    }

    #[test]
    fn test_literals_in_order() {
        let f = Expr::gate(GateKind::Or, Expr::gate(GateKind::And, lit(1), lit(3)), lit(-2));
        let vars: Vec<u32> = f.literals().iter().map(|l| l.var()).collect();
        assert_eq!(vars, vec![1, 3, 2]);
    }

    #[test]
    fn test_uses_only() {
        let f = Expr::gate(GateKind::Nand, lit(1), lit(2));
        assert!(f.uses_only(GateKind::Nand));
        assert!(!f.uses_only(GateKind::Nor));
        let g = Expr::gate(GateKind::Nand, f, Expr::gate(GateKind::And, lit(1), lit(2)));
        assert!(!g.uses_only(GateKind::Nand));
    }
}
