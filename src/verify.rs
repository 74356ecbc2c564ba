//! Exhaustive truth-table equivalence checking.
//!
//! The acceptance oracle for the optimizer's output: both expressions are
//! flattened to postfix form and evaluated under every assignment of their
//! variables. `2^n` evaluations, embarrassingly parallel, run sequentially
//! here.

use log::debug;

use crate::error::Error;
use crate::expr::Expr;
use crate::postfix::{eval_postfix, Token};

/// Verdict of an equivalence check.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Equivalence {
    /// Equal on every assignment.
    Equal,
    /// The first differing assignment, as a bit mask over the distinct
    /// variable ids in ascending order (bit i is the value of the i-th
    /// smallest variable).
    Differs { mask: u64 },
    /// The two expressions do not range over the same variable set, so
    /// comparing them is a meaningful negative verdict, not an error.
    InputMismatch,
}

impl Equivalence {
    pub fn holds(self) -> bool {
        self == Equivalence::Equal
    }
}

/// Compares two expressions on all assignments of their variables.
///
/// Assignments are keyed by variable id: every occurrence of one variable
/// receives the same bit, wherever and however often it occurs. Evaluation
/// goes through the postfix codec on both sides.
///
/// # Examples
///
/// ```
/// use gatemin::gate::GateKind;
/// use gatemin::minimize::minimize;
/// use gatemin::normal_form::{NormalForm, Shape};
/// use gatemin::verify::equivalent;
///
/// let nf = NormalForm::from_dimacs([vec![1, 3], vec![-2]], Shape::Dnf);
/// let minimized = minimize(&nf, GateKind::Nand);
/// assert!(equivalent(&nf.to_expr(), &minimized).unwrap().holds());
/// ```
///
/// # Panics
///
/// Panics if the expressions range over 64 or more variables (the mask is a
/// `u64`; exhaustive enumeration is long dead before that).
pub fn equivalent(lhs: &Expr, rhs: &Expr) -> Result<Equivalence, Error> {
    let vars = distinct_vars(lhs);
    if vars != distinct_vars(rhs) {
        debug!("equivalent: variable sets differ");
        return Ok(Equivalence::InputMismatch);
    }
    assert!(vars.len() < 64, "Too many variables to enumerate");

    let lhs_rpn = lhs.to_postfix()?;
    let rhs_rpn = rhs.to_postfix()?;

    for mask in 0..(1u64 << vars.len()) {
        let a = eval_assignment(&lhs_rpn, &vars, mask)?;
        let b = eval_assignment(&rhs_rpn, &vars, mask)?;
        if a != b {
            debug!("equivalent: differ on mask {:#b}", mask);
            return Ok(Equivalence::Differs { mask });
        }
    }
    Ok(Equivalence::Equal)
}

/// The full truth table of an expression: entry `mask` is its value under
/// that assignment of the distinct variables, smallest variable first.
pub fn truth_table(expr: &Expr) -> Result<Vec<bool>, Error> {
    let vars = distinct_vars(expr);
    assert!(vars.len() < 64, "Too many variables to enumerate");
    let rpn = expr.to_postfix()?;
    (0..(1u64 << vars.len()))
        .map(|mask| eval_assignment(&rpn, &vars, mask))
        .collect()
}

fn distinct_vars(expr: &Expr) -> Vec<u32> {
    let mut vars: Vec<u32> = expr.literals().iter().map(|lit| lit.var()).collect();
    vars.sort_unstable();
    vars.dedup();
    vars
}

fn eval_assignment(rpn: &[Token], vars: &[u32], mask: u64) -> Result<bool, Error> {
    let values: Vec<bool> = rpn
        .iter()
        .filter_map(|token| match token {
            Token::Literal(lit) => {
                let i = vars.binary_search(&lit.var()).expect("Known variable");
                Some(mask & (1 << i) != 0)
            }
            _ => None,
        })
        .collect();
    eval_postfix(rpn, &values)
}
