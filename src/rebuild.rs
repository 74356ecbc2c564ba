//! Reconstruction of the minimal gate tree from a split plan.
//!
//! Walks the backtracking table and the layer's leaf expressions and emits
//! the gate tree the planner's costs describe, applying the De Morgan
//! cancellation that makes the advantage accounting valid:
//!
//! ```text
//! A∨B = (A∨B)'' = (A'∧B')' = (A ⊼ A) ⊼ (B ⊼ B)     double-negation branch
//! A∨B = (A∨B)'' = (A ⊽ B)' = (A ⊽ B) ⊽ (A ⊽ B)     direct branch
//! A∧B = (A∧B)'' = (A ⊼ B)' = (A ⊼ B) ⊼ (A ⊼ B)     direct branch
//! A∧B = (A∧B)'' = (A'∨B')' = (A ⊽ A) ⊽ (B ⊽ B)     double-negation branch
//! ```
//!
//! In the double-negation branch each operand is pre-negated, so an operand
//! that is already a negation can drop both gates instead of stacking a
//! second one.

use crate::expr::Expr;
use crate::gate::GateKind;
use crate::planner::SplitPlan;

/// The one-gate negation of an expression: `X op X`.
pub fn negate(expr: Expr, target: GateKind) -> Expr {
    Expr::gate(target, expr.clone(), expr)
}

/// The negation of a single base unit, cancelling an existing one if present.
///
/// A bare literal has no negation to cancel, so it gets its one self-gate.
/// Any gate node was already counted as pre-negated by the planner's
/// advantage accounting: stripping its top self-gate layer (taking the left
/// operand) is its negation at zero extra gates. In particular
/// `cancel_double_negation(negate(X)) == X`.
pub fn cancel_double_negation(expr: &Expr, target: GateKind) -> Expr {
    match expr {
        Expr::Literal(_) => negate(expr.clone(), target),
        Expr::Gate { left, .. } => (**left).clone(),
    }
}

/// Rebuilds the minimal gate tree for a planned sequence of leaves.
///
/// `dnf_shaped` states whether this layer combines its units with the
/// disjunction of the two dual operators. The double-negation branch is
/// taken when `target.is_nand() == dnf_shaped`, which coincides with the
/// advantage flag the sequence was planned under.
///
/// # Panics
///
/// Panics if `leaves` is empty or its length differs from the plan's.
pub fn reconstruct(plan: &SplitPlan, leaves: &[Expr], target: GateKind, dnf_shaped: bool) -> Expr {
    assert_eq!(
        plan.len(),
        leaves.len(),
        "One leaf expression per planned unit is required"
    );
    let double_negation = target.is_nand() == dnf_shaped;
    build(plan, leaves, target, double_negation, 0, plan.len() - 1)
}

fn build(
    plan: &SplitPlan,
    leaves: &[Expr],
    target: GateKind,
    double_negation: bool,
    lo: usize,
    hi: usize,
) -> Expr {
    if lo == hi {
        return leaves[lo].clone();
    }

    let k = plan.split(lo, hi);
    let left = build(plan, leaves, target, double_negation, lo, k);
    let right = build(plan, leaves, target, double_negation, k + 1, hi);

    let (first_half, second_half) = if double_negation {
        let first = if k == lo {
            cancel_double_negation(&left, target)
        } else {
            negate(left, target)
        };
        let second = if k + 1 == hi {
            cancel_double_negation(&right, target)
        } else {
            negate(right, target)
        };
        (first, second)
    } else {
        // One physical sub-expression reused as both operands.
        let inner = Expr::gate(target, left, right);
        (inner.clone(), inner)
    };

    Expr::gate(target, first_half, second_half)
}
