//! Entry points: two-layer minimization of a normal form.
//!
//! The first layer folds each term's literals into a minimal gate
//! expression; the second layer folds the resulting term expressions into
//! the minimal expression for the whole normal form. Both layers run the
//! same planner and reconstruction; only the base costs and the layer's
//! shape differ. The De Morgan advantage is available at exactly one of the
//! two layers for a given (target gate, input shape) combination.

use log::debug;

use crate::expr::Expr;
use crate::gate::GateKind;
use crate::literal::Literal;
use crate::normal_form::NormalForm;
use crate::planner::plan;
use crate::rebuild::{negate, reconstruct};

/// Plans and rebuilds one layer: the minimal target-kind expression
/// combining `leaves` in the given order.
///
/// `base_costs[i]` is the known written gate cost of `leaves[i]`;
/// `dnf_shaped` states whether this layer combines its units with the
/// disjunction of the two dual operators.
///
/// # Panics
///
/// Panics if the sequences are empty or of different lengths, or if
/// `target` is not NAND or NOR.
pub fn plan_and_build(
    leaves: &[Expr],
    base_costs: &[u64],
    target: GateKind,
    dnf_shaped: bool,
) -> Expr {
    layer(leaves, base_costs, target, dnf_shaped).0
}

fn layer(leaves: &[Expr], base_costs: &[u64], target: GateKind, dnf_shaped: bool) -> (Expr, u64) {
    assert!(
        target.is_nand() || target.is_nor(),
        "Target gate must be NAND or NOR"
    );
    assert_eq!(
        leaves.len(),
        base_costs.len(),
        "One base cost per leaf is required"
    );

    let advantage = target.is_nand() == dnf_shaped;
    let plan = plan(base_costs, advantage);
    let cost = plan.root_cost();
    let expr = reconstruct(&plan, leaves, target, dnf_shaped);
    debug!(
        "layer(n = {}, dnf_shaped = {}) -> cost {}, {} physical gates",
        leaves.len(),
        dnf_shaped,
        cost,
        expr.gate_count()
    );
    (expr, cost)
}

/// Minimizes a normal form into an equivalent expression built exclusively
/// from `target` gates and literal leaves.
///
/// Literal order within terms and term order within the form are preserved;
/// only contiguous splits are explored. A single positive literal comes back
/// unchanged (0 gates); a single negated literal becomes one self-gate.
///
/// # Examples
///
/// ```
/// use gatemin::gate::GateKind;
/// use gatemin::minimize::minimize;
/// use gatemin::normal_form::{NormalForm, Shape};
///
/// // (x1 ∧ x3) ∨ x2'  ->  (x1 ⊼ x3) ⊼ x2
/// let nf = NormalForm::from_dimacs([vec![1, 3], vec![-2]], Shape::Dnf);
/// let expr = minimize(&nf, GateKind::Nand);
/// assert_eq!(expr.to_string(), "(x1\u{22BC}x3)\u{22BC}x2");
/// assert_eq!(expr.gate_count(), 2);
/// ```
///
/// # Panics
///
/// Panics if `target` is not NAND or NOR.
pub fn minimize(nf: &NormalForm, target: GateKind) -> Expr {
    debug!("minimize({}, target = {})", nf, target);

    // A term of a DNF is a conjunction, i.e. CNF-shaped at its own level.
    let first_layer_dnf_shaped = !nf.is_dnf();

    let mut exprs = Vec::with_capacity(nf.terms().len());
    let mut costs = Vec::with_capacity(nf.terms().len());
    for term in nf.terms() {
        let leaves: Vec<Expr> = term
            .literals()
            .iter()
            .map(|&lit| term_leaf(lit, target))
            .collect();
        let base_costs: Vec<u64> = term
            .literals()
            .iter()
            .map(|lit| u64::from(lit.is_negated()))
            .collect();
        let (expr, cost) = layer(&leaves, &base_costs, target, first_layer_dnf_shaped);
        exprs.push(expr);
        costs.push(cost);
    }

    if exprs.len() == 1 {
        return exprs.pop().unwrap();
    }
    plan_and_build(&exprs, &costs, target, nf.is_dnf())
}

/// First-layer leaf for one literal: the bare variable, or its one-gate
/// negation when the literal is negated.
fn term_leaf(lit: Literal, target: GateKind) -> Expr {
    let var = Expr::literal(Literal::positive(lit.var()));
    if lit.is_negated() {
        negate(var, target)
    } else {
        var
    }
}
