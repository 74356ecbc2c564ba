//! End-to-end properties of the minimizer: the worked scenarios, optimality
//! against plain recursion, and exhaustive equivalence sweeps.

use test_log::test;

use gatemin::expr::Expr;
use gatemin::gate::GateKind;
use gatemin::literal::Literal;
use gatemin::minimize::minimize;
use gatemin::normal_form::{NormalForm, Shape};
use gatemin::planner::plan;
use gatemin::rebuild::negate;
use gatemin::verify::{equivalent, Equivalence};

fn assert_equivalent(nf: &NormalForm, minimized: &Expr) {
    let verdict = equivalent(&nf.to_expr(), minimized).unwrap();
    assert_eq!(
        verdict,
        Equivalence::Equal,
        "{} is not equivalent to {}",
        nf,
        minimized
    );
}

#[test]
fn scenario_a_nand_dnf() {
    // (x1 ∧ x3) ∨ x2' minimized to NAND-only form. The double-negation
    // cancellation beats the naive four-gate translation: the result is
    // (x1 ⊼ x3) ⊼ x2, two physical gates.
    let nf = NormalForm::from_dimacs([vec![1, 3], vec![-2]], Shape::Dnf);
    let expr = minimize(&nf, GateKind::Nand);

    assert!(expr.uses_only(GateKind::Nand));
    assert_eq!(expr.to_string(), "(x1\u{22BC}x3)\u{22BC}x2");
    assert!(expr.gate_count() <= 4);
    assert_eq!(expr.gate_count(), 2);
    assert_equivalent(&nf, &expr);
}

#[test]
fn scenario_b_nor_cnf() {
    // (x1 ∨ x2) ∧ (x1' ∨ x3) minimized to NOR-only form.
    let nf = NormalForm::from_dimacs([vec![1, 2], vec![-1, 3]], Shape::Cnf);
    let expr = minimize(&nf, GateKind::Nor);

    assert!(expr.uses_only(GateKind::Nor));
    assert_equivalent(&nf, &expr);

    // The second layer has the advantage here: both term negations cancel.
    assert_eq!(expr.gate_count(), 4);
}

#[test]
fn scenario_c_five_literal_term() {
    // A conjunction of five positive literals under NAND has no advantage;
    // every split shape costs exactly 2n - 2 = 8 physical gates, so the
    // planner can never do worse than the balanced tree.
    let nf = NormalForm::from_dimacs([vec![1, 2, 3, 4, 5]], Shape::Dnf);
    let expr = minimize(&nf, GateKind::Nand);

    assert!(expr.uses_only(GateKind::Nand));
    assert_eq!(expr.gate_count(), 8);
    assert_equivalent(&nf, &expr);
}

#[test]
fn single_literal_base_cases() {
    for target in [GateKind::Nand, GateKind::Nor] {
        for shape in [Shape::Dnf, Shape::Cnf] {
            let positive = NormalForm::from_dimacs([vec![4]], shape);
            let expr = minimize(&positive, target);
            assert_eq!(expr, Expr::literal(Literal::positive(4)));

            let negated = NormalForm::from_dimacs([vec![-4]], shape);
            let expr = minimize(&negated, target);
            assert_eq!(expr, negate(Expr::literal(Literal::positive(4)), target));
            assert_equivalent(&negated, &expr);
        }
    }
}

/// Plain recursion over the planner's cost rule: ground truth for the DP.
fn brute_force_cost(base: &[u64], lo: usize, hi: usize, advantage: bool) -> u64 {
    fn operand(sub: u64, single: bool, advantage: bool) -> u64 {
        let cost = 2 * sub + 1;
        if single && advantage && cost != 1 {
            cost / 4
        } else {
            cost
        }
    }
    if lo == hi {
        return base[lo];
    }
    (lo..hi)
        .map(|k| {
            operand(brute_force_cost(base, lo, k, advantage), k == lo, advantage)
                + operand(brute_force_cost(base, k + 1, hi, advantage), k + 1 == hi, advantage)
                + 1
        })
        .min()
        .unwrap()
}

#[test]
fn planner_is_optimal_over_all_split_trees() {
    // Base-cost sequences as the layers would produce them: 0/1 polarity
    // costs (first layer) and odd written costs (second layer).
    let mut cases: Vec<Vec<u64>> = Vec::new();
    for n in 1..=6 {
        // All polarity patterns for small n: exhaustive ground truth is cheap.
        for bits in 0..(1u32 << n) {
            cases.push((0..n).map(|i| u64::from(bits >> i & 1 == 1)).collect());
        }
    }
    cases.push(vec![3, 1, 11, 5, 1, 3, 7, 1, 3, 5, 1, 9]); // n = 12
    cases.push(vec![0, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0]);

    for base in &cases {
        for advantage in [false, true] {
            let dp = plan(base, advantage).root_cost();
            let reference = brute_force_cost(base, 0, base.len() - 1, advantage);
            if base.len() <= 6 {
                assert_eq!(dp, reference, "base = {:?}, advantage = {}", base, advantage);
            } else {
                assert!(dp <= reference, "base = {:?}, advantage = {}", base, advantage);
            }
        }
    }
}

#[test]
fn equivalence_sweep_small_forms() {
    // Every polarity combination of a fixed five-variable layout, both
    // shapes, both targets: 32 assignments checked per case.
    for shape in [Shape::Dnf, Shape::Cnf] {
        for bits in 0..(1u32 << 5) {
            let sign = |v: i32| if bits >> (v - 1) & 1 == 1 { -v } else { v };
            let nf = NormalForm::from_dimacs(
                [
                    vec![sign(1), sign(2)],
                    vec![sign(3), sign(4)],
                    vec![sign(5)],
                ],
                shape,
            );
            for target in [GateKind::Nand, GateKind::Nor] {
                let expr = minimize(&nf, target);
                assert!(expr.uses_only(target));
                assert_equivalent(&nf, &expr);
            }
        }
    }
}

#[test]
fn equivalence_ten_variables() {
    let layouts: Vec<Vec<Vec<i32>>> = vec![
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8], vec![9, 10]],
        vec![vec![-1, 2, -3], vec![-4, 5, -6], vec![7, -8], vec![-9, 10]],
        vec![vec![-1, -2, -3, -4, -5], vec![-6, -7, -8, -9, -10]],
        vec![vec![1], vec![2], vec![3], vec![4], vec![5], vec![6], vec![7], vec![8], vec![9], vec![10]],
    ];
    for terms in &layouts {
        for shape in [Shape::Dnf, Shape::Cnf] {
            let nf = NormalForm::from_dimacs(terms.clone(), shape);
            for target in [GateKind::Nand, GateKind::Nor] {
                let expr = minimize(&nf, target);
                assert!(expr.uses_only(target));
                assert_equivalent(&nf, &expr);
            }
        }
    }
}

#[test]
fn repeated_variables_across_terms() {
    // The same variable occurring in several terms must stay tied to one
    // assignment bit through the duplicating reconstruction.
    let nf = NormalForm::from_dimacs([vec![1, 2], vec![-1, 3], vec![1, -3]], Shape::Dnf);
    for target in [GateKind::Nand, GateKind::Nor] {
        let expr = minimize(&nf, target);
        assert_equivalent(&nf, &expr);
    }
}
