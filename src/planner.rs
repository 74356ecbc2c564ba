//! Interval dynamic program over contiguous splits of a sequence.
//!
//! Given an ordered sequence of sub-problems with known base costs, computes
//! for every contiguous range the minimum number of target-kind gates needed
//! to combine it into a single expression, together with the split point
//! achieving that minimum. Costs count gate symbols in the written-out form
//! (the direct combination `(A op B) op (A op B)` writes its inner gate
//! twice), which is the metric the De Morgan advantage adjustment is derived
//! for.
//!
//! The advantage flag states that the current layer's gate directly
//! implements the needed boolean operator once each operand is negated, so a
//! single-unit operand can be taken pre-negated: its written cost `2c + 1`
//! shrinks to `(2c + 1) / 4` (integer division), except when that cost is
//! already 1 (a bare literal, whose one negation gate is unavoidable).

use log::debug;

const INF: u64 = u64::MAX;

/// Cost and backtracking tables of one planning call.
///
/// Owned by the call that creates it and discarded once the reconstruction
/// has consumed it. Each cell is written exactly once, then read-only.
#[derive(Debug)]
pub struct SplitPlan {
    n: usize,
    cost: Vec<Vec<u64>>,
    split: Vec<Vec<usize>>,
}

impl SplitPlan {
    /// Number of units in the planned sequence.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Minimum written gate count realizing the range `[lo, hi]`.
    pub fn cost(&self, lo: usize, hi: usize) -> u64 {
        assert!(lo <= hi && hi < self.n);
        self.cost[lo][hi]
    }

    /// The split index `k` (`lo <= k < hi`) achieving `cost(lo, hi)`.
    /// Ties keep the lowest `k`.
    pub fn split(&self, lo: usize, hi: usize) -> usize {
        assert!(lo <= hi && hi < self.n);
        self.split[lo][hi]
    }

    /// Minimum written gate count for the whole sequence.
    pub fn root_cost(&self) -> u64 {
        self.cost(0, self.n - 1)
    }
}

/// Plans the optimal contiguous splits for a sequence of base costs.
///
/// Base cases are returned as supplied: 0 for a bare positive literal and 1
/// for a negated literal in the first layer, the per-term plan cost in the
/// second layer.
///
/// # Panics
///
/// Panics if `base` is empty (caller contract; the planner is total over any
/// non-empty sequence).
pub fn plan(base: &[u64], advantage: bool) -> SplitPlan {
    assert!(!base.is_empty(), "Planned sequences must be non-empty");
    let n = base.len();
    debug!("plan(base = {:?}, advantage = {})", base, advantage);

    let mut cost = vec![vec![INF; n]; n];
    let mut split = vec![vec![0; n]; n];
    for (i, &b) in base.iter().enumerate() {
        cost[i][i] = b;
        split[i][i] = i;
    }

    solve(0, n - 1, &mut cost, &mut split, advantage);
    SplitPlan { n, cost, split }
}

/// Cost of using a sub-range as one operand of a combining gate.
///
/// The sub-expression is written twice plus the shared negation gate, hence
/// `2c + 1`. When the sub-range is a single unit and the advantage holds,
/// the negation cancels against the unit's own top gate and the written cost
/// collapses to `(2c + 1) / 4`, unless the unit is a bare literal (`2c + 1
/// == 1`) which has no negation to cancel.
fn operand_cost(sub: u64, single_unit: bool, advantage: bool) -> u64 {
    let cost = 2 * sub + 1;
    if single_unit && advantage && cost != 1 {
        cost / 4
    } else {
        cost
    }
}

fn solve(
    lo: usize,
    hi: usize,
    cost: &mut Vec<Vec<u64>>,
    split: &mut Vec<Vec<usize>>,
    advantage: bool,
) -> u64 {
    if lo == hi {
        return cost[lo][hi];
    }
    if cost[lo][hi] != INF {
        return cost[lo][hi];
    }

    let mut best = INF;
    let mut best_split = lo;
    for k in lo..hi {
        let left = solve(lo, k, cost, split, advantage);
        let right = solve(k + 1, hi, cost, split, advantage);
        let candidate = operand_cost(left, k == lo, advantage)
            + operand_cost(right, k + 1 == hi, advantage)
            + 1;
        // Strict improvement only, so ties keep the first k.
        if candidate < best {
            best = candidate;
            best_split = k;
        }
    }

    debug!(
        "solve([{}, {}]) -> cost {} at split {}",
        lo, hi, best, best_split
    );
    cost[lo][hi] = best;
    split[lo][hi] = best_split;
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    /// Plain recursion over the same cost rule, no memoization.
    fn brute(base: &[u64], lo: usize, hi: usize, advantage: bool) -> u64 {
        if lo == hi {
            return base[lo];
        }
        (lo..hi)
            .map(|k| {
                operand_cost(brute(base, lo, k, advantage), k == lo, advantage)
                    + operand_cost(brute(base, k + 1, hi, advantage), k + 1 == hi, advantage)
                    + 1
            })
            .min()
            .unwrap()
    }

    #[test]
    fn test_single_unit() {
        assert_eq!(plan(&[0], false).root_cost(), 0);
        assert_eq!(plan(&[1], true).root_cost(), 1);
        assert_eq!(plan(&[7], true).root_cost(), 7);
    }

    #[test]
    fn test_pair_no_advantage() {
        // (A op B) op (A op B): three written gates.
        assert_eq!(plan(&[0, 0], false).root_cost(), 3);
    }

    #[test]
    fn test_pair_advantage() {
        // Two bare literals: costs of 1 are never halved.
        assert_eq!(plan(&[0, 0], true).root_cost(), 3);
        // Two negated literals: both negations cancel.
        assert_eq!(plan(&[1, 1], true).root_cost(), 1);
        // Term costs 3 and 1 (scenario A's second layer).
        assert_eq!(plan(&[3, 1], true).root_cost(), 2);
    }

    #[test]
    fn test_no_advantage_is_split_invariant() {
        // Without the advantage every split of equal base costs is as good
        // as any other; five literals cost 27 written gates.
        let p = plan(&[0, 0, 0, 0, 0], false);
        assert_eq!(p.root_cost(), 27);
    }

    #[test]
    fn test_ties_keep_lowest_split() {
        // Both splits of three equal units cost 9; the first one wins.
        let p = plan(&[0, 0, 0], false);
        assert_eq!(p.root_cost(), 9);
        assert_eq!(p.split(0, 2), 0);
    }

    #[test]
    fn test_matches_brute_force() {
        let cases: Vec<Vec<u64>> = vec![
            vec![0, 1, 0],
            vec![1, 1, 1, 1],
            vec![3, 1, 5, 0, 1],
            vec![0, 0, 1, 0, 1, 0],
            vec![11, 3, 7, 1, 5, 3],
            vec![0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
        ];
        for base in cases {
            for advantage in [false, true] {
                let p = plan(&base, advantage);
                let expected = brute(&base, 0, base.len() - 1, advantage);
                assert_eq!(
                    p.root_cost(),
                    expected,
                    "base = {:?}, advantage = {}",
                    base,
                    advantage
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "Planned sequences must be non-empty")]
    fn test_empty_panics() {
        plan(&[], false);
    }
}
