//! # gatemin: minimal NAND-only / NOR-only synthesis in Rust
//!
//! **`gatemin`** converts a boolean expression in disjunctive or conjunctive
//! normal form into a logically equivalent expression built exclusively from
//! one two-input gate kind --- NAND-only or NOR-only --- using the minimum
//! possible number of gates.
//!
//! ## How it works
//!
//! A naive NAND/NOR translation of a normal form pays one negation gate per
//! operand. By De Morgan duality, `A ∨ B = (A' ∧ B')' = A' ⊼ B'`: when the
//! target gate directly implements the needed operator on *negated* inputs,
//! an operand that is already a negation can drop both gates instead of
//! stacking a second one. For a given (target gate, input shape) pair this
//! "advantage" is available at exactly one of the two layers of a normal
//! form --- inside the terms, or across them.
//!
//! The optimizer runs an interval dynamic program over contiguous splits of
//! each layer (cf. matrix-chain multiplication), then walks the backtracking
//! table to emit the actual gate tree, cancelling double negations where the
//! advantage accounting promised it.
//!
//! ## Quick start
//!
//! ```rust
//! use gatemin::gate::GateKind;
//! use gatemin::minimize::minimize;
//! use gatemin::parse::parse_normal_form;
//! use gatemin::verify::equivalent;
//!
//! // (x1 ∧ x3) ∨ x2'
//! let nf = parse_normal_form("1 3 v 2'").unwrap();
//!
//! let expr = minimize(&nf, GateKind::Nand);
//! assert_eq!(expr.to_string(), "(x1⊼x3)⊼x2");
//! assert_eq!(expr.gate_count(), 2);
//!
//! // The exhaustive truth-table oracle agrees.
//! assert!(equivalent(&nf.to_expr(), &expr).unwrap().holds());
//! ```
//!
//! ## Core components
//!
//! - **[`minimize`]**: the two entry points, [`minimize::minimize`] and the
//!   single-layer [`minimize::plan_and_build`].
//! - **[`planner`]**: the interval DP computing minimal gate counts and
//!   optimal split points.
//! - **[`rebuild`]**: reconstruction of the gate tree from a split plan,
//!   including the De Morgan double-negation cancellation.
//! - **[`verify`]**: the brute-force truth-table equivalence oracle.
//! - **[`expr`]**, **[`postfix`]**: the expression model and its infix /
//!   postfix codecs.
//! - **[`parse`]**: free-form text input of normal forms.

pub mod error;
pub mod expr;
pub mod gate;
pub mod literal;
pub mod minimize;
pub mod normal_form;
pub mod parse;
pub mod planner;
pub mod postfix;
pub mod rebuild;
pub mod verify;
