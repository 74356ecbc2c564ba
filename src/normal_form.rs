//! Normal forms: ordered terms of ordered literals.

use std::fmt;

use crate::expr::Expr;
use crate::gate::GateKind;
use crate::literal::Literal;

/// Whether a normal form is an OR of AND-terms (DNF) or an AND of OR-clauses
/// (CNF).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Shape {
    Dnf,
    Cnf,
}

impl Shape {
    pub fn is_dnf(self) -> bool {
        self == Shape::Dnf
    }

    /// Operator combining the literals inside one term.
    pub fn inner_kind(self) -> GateKind {
        match self {
            Shape::Dnf => GateKind::And,
            Shape::Cnf => GateKind::Or,
        }
    }

    /// Operator combining the terms; the dual of [`inner_kind`][Self::inner_kind].
    pub fn outer_kind(self) -> GateKind {
        self.inner_kind().dual()
    }
}

/// An ordered sequence of literals: a pure conjunction (in a DNF) or a pure
/// disjunction (in a CNF), in the exact order supplied by the caller.
///
/// The optimizer never permutes this order; it only considers contiguous
/// splits.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    /// # Panics
    ///
    /// Panics if `literals` is empty.
    pub fn new(literals: Vec<Literal>) -> Self {
        assert!(!literals.is_empty(), "Terms must be non-empty");
        Self { literals }
    }

    /// Builds a term from signed DIMACS-style values.
    pub fn from_dimacs(values: impl IntoIterator<Item = i32>) -> Self {
        Self::new(values.into_iter().map(Literal::from_dimacs).collect())
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Left-fold of the term's literals under the given operator.
    pub fn to_expr(&self, kind: GateKind) -> Expr {
        let mut iter = self.literals.iter();
        let first = Expr::literal(*iter.next().unwrap());
        iter.fold(first, |acc, &lit| Expr::gate(kind, acc, Expr::literal(lit)))
    }
}

/// An ordered sequence of [`Term`]s combined by the dual of the terms'
/// internal operator.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NormalForm {
    terms: Vec<Term>,
    shape: Shape,
}

impl NormalForm {
    /// # Panics
    ///
    /// Panics if `terms` is empty.
    pub fn new(terms: Vec<Term>, shape: Shape) -> Self {
        assert!(!terms.is_empty(), "Normal forms must be non-empty");
        Self { terms, shape }
    }

    /// Builds a normal form from signed DIMACS-style values.
    ///
    /// ```
    /// use gatemin::normal_form::{NormalForm, Shape};
    ///
    /// // (x1 ∧ x3) ∨ x2'
    /// let nf = NormalForm::from_dimacs([vec![1, 3], vec![-2]], Shape::Dnf);
    /// assert_eq!(nf.to_expr().to_string(), "(x1∧x3)∨x2'");
    /// ```
    pub fn from_dimacs(terms: impl IntoIterator<Item = Vec<i32>>, shape: Shape) -> Self {
        Self::new(terms.into_iter().map(Term::from_dimacs).collect(), shape)
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn is_dnf(&self) -> bool {
        self.shape.is_dnf()
    }

    /// The AND/OR expression tree this normal form denotes, used as the
    /// reference side of equivalence checks.
    pub fn to_expr(&self) -> Expr {
        let inner = self.shape.inner_kind();
        let outer = self.shape.outer_kind();
        let mut iter = self.terms.iter();
        let first = iter.next().unwrap().to_expr(inner);
        iter.fold(first, |acc, term| Expr::gate(outer, acc, term.to_expr(inner)))
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_expr())
    }
}
