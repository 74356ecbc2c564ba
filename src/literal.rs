//! Literals: a variable identifier together with a polarity.

use std::fmt;
use std::ops::Neg;

/// A literal: a variable or its negation.
///
/// Variable ids are 1-indexed (0 is reserved), matching DIMACS-style
/// conventions. Two literals are equal iff both the id and the polarity match.
///
/// # Examples
///
/// ```
/// use gatemin::literal::Literal;
///
/// let x = Literal::positive(3);
/// assert_eq!((-x).var(), 3);
/// assert!((-x).is_negated());
/// assert_eq!(-(-x), x);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Literal {
    var: u32,
    negated: bool,
}

impl Literal {
    /// Creates a literal with the given polarity.
    ///
    /// # Panics
    ///
    /// Panics if `var == 0`. Variable ids must be >= 1.
    pub fn new(var: u32, negated: bool) -> Self {
        assert_ne!(var, 0, "Variable ids must be >= 1");
        Self { var, negated }
    }

    pub fn positive(var: u32) -> Self {
        Self::new(var, false)
    }

    pub fn negative(var: u32) -> Self {
        Self::new(var, true)
    }

    /// Creates a literal from a signed DIMACS-style value:
    /// positive for the variable, negative for its negation.
    ///
    /// # Panics
    ///
    /// Panics if `value == 0`.
    pub fn from_dimacs(value: i32) -> Self {
        assert_ne!(value, 0, "Variable ids must be >= 1");
        Self {
            var: value.unsigned_abs(),
            negated: value < 0,
        }
    }

    pub fn var(self) -> u32 {
        self.var
    }

    pub fn is_negated(self) -> bool {
        self.negated
    }

    /// Evaluates the literal given the value of its variable.
    pub fn eval(self, value: bool) -> bool {
        value ^ self.negated
    }
}

impl Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}{}", self.var, if self.negated { "'" } else { "" })
    }
}
