//! Infix token streams, postfix conversion, and stack evaluation.
//!
//! The converter is the standard operator-precedence (shunting yard)
//! algorithm with two precedence levels: AND/NAND bind tighter than OR/NOR.
//! The evaluator consumes one boolean input per literal occurrence, in
//! postfix order, and applies each gate's truth table to the top two stack
//! entries.

use std::fmt;

use crate::error::Error;
use crate::gate::GateKind;
use crate::literal::Literal;

/// A token of a flattened expression, with explicit grouping.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token {
    Literal(Literal),
    Op(GateKind),
    Open,
    Close,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(lit) => write!(f, "{}", lit),
            Token::Op(kind) => write!(f, "{}", kind),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

/// Renders a token sequence as plain text.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Converts an infix token stream to postfix (reverse Polish) order.
///
/// Fails with [`Error::MalformedExpression`] on unbalanced grouping.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    let mut stack: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Literal(_) => output.push(token),
            Token::Op(kind) => {
                // Pop operators of equal or higher precedence (left-assoc).
                while let Some(&top) = stack.last() {
                    match top {
                        Token::Op(top_kind) if top_kind.precedence() >= kind.precedence() => {
                            output.push(top);
                            stack.pop();
                        }
                        _ => break,
                    }
                }
                stack.push(token);
            }
            Token::Open => stack.push(token),
            Token::Close => {
                loop {
                    match stack.pop() {
                        Some(Token::Open) => break,
                        Some(op) => output.push(op),
                        None => {
                            return Err(Error::MalformedExpression(
                                "unmatched closing parenthesis".into(),
                            ))
                        }
                    }
                }
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::Open {
            return Err(Error::MalformedExpression(
                "unmatched opening parenthesis".into(),
            ));
        }
        output.push(token);
    }

    Ok(output)
}

/// Evaluates a postfix token sequence.
///
/// `values` supplies one boolean per literal occurrence, in postfix order;
/// a negated literal evaluates to the complement of its supplied value.
/// Fails with [`Error::ImbalancedExpression`] if the stack underflows or
/// more than one value remains at the end.
///
/// # Panics
///
/// Panics if `values` supplies fewer booleans than there are literal
/// occurrences (caller contract).
pub fn eval_postfix(tokens: &[Token], values: &[bool]) -> Result<bool, Error> {
    let mut stack: Vec<bool> = Vec::new();
    let mut next_value = 0;

    for &token in tokens {
        match token {
            Token::Literal(lit) => {
                assert!(
                    next_value < values.len(),
                    "One input value per literal occurrence is required"
                );
                stack.push(lit.eval(values[next_value]));
                next_value += 1;
            }
            Token::Op(kind) => {
                let b = stack.pop();
                let a = stack.pop();
                match (a, b) {
                    (Some(a), Some(b)) => stack.push(kind.eval(a, b)),
                    _ => {
                        return Err(Error::ImbalancedExpression(
                            "too many operators".into(),
                        ))
                    }
                }
            }
            Token::Open | Token::Close => {
                return Err(Error::MalformedExpression(
                    "grouping token in postfix form".into(),
                ))
            }
        }
    }

    if stack.len() != 1 {
        return Err(Error::ImbalancedExpression("too many operands".into()));
    }
    Ok(stack[0])
}
