//! Free-form text parsing of normal-form expressions.
//!
//! The accepted syntax follows the classical pencil notation: variables are
//! decimal numbers, negation is an apostrophe suffix, disjunction is `v` or
//! `∨`, conjunction is `∧`, `&`, or simply adjacency (`12 3'`, `)(`, `)7`,
//! `7(`), parentheses group CNF clauses, whitespace is ignored.
//!
//! ```text
//! 1 3 v 2'          (x1 ∧ x3) ∨ x2'        DNF
//! (1 v 2)(1' v 3)   (x1 ∨ x2) ∧ (x1' ∨ x3) CNF
//! ```

use crate::error::Error;
use crate::gate::GateKind;
use crate::literal::Literal;
use crate::normal_form::{NormalForm, Shape, Term};
use crate::postfix::Token;

/// Tokenizes a normal-form string, inserting the implicit conjunctions.
///
/// Grouping balance is left to the consumer; everything else that is not a
/// variable, an operator, or a parenthesis is [`Error::MalformedExpression`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '0'..='9' => {
                let mut value: u32 = c.to_digit(10).unwrap();
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    value = value * 10 + d;
                    chars.next();
                }
                if value == 0 {
                    return Err(Error::MalformedExpression(
                        "variable ids must be >= 1".into(),
                    ));
                }
                push_operand(&mut tokens, Token::Literal(Literal::positive(value)));
            }
            '\'' => match tokens.last_mut() {
                Some(Token::Literal(lit)) => *lit = -*lit,
                _ => {
                    return Err(Error::MalformedExpression(
                        "dangling negation apostrophe".into(),
                    ))
                }
            },
            'v' | '\u{2228}' => tokens.push(Token::Op(GateKind::Or)),
            '&' | '\u{2227}' => tokens.push(Token::Op(GateKind::And)),
            '(' => push_operand(&mut tokens, Token::Open),
            ')' => tokens.push(Token::Close),
            _ => {
                return Err(Error::MalformedExpression(format!(
                    "unexpected character {:?}",
                    c
                )))
            }
        }
    }

    Ok(tokens)
}

/// Appends an operand-starting token, inserting the implicit conjunction
/// when it directly follows another operand or a closing parenthesis.
fn push_operand(tokens: &mut Vec<Token>, token: Token) {
    if matches!(tokens.last(), Some(Token::Literal(_)) | Some(Token::Close)) {
        tokens.push(Token::Op(GateKind::And));
    }
    tokens.push(token);
}

/// Parses a normal-form string into a [`NormalForm`].
///
/// A disjunction at parenthesis depth 0 makes the input a DNF; otherwise it
/// is read as a CNF of parenthesized clauses. A bare `1 v 2 v 3` parses as a
/// DNF of single-literal terms; either reading is equivalent.
pub fn parse_normal_form(input: &str) -> Result<NormalForm, Error> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(Error::MalformedExpression("empty expression".into()));
    }
    check_balance(&tokens)?;

    let shape = detect_shape(&tokens);
    let separator = shape.outer_kind();

    let mut terms = Vec::new();
    for segment in split_top_level(&tokens, separator) {
        terms.push(parse_term(segment, shape)?);
    }
    Ok(NormalForm::new(terms, shape))
}

fn check_balance(tokens: &[Token]) -> Result<(), Error> {
    let mut depth: i32 = 0;
    for token in tokens {
        match token {
            Token::Open => depth += 1,
            Token::Close => {
                depth -= 1;
                if depth < 0 {
                    return Err(Error::MalformedExpression(
                        "unmatched closing parenthesis".into(),
                    ));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Error::MalformedExpression(
            "unmatched opening parenthesis".into(),
        ));
    }
    Ok(())
}

fn detect_shape(tokens: &[Token]) -> Shape {
    let mut depth = 0;
    for token in tokens {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth -= 1,
            Token::Op(GateKind::Or) if depth == 0 => return Shape::Dnf,
            _ => {}
        }
    }
    Shape::Cnf
}

/// Splits the stream on occurrences of `separator` at parenthesis depth 0.
fn split_top_level(tokens: &[Token], separator: GateKind) -> Vec<&[Token]> {
    let mut segments = Vec::new();
    let mut depth = 0;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth -= 1,
            Token::Op(kind) if *kind == separator && depth == 0 => {
                segments.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&tokens[start..]);
    segments
}

/// Reads one term (DNF) or clause (CNF) segment: its literals in order,
/// joined only by the shape's inner operator.
fn parse_term(segment: &[Token], shape: Shape) -> Result<Term, Error> {
    let mut literals = Vec::new();
    for token in segment {
        match token {
            Token::Literal(lit) => literals.push(*lit),
            Token::Op(kind) if *kind == shape.inner_kind() => {}
            Token::Open | Token::Close => {}
            Token::Op(_) => {
                return Err(Error::MalformedExpression(match shape {
                    Shape::Dnf => "disjunction inside a DNF term".into(),
                    Shape::Cnf => "conjunction inside a CNF clause".into(),
                }))
            }
        }
    }
    if literals.is_empty() {
        return Err(Error::MalformedExpression("empty term".into()));
    }
    Ok(Term::new(literals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dnf() {
        let nf = parse_normal_form("1 3 v 2'").unwrap();
        assert_eq!(nf.shape(), Shape::Dnf);
        assert_eq!(
            nf,
            NormalForm::from_dimacs([vec![1, 3], vec![-2]], Shape::Dnf)
        );
    }

    #[test]
    fn test_parse_cnf() {
        let nf = parse_normal_form("(1 v 2)(1' v 3)").unwrap();
        assert_eq!(nf.shape(), Shape::Cnf);
        assert_eq!(
            nf,
            NormalForm::from_dimacs([vec![1, 2], vec![-1, 3]], Shape::Cnf)
        );
    }

    #[test]
    fn test_parse_multi_digit_and_explicit_ops() {
        let nf = parse_normal_form("12\u{2227}3' \u{2228} 4").unwrap();
        assert_eq!(
            nf,
            NormalForm::from_dimacs([vec![12, -3], vec![4]], Shape::Dnf)
        );
    }

    #[test]
    fn test_parse_bare_disjunction_is_dnf() {
        let nf = parse_normal_form("1v2v3").unwrap();
        assert_eq!(nf.shape(), Shape::Dnf);
        assert_eq!(nf.terms().len(), 3);
    }

    #[test]
    fn test_parse_single_clause_in_parens() {
        let nf = parse_normal_form("(1v2)").unwrap();
        assert_eq!(nf.shape(), Shape::Cnf);
        assert_eq!(nf, NormalForm::from_dimacs([vec![1, 2]], Shape::Cnf));
    }

    #[test]
    fn test_implicit_conjunction_between_groups() {
        let nf = parse_normal_form("(1v2) (3v4') 5").unwrap();
        assert_eq!(
            nf,
            NormalForm::from_dimacs([vec![1, 2], vec![3, -4], vec![5]], Shape::Cnf)
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_normal_form(""),
            Err(Error::MalformedExpression(_))
        ));
        assert!(matches!(
            parse_normal_form("(1 v 2"),
            Err(Error::MalformedExpression(_))
        ));
        assert!(matches!(
            parse_normal_form("1))"),
            Err(Error::MalformedExpression(_))
        ));
        assert!(matches!(
            parse_normal_form("'1"),
            Err(Error::MalformedExpression(_))
        ));
        assert!(matches!(
            parse_normal_form("0 v 1"),
            Err(Error::MalformedExpression(_))
        ));
        assert!(matches!(
            parse_normal_form("1 v v 2"),
            Err(Error::MalformedExpression(_))
        ));
        assert!(matches!(
            parse_normal_form("x + y"),
            Err(Error::MalformedExpression(_))
        ));
        // OR nested inside a DNF term.
        assert!(matches!(
            parse_normal_form("1 (2 v 3) v 4"),
            Err(Error::MalformedExpression(_))
        ));
    }
}
