use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{AssignedValue, PolyExpr, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            polynomial::parse_polynomial,
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement spanning the rest of the input.
///
/// A statement may be one of:
/// - an assignment, `name = <polynomial>` or `name = <expression>`.
/// - a polynomial, such as `Poly([1, 2])` or `p.Derivate()`.
/// - an expression.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. The statement must be followed by the end of input.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, position)` pairs, ending
///   with [`Token::End`].
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Example
/// ```
/// use polycalc::{
///     ast::{Expr, Statement},
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let tokens = tokenize("x").unwrap();
/// let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(statement, Statement::Expression(Expr::Variable("x".into())));
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }
    if let Some(poly) = parse_polynomial_to_end(tokens) {
        return Ok(Statement::Polynomial(poly));
    }

    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::End)?;
    Ok(Statement::Expression(expr))
}

/// Parses an assignment statement.
///
/// Supported forms:
///
/// - `<identifier> = <polynomial>`
/// - `<identifier> = <expression>`
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `=`, an assignment is parsed.
/// Otherwise it returns `Ok(None)` and does not consume tokens.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();
        if let Some((Token::Equals, _)) = lookahead.peek() {
            let name = parse_identifier(tokens)?;
            tokens.next();

            let value = if let Some(poly) = parse_polynomial_to_end(tokens) {
                AssignedValue::Polynomial(poly)
            } else {
                let expr = parse_expression(tokens)?;
                expect(tokens, &Token::End)?;
                AssignedValue::Expression(expr)
            };
            return Ok(Some(Statement::Assignment { name, value }));
        }
    }
    Ok(None)
}

/// Tries to read the rest of the input as a polynomial.
///
/// Works on a clone of the iterator: only when a polynomial is parsed and
/// directly followed by the end of input are the tokens consumed. Anything
/// else, including `Poly([1]).Apply(2)` or a plain variable, leaves the
/// stream untouched for the expression parser.
fn parse_polynomial_to_end<'a, I>(tokens: &mut Peekable<I>) -> Option<PolyExpr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let poly = match parse_polynomial(&mut lookahead) {
        Ok(poly) => poly,
        Err(e) => {
            trace!("not a polynomial statement: {e}");
            return None;
        },
    };
    if let Some((Token::End, _)) = lookahead.peek() {
        lookahead.next();
        *tokens = lookahead;
        Some(poly)
    } else {
        None
    }
}
