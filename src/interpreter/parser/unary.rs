use std::iter::Peekable;

use crate::{
    ast::{Constant, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{parse_exponent, parse_multiplicative},
            core::{ParseResult, parse_expression},
            polynomial::parse_poly_apply,
            utils::{expect, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// A prefix `-` takes a whole multiplicative chain as its operand, so it binds
/// looser than `*`, `/` and `^` and tighter than binary `+` and `-`:
/// `-2 * 3` parses as `-(2 * 3)` and `-2 + 3` as `(-2) + 3`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_exponent`].
///
/// Grammar:
/// ```text
///     unary := "-" multiplicative
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let expr = parse_multiplicative(tokens)?;
        Ok(Expr::unary(UnaryOperator::Negate, expr))
    } else {
        parse_exponent(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - the constants `Pi` and `E`
/// - variables
/// - parenthesized expressions
/// - `Sin(expression)`
/// - polynomial evaluation, `poly.Apply(expression)`
///
/// An identifier directly followed by `.` starts a polynomial method chain;
/// whether the name is bound to a polynomial is only checked at evaluation
/// time.
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | "Pi" | "E" | IDENT
///              | "(" expression ")"
///              | "Sin" "(" expression ")"
///              | polyRef "." "Apply" "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(text), position)) => {
            let value = text.parse()
                            .map_err(|_| ParseError::UnexpectedToken { token:    text.clone(),
                                                                       position: *position, })?;
            tokens.next();
            Ok(Expr::Literal(value))
        },
        Some((Token::Pi, _)) => {
            tokens.next();
            Ok(Expr::Constant(Constant::Pi))
        },
        Some((Token::E, _)) => {
            tokens.next();
            Ok(Expr::Constant(Constant::Euler))
        },
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((Token::Sin, _)) => parse_sine(tokens),
        Some((Token::Poly, _)) => parse_poly_apply(tokens),
        Some((Token::Identifier(name), _)) => {
            let mut lookahead = tokens.clone();
            lookahead.next();
            if let Some((Token::Dot, _)) = lookahead.peek() {
                parse_poly_apply(tokens)
            } else {
                let name = name.clone();
                tokens.next();
                Ok(Expr::Variable(name))
            }
        },
        other => Err(unexpected(other.copied())),
    }
}

/// Parses a parenthesized expression.
///
/// The inner expression is returned as-is (no wrapper node).
///
/// Grammar `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}

/// Parses `Sin(expression)`.
fn parse_sine<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Sin)?;
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(Expr::unary(UnaryOperator::Sine, expr))
}
