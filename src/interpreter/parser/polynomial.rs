use std::iter::Peekable;

use crate::{
    ast::{Expr, PolyExpr, PolyRef, Polynomial},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a polynomial reference and any `.Times(...)` / `.Derivate()`
/// calls chained onto it.
///
/// The chain starts at either a bare identifier or a `Poly([...])` literal.
/// A bare identifier is kept as [`PolyRef::Variable`] with its raw name: the
/// grammar cannot know whether it names a polynomial, so the check is left to
/// evaluation. Every chained method wraps the reference built so far, which
/// makes the chain left-associative: `p.Times(q).Derivate()` differentiates
/// the product.
///
/// A trailing `.Apply` is left in the stream for the caller; it turns the
/// chain into a scalar expression.
///
/// Grammar:
/// ```text
///     polyRef := (IDENT | literal) ("." "Times" "(" polyRef ")" | "." "Derivate" "(" ")")*
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier or `Poly`.
///
/// # Returns
/// The parsed reference.
///
/// # Errors
/// Returns a `ParseError` if the chain start is neither an identifier nor
/// `Poly`, or if a method call is malformed.
pub fn parse_poly_ref<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<PolyRef>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut poly = match tokens.peek() {
        Some((Token::Identifier(name), _)) => {
            let name = name.clone();
            tokens.next();
            PolyRef::Variable(name)
        },
        Some((Token::Poly, _)) => PolyRef::Inline(Box::new(parse_poly_literal(tokens)?)),
        other => return Err(unexpected(other.copied())),
    };

    while let Some((Token::Dot, _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();
        match lookahead.peek() {
            Some((Token::Times, _)) => {
                tokens.next();
                tokens.next();
                expect(tokens, &Token::LParen)?;
                let other = parse_poly_ref(tokens)?;
                expect(tokens, &Token::RParen)?;
                poly = PolyRef::Inline(Box::new(PolyExpr::Times { poly, other }));
            },
            Some((Token::Derivate, _)) => {
                tokens.next();
                tokens.next();
                expect(tokens, &Token::LParen)?;
                expect(tokens, &Token::RParen)?;
                poly = PolyRef::Inline(Box::new(PolyExpr::Derivate { poly }));
            },
            _ => break,
        }
    }

    Ok(poly)
}

/// Parses a polynomial-valued expression.
///
/// Grammar:
/// ```text
///     polynomial := "Poly" "(" list ")"
///                 | polyRef "." "Times" "(" polyRef ")"
///                 | polyRef "." "Derivate" "(" ")"
/// ```
///
/// # Errors
/// A bare identifier is a scalar expression, not a polynomial; it is rejected
/// with a syntax error on the token that follows it.
pub fn parse_polynomial<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<PolyExpr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match parse_poly_ref(tokens)? {
        PolyRef::Inline(poly) => Ok(*poly),
        PolyRef::Variable(_) => Err(unexpected(tokens.peek().copied())),
    }
}

/// Parses the evaluation of a polynomial at a point.
///
/// Grammar: `apply := polyRef "." "Apply" "(" expression ")"`
///
/// # Returns
/// An [`Expr::PolyApply`] node.
///
/// # Errors
/// Returns a `ParseError` when the reference is not followed by `.Apply(`,
/// for example a polynomial literal used directly inside arithmetic.
pub fn parse_poly_apply<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let poly = parse_poly_ref(tokens)?;
    expect(tokens, &Token::Dot)?;
    expect(tokens, &Token::Apply)?;
    expect(tokens, &Token::LParen)?;
    let arg = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(Expr::PolyApply { poly,
                         arg: Box::new(arg) })
}

/// Parses a polynomial literal, `Poly([c0, c1, ...])`.
///
/// Coefficients are arbitrary expressions, listed constant term first. They
/// are not evaluated here, so a literal may mention names that are bound
/// later, or never.
///
/// Grammar:
/// ```text
///     literal := "Poly" "(" "[" (expression ("," expression)*)? "]" ")"
/// ```
fn parse_poly_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<PolyExpr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Poly)?;
    expect(tokens, &Token::LParen)?;
    expect(tokens, &Token::LBracket)?;
    let coefficients = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
    expect(tokens, &Token::RParen)?;
    Ok(PolyExpr::Literal(Polynomial::new(coefficients)))
}
