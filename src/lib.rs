//! # polycalc
//!
//! polycalc is a small expression language interpreter written in Rust.
//! It evaluates arithmetic over real numbers with variables, `Pi`, `E` and
//! `Sin`, and carries a polynomial sublanguage: polynomials can be evaluated
//! at a point, differentiated and multiplied, with coefficients that may stay
//! symbolic while they refer to unbound names.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::statement::parse_statement,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `PolyExpr` and `Statement` types that
/// represent one line of source code as a tree, together with the
/// `Polynomial` coefficient list. The AST is built by the parser and
/// traversed by the evaluator; its `Display` impls produce the text the
/// interpreter prints for symbolic terms.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `ParseError` for lexing and syntax failures, with the byte
///   position of the offending input.
/// - Defines `RuntimeError` for evaluation faults.
/// - Integrates both with `std::error::Error` and `Display`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide the runtime behind [`run_line`].
pub mod interpreter;
/// General numeric helpers shared by the AST, the lexer and the evaluator.
pub mod util;

/// Parses one line of source text into a statement.
///
/// # Errors
/// Returns a `ParseError` if the text contains a character no token accepts,
/// or if the tokens do not form exactly one statement.
///
/// # Examples
/// ```
/// use polycalc::parse;
///
/// let statement = parse("x = 2 * (3 + 4)").unwrap();
/// assert_eq!(statement.to_string(), "x = (2.0 * (3.0 + 4.0))");
///
/// assert!(parse("2 +").is_err());
/// assert!(parse("2 $ 3").is_err());
/// ```
pub fn parse(text: &str) -> Result<Statement, ParseError> {
    let tokens = tokenize(text)?;
    let statement = parse_statement(&mut tokens.iter().peekable())?;
    debug!("parsed `{text}` as {statement:?}");
    Ok(statement)
}

/// Executes a parsed statement against a context.
///
/// Never fails: runtime errors are returned as [`Value::Fault`], and only a
/// successful assignment changes the context.
pub fn execute(statement: &Statement, ctx: &mut Context) -> Value {
    ctx.execute(statement)
}

/// Parses and executes one line of source text.
///
/// # Errors
/// Returns a `ParseError` when the line does not parse; the context is left
/// untouched in that case.
///
/// # Examples
/// ```
/// use polycalc::{interpreter::evaluator::core::Context, run_line};
///
/// let mut ctx = Context::new();
/// assert_eq!(run_line("p = Poly([1, 2])", &mut ctx).unwrap().to_string(),
///            "p = 1.0 + 2.0*x");
/// assert_eq!(run_line("p.Apply(test_var)", &mut ctx).unwrap().to_string(), "45.0");
/// assert_eq!(run_line("q.Apply(1)", &mut ctx).unwrap().to_string(),
///            "\"q\" is not defined");
/// ```
pub fn run_line(text: &str, ctx: &mut Context) -> Result<Value, ParseError> {
    let statement = parse(text)?;
    Ok(execute(&statement, ctx))
}

/// Runs every non-empty line of `source` in order, yielding one result per
/// line.
///
/// Blank lines are skipped. Lines run lazily as the iterator is advanced; a
/// line that fails to parse yields its `ParseError` and execution continues
/// with the next line.
///
/// # Examples
/// ```
/// use polycalc::{interpreter::evaluator::core::Context, run_script};
///
/// let mut ctx = Context::empty();
/// let printed: Vec<String> = run_script("a = 2\n\nb = )\na ^ 10\n", &mut ctx)
///     .map(|result| result.map_or_else(|e| e.to_string(), |value| value.to_string()))
///     .collect();
/// assert_eq!(printed,
///            ["a = 2.0", "Syntax error at token ')' at position 4.", "1024.0"]);
/// ```
pub fn run_script<'a>(source: &'a str,
                      ctx: &'a mut Context)
                      -> impl Iterator<Item = Result<Value, ParseError>> + 'a {
    source.lines()
          .map(str::trim_end)
          .filter(|line| !line.trim().is_empty())
          .map(move |line| run_line(line, ctx))
}
