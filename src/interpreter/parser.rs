/// Core parsing entry points.
///
/// Defines the `ParseResult` alias and the expression entry point every other
/// parsing routine descends from.
pub mod core;

/// Binary operator parsing.
///
/// Handles the left-associative precedence levels `+ -`, `* /` and `^`.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation and the atoms of the grammar: numbers, variables,
/// constants, parenthesized expressions, `Sin(...)` and `.Apply(...)` calls.
pub mod unary;

/// Polynomial parsing.
///
/// Parses `Poly([...])` literals and the `.Times(...)`, `.Derivate()` and
/// `.Apply(...)` method chains, keeping bare names as unresolved references.
pub mod polynomial;

/// Statement parsing.
///
/// Parses one full line: an assignment, a polynomial or an expression,
/// followed by the end of input.
pub mod statement;

/// Shared parser helpers.
pub mod utils;
