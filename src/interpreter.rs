/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against a [`evaluator::core::Context`],
/// performs arithmetic, runs the polynomial operations and turns runtime
/// errors into printable faults at the statement boundary.
///
/// # Responsibilities
/// - Evaluates expressions and polynomial expressions.
/// - Owns the variable bindings of a session.
/// - Keeps unresolved coefficients symbolic where the polynomial algebra
///   allows it.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one line of source text and produces a stream of tokens:
/// numbers, identifiers, keywords, operators and delimiters, each paired with
/// its byte offset. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Separates uppercase keywords from lowercase identifiers.
/// - Reports the first character no token pattern accepts.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a single [`crate::ast::Statement`] per line. The polynomial and the scalar
/// grammars overlap on their first tokens, so statement parsing tries the
/// polynomial reading on a lookahead copy first.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting the offending token and its position.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, polynomials, assignment reports and
///   faults.
/// - Renders values the way the interpreter prints them.
pub mod value;
