/// Parsing errors.
///
/// Defines the errors that can occur while tokenizing and parsing a line of
/// source text. Both are fatal to the current parse attempt: no partial tree
/// is ever returned.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the faults raised while evaluating a statement: unknown
/// variables, references that do not name a polynomial and polynomials used
/// where a number is required. They never escape `execute`; the statement
/// boundary turns them into `Value::Fault`.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
