/// Numeric rendering and conversion helpers.
///
/// This module holds the one place where an `f64` is turned into the text the
/// language prints, and the conversion of polynomial degrees into floats.
/// Every printed number, every rendered coefficient and every assignment
/// report goes through [`num::format_real`], which keeps the language's
/// output stable across the whole interpreter.
pub mod num;
