/// Binary operator evaluation logic.
///
/// Handles the four arithmetic operators and exponentiation on real numbers.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and the sine function.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context holding variable
/// bindings, and the statement boundary where errors become faults.
pub mod core;

/// Polynomial evaluation.
///
/// Resolves polynomial references and implements `Apply`, `Derivate` and
/// `Times`, including the symbolic fallback for unresolved coefficients.
pub mod polynomial;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the evaluation logic.
pub mod utils;
