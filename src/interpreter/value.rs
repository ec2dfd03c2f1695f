/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation: numbers and polynomials,
/// which can be stored in the context, plus the assignment reports and faults
/// a statement can return.
pub mod core;
