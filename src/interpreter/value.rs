/// Compound procedure representation.
///
/// Defines the `Procedure` type produced by evaluating a `lambda` expression:
/// formal parameters, body, and the environment the lambda was evaluated in.
pub mod procedure;

/// Runtime values.
///
/// Defines `Value`, the result of evaluating an expression, along with Scheme
/// truthiness, numeric coercion for built-ins and the printed representation.
pub mod core;
