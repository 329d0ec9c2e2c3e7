/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, the special form
/// rules and error propagation.
pub mod core;

/// Procedure application.
///
/// Evaluates combinations in applicative order and applies built-ins and
/// compound procedures, enforcing arity and the recursion limit.
pub mod apply;

/// Built-in procedures.
///
/// Holds the static table of primitives bound in every global environment:
/// arithmetic, comparisons, boolean helpers and `assert`.
pub mod builtin;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the built-in implementations.
pub mod utils;
