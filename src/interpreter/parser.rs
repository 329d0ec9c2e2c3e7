/// Core parsing logic.
///
/// Entry points for whole programs and single expressions, plus the dispatch
/// between literals, symbols, combinations and special forms.
pub mod core;

/// Special form parsing.
///
/// Validates and builds `define`, `if`, `cond` and `lambda` expressions.
pub mod special_form;

/// Utility functions for the parser.
///
/// Helpers for parameter lists, bodies and closing parentheses shared by the
/// special forms and combinations.
pub mod utils;
