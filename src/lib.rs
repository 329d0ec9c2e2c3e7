//! # schemer
//!
//! schemer is an applicative-order evaluator for the small Scheme subset used
//! in the first chapter of the classic introductory programming textbook.
//! It parses and evaluates combinations, definitions, conditionals and
//! lambda expressions over numbers and booleans, with lexically scoped
//! closures.

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
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use crate::interpreter::{evaluator::core::Context, value::core::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents a parsed Scheme
/// expression as a tree. The AST is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines one variant per special form plus literals, symbols and
///   combinations.
/// - Attaches the source line to every node for error reporting.
pub mod ast;
/// Command-line arguments of the `schemer` binary.
///
/// Declared in the library so that [`Config::from_args`] can build a
/// configuration straight from parsed arguments.
pub mod cli;
/// Runtime configuration.
///
/// Holds the knobs that shape a fresh evaluation context: the Newton's method
/// tolerance, the recursion limit and whether the prelude is loaded.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps both phases in a single [`error::Error`] for the front end.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, environments, evaluation and
/// value representations to provide a complete runtime for Scheme source.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities shared by several phases.
pub mod util;

pub use config::Config;

/// Evaluates a whole program in a fresh context and returns the last value.
///
/// The context is built from `config`: built-ins, the `tolerance` binding and,
/// when enabled, the prelude. Every top-level expression is evaluated in
/// order; the value of the last one that produced a value is returned.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. Evaluation stops at
/// the first error.
///
/// # Examples
/// ```
/// use schemer::{Config, get_result};
///
/// let source = "(define (square x) (* x x))\n(square 21)";
/// let value = get_result(source, &Config::default()).unwrap();
/// assert_eq!(value.unwrap().to_string(), "441");
///
/// // Unbound names are reported.
/// assert!(get_result("(+ y 1)", &Config::default()).is_err());
/// ```
pub fn get_result(source: &str, config: &Config) -> Result<Option<Value>, error::Error> {
    let mut context = Context::with_config(config)?;
    context.run(source)
}
