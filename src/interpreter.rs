/// The environment module implements lexical scoping.
///
/// An environment is a frame of bindings plus an optional enclosing
/// environment. Lookups walk outward through the chain; procedures keep the
/// environment they were created in alive for as long as they are reachable.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST in applicative order: operator and operands of
/// a combination are evaluated before the procedure is applied. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates literals, symbols, special forms and combinations.
/// - Applies built-ins and compound procedures.
/// - Reports runtime errors such as unbound names or arity mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// parentheses, numbers, booleans and identifiers, each tagged with its line.
/// Comments and whitespace are discarded here.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser reads parenthesized expressions from the token stream and
/// recognizes the special forms.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Validates the shape of `define`, `if`, `cond` and `lambda`, reporting
///   errors with line info.
pub mod parser;
/// The chapter's worked procedures, as Scheme source.
pub mod prelude;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, booleans, compound procedures and
///   built-ins.
/// - Implements Scheme truthiness and printing.
pub mod value;
