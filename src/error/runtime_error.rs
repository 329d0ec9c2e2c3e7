use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A symbol has no binding in the environment chain.
    #[error("Error on line {line}: Unbound variable '{name}'.")]
    UnboundName {
        /// The name of the symbol.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A procedure or built-in received the wrong number of operands.
    #[error("Error on line {line}: {name} has been called with {found} argument(s); it requires {expected}.")]
    Arity {
        /// The printed procedure.
        name:     String,
        /// Description of the accepted operand counts, such as `exactly 2`.
        expected: String,
        /// The number of operands actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The operator of a combination is not a procedure.
    #[error("Error on line {line}: The object {value} is not applicable.")]
    NotApplicable {
        /// The printed operator value.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A built-in received an operand of the wrong kind.
    #[error("Error on line {line}: Type error: {operator} expected {expected}, found {found}.")]
    TypeError {
        /// The built-in that rejected the operand.
        operator: String,
        /// The kind of value that was expected.
        expected: String,
        /// The printed offending operand.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero signalled by {operator}.")]
    DivisionByZero {
        /// The built-in that divided.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression that produces no value was used where one is needed,
    /// for example a definition in operand position.
    #[error("Error on line {line}: Value missing.")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Compound procedure applications nested deeper than the configured
    /// limit.
    #[error("Error on line {line}: Aborting, maximum recursion depth of {limit} exceeded.")]
    RecursionLimit {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An `assert` received `#f`.
    #[error("Error on line {line}: Assertion failed.")]
    AssertionFailed {
        /// The source line where the error occurred.
        line: usize,
    },
}
