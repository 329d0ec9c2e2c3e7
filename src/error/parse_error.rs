use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `)` appeared without a matching `(`.
    #[error("Error on line {line}: Unbalanced closing parenthesis ')'.")]
    UnbalancedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `()` has no operator to apply.
    #[error("Error on line {line}: Combination must have an operator: ().")]
    EmptyCombination {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A special form did not have the expected shape.
    #[error("Error on line {line}: Ill-formed special form ({form} ...): {details}.")]
    IllFormedSpecialForm {
        /// The keyword of the special form, such as `define`.
        form:    String,
        /// Details about what was wrong.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to use a special form keyword as a name.
    #[error("Error on line {line}: Identifier {name} is reserved.")]
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The same formal parameter appeared twice.
    #[error("Error on line {line}: Duplicate parameter '{name}'.")]
    DuplicateParameter {
        /// The repeated parameter name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}
