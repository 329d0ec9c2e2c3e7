use std::{fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin::Builtin, core::EvalResult},
        value::procedure::Procedure,
    },
    util::num::format_number,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce: numbers, booleans
/// and the two kinds of procedure.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`#t` or `#f`).
    /// Produced by comparison built-ins. Any value other than `#f` counts as
    /// true in `if` and `cond`.
    Bool(bool),
    /// A compound procedure created by evaluating a `lambda`.
    Procedure(Rc<Procedure>),
    /// A primitive procedure from the built-in table.
    Builtin(&'static Builtin),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Procedure(a), Self::Procedure(b)) => Rc::ptr_eq(a, b) || a.same_closure(b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Scheme truthiness: everything except `#f` is true.
    ///
    /// # Example
    /// ```
    /// use schemer::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::Bool(true).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }

    /// Returns `true` for compound procedures and built-ins.
    #[must_use]
    pub const fn is_procedure(&self) -> bool {
        matches!(self, Self::Procedure(_) | Self::Builtin(_))
    }

    /// Converts the value to an `f64`, or returns a type error naming the
    /// built-in `operator` that needed a number.
    ///
    /// # Parameters
    /// - `operator`: Name of the built-in, for the error message.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use schemer::{error::RuntimeError, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Number(2.5).as_number("+", 1).unwrap(), 2.5);
    ///
    /// let err = Value::Bool(true).as_number("+", 3).unwrap_err();
    /// assert!(matches!(err, RuntimeError::TypeError { line: 3, .. }));
    /// ```
    pub fn as_number(&self, operator: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::TypeError { operator: operator.to_string(),
                                               expected: "a number".to_string(),
                                               found: self.to_string(),
                                               line }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Bool(true) => write!(f, "#t"),
            Self::Bool(false) => write!(f, "#f"),
            Self::Procedure(p) => write!(f, "#[compound-procedure {}]", p.display_name()),
            Self::Builtin(b) => write!(f, "#[compiled-procedure {}]", b.name),
        }
    }
}
