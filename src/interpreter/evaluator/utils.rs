use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin::Arity, core::EvalResult},
        value::core::Value,
    },
};

/// Builds the `Arity` error for a builtin called with `found` arguments.
pub fn arity_error(operator: &str, expected: Arity, found: usize, line: usize) -> RuntimeError {
    RuntimeError::Arity { name: format!("#[compiled-procedure {operator}]"),
                          expected: expected.to_string(),
                          found,
                          line }
}

/// Checks that a builtin received exactly `N` arguments and returns them as
/// an array, ready for a slice pattern.
///
/// # Example
/// ```
/// use schemer::interpreter::{evaluator::utils::exact_args, value::core::Value};
///
/// let args = [Value::Number(-3.0)];
/// let [x] = exact_args(&args, "abs", 1).unwrap();
/// assert_eq!(x, &Value::Number(-3.0));
///
/// assert!(exact_args::<2>(&args, "remainder", 1).is_err());
/// ```
pub fn exact_args<'a, const N: usize>(args: &'a [Value],
                                      operator: &str,
                                      line: usize)
                                      -> EvalResult<&'a [Value; N]> {
    args.try_into()
        .map_err(|_| arity_error(operator, Arity::Exact(N), args.len(), line))
}

/// Converts every argument to an `f64`.
///
/// # Parameters
/// - `args`: Evaluated arguments of a builtin call.
/// - `operator`: Builtin name, reported in the type error.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The arguments as numbers, in order.
///
/// # Example
/// ```
/// use schemer::interpreter::{evaluator::utils::numbers, value::core::Value};
///
/// let args = [Value::Number(1.0), Value::Number(2.5)];
/// assert_eq!(numbers(&args, "+", 1).unwrap(), vec![1.0, 2.5]);
///
/// let args = [Value::Number(1.0), Value::Bool(true)];
/// assert!(numbers(&args, "+", 1).is_err());
/// ```
pub fn numbers(args: &[Value], operator: &str, line: usize) -> EvalResult<Vec<f64>> {
    args.iter()
        .map(|arg| arg.as_number(operator, line))
        .collect()
}

/// Rejects a zero divisor.
///
/// Returns `DivisionByZero` naming `operator` when `divisor == 0.0`,
/// otherwise the divisor itself.
pub fn nonzero_divisor(divisor: f64, operator: &str, line: usize) -> EvalResult<f64> {
    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero { operator: operator.to_string(),
                                                  line });
    }
    Ok(divisor)
}
