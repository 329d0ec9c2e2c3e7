use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::exact_args},
        value::core::Value,
    },
};

/// Returns `#f` if any argument is `#f`, otherwise the last argument.
/// `(and)` is `#t`.
///
/// Being a procedure, `and` receives operands that have all been evaluated
/// already.
///
/// # Example
/// ```
/// use schemer::interpreter::{evaluator::builtin::logic::and, value::core::Value};
///
/// let args = [Value::Bool(true), Value::Number(5.0)];
/// assert_eq!(and(&args, 1).unwrap(), Value::Number(5.0));
///
/// let args = [Value::Bool(false), Value::Number(5.0)];
/// assert_eq!(and(&args, 1).unwrap(), Value::Bool(false));
/// ```
pub fn and(args: &[Value], _line: usize) -> EvalResult<Value> {
    if args.iter().any(|v| !v.is_truthy()) {
        return Ok(Value::Bool(false));
    }
    Ok(args.last().cloned().unwrap_or(Value::Bool(true)))
}

/// Returns the first argument that is not `#f`, or `#f`.
pub fn or(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(args.iter()
           .find(|v| v.is_truthy())
           .cloned()
           .unwrap_or(Value::Bool(false)))
}

/// `#t` for `#f`, `#f` for everything else.
pub fn not(args: &[Value], line: usize) -> EvalResult<Value> {
    let [x] = exact_args(args, "not", line)?;
    Ok(Value::Bool(!x.is_truthy()))
}

/// Asserts that the argument is not `#f`.
///
/// # Returns
/// `#t` on success.
///
/// # Errors
/// `AssertionFailed` on `line` otherwise.
///
/// # Example
/// ```
/// use schemer::interpreter::{evaluator::builtin::logic::assert_fn, value::core::Value};
///
/// assert_eq!(assert_fn(&[Value::Number(0.0)], 1).unwrap(), Value::Bool(true));
/// assert!(assert_fn(&[Value::Bool(false)], 1).is_err());
/// assert!(assert_fn(&[], 1).is_err());
/// ```
pub fn assert_fn(args: &[Value], line: usize) -> EvalResult<Value> {
    let [x] = exact_args(args, "assert", line)?;
    if x.is_truthy() {
        Ok(Value::Bool(true))
    } else {
        Err(RuntimeError::AssertionFailed { line })
    }
}
