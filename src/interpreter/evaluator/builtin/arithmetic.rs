use crate::interpreter::{
    evaluator::{
        builtin::Arity,
        core::EvalResult,
        utils::{arity_error, exact_args, nonzero_divisor, numbers},
    },
    value::core::Value,
};

/// Sums the arguments. `(+)` is `0`.
///
/// # Example
/// ```
/// use schemer::interpreter::{evaluator::builtin::arithmetic::add, value::core::Value};
///
/// let args = [21.0, 35.0, 12.0, 7.0].map(Value::Number);
/// assert_eq!(add(&args, 1).unwrap(), Value::Number(75.0));
/// assert_eq!(add(&[], 1).unwrap(), Value::Number(0.0));
/// ```
pub fn add(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(Value::Number(numbers(args, "+", line)?.iter().sum()))
}

/// Multiplies the arguments. `(*)` is `1`.
pub fn mul(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(Value::Number(numbers(args, "*", line)?.iter().product()))
}

/// Negates a single argument, otherwise subtracts the rest from the first.
///
/// # Example
/// ```
/// use schemer::interpreter::{evaluator::builtin::arithmetic::sub, value::core::Value};
///
/// assert_eq!(sub(&[Value::Number(7.0)], 1).unwrap(), Value::Number(-7.0));
///
/// let args = [10.0, 1.0, 2.0].map(Value::Number);
/// assert_eq!(sub(&args, 1).unwrap(), Value::Number(7.0));
/// ```
pub fn sub(args: &[Value], line: usize) -> EvalResult<Value> {
    let nums = numbers(args, "-", line)?;

    match nums.as_slice() {
        [only] => Ok(Value::Number(-only)),
        [first, rest @ ..] => Ok(Value::Number(rest.iter().fold(*first, |acc, n| acc - n))),
        [] => Err(arity_error("-", Arity::AtLeast(1), 0, line)),
    }
}

/// Takes the reciprocal of a single argument, otherwise divides the first by
/// each of the rest in turn.
///
/// Every divisor must be non-zero.
///
/// # Example
/// ```
/// use schemer::interpreter::{evaluator::builtin::arithmetic::div, value::core::Value};
///
/// assert_eq!(div(&[Value::Number(4.0)], 1).unwrap(), Value::Number(0.25));
///
/// let args = [Value::Number(1.0), Value::Number(0.0)];
/// assert!(div(&args, 1).is_err());
/// ```
pub fn div(args: &[Value], line: usize) -> EvalResult<Value> {
    let nums = numbers(args, "/", line)?;

    match nums.as_slice() {
        [only] => Ok(Value::Number(1.0 / nonzero_divisor(*only, "/", line)?)),
        [first, rest @ ..] => {
            let mut acc = *first;
            for divisor in rest {
                acc /= nonzero_divisor(*divisor, "/", line)?;
            }
            Ok(Value::Number(acc))
        },
        [] => Err(arity_error("/", Arity::AtLeast(1), 0, line)),
    }
}

/// Absolute value.
///
/// # Example
/// ```
/// use schemer::interpreter::{evaluator::builtin::arithmetic::abs, value::core::Value};
///
/// assert_eq!(abs(&[Value::Number(-3.0)], 1).unwrap(), Value::Number(3.0));
/// assert!(abs(&[], 1).is_err());
/// ```
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    let [x] = exact_args(args, "abs", line)?;
    Ok(Value::Number(x.as_number("abs", line)?.abs()))
}

/// Remainder of truncated division; the result has the sign of the dividend.
///
/// # Example
/// ```
/// use schemer::interpreter::{evaluator::builtin::arithmetic::remainder, value::core::Value};
///
/// let args = [Value::Number(-7.0), Value::Number(2.0)];
/// assert_eq!(remainder(&args, 1).unwrap(), Value::Number(-1.0));
/// ```
pub fn remainder(args: &[Value], line: usize) -> EvalResult<Value> {
    let [dividend, divisor] = exact_args(args, "remainder", line)?;
    let dividend = dividend.as_number("remainder", line)?;
    let divisor = nonzero_divisor(divisor.as_number("remainder", line)?, "remainder", line)?;

    Ok(Value::Number(dividend % divisor))
}

/// Returns the smallest (`min`) or largest (`max`) argument.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: One or more numbers.
/// - `line`: Line number for error reporting.
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let nums = numbers(args, name, line)?;
    let pick: fn(f64, f64) -> f64 = if name == "min" { f64::min } else { f64::max };

    nums.into_iter()
        .reduce(pick)
        .map(Value::Number)
        .ok_or_else(|| arity_error(name, Arity::AtLeast(1), 0, line))
}
