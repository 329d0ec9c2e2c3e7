use crate::interpreter::{
    evaluator::{core::EvalResult, utils::numbers},
    value::core::Value,
};

/// The numeric relations available as built-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl Relation {
    /// The built-in name of the relation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
        }
    }

    #[allow(clippy::float_cmp)]
    fn holds(self, a: f64, b: f64) -> bool {
        match self {
            Self::Equal => a == b,
            Self::Less => a < b,
            Self::Greater => a > b,
            Self::LessOrEqual => a <= b,
            Self::GreaterOrEqual => a >= b,
        }
    }
}

/// Evaluates a chained numeric comparison such as `(< a b c)`.
///
/// The result is `#t` when the relation holds between every adjacent pair of
/// arguments. A single argument always yields `#t`, but it must still be a
/// number.
///
/// # Parameters
/// - `relation`: The relation to test between neighbours.
/// - `args`: The numbers to compare.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Bool` with the outcome.
///
/// # Example
/// ```
/// use schemer::interpreter::{
///     evaluator::builtin::comparison::{Relation, compare},
///     value::core::Value,
/// };
///
/// let args = [1.0, 2.0, 3.0].map(Value::Number);
/// assert_eq!(compare(Relation::Less, &args, 1).unwrap(), Value::Bool(true));
///
/// let args = [1.0, 3.0, 2.0].map(Value::Number);
/// assert_eq!(compare(Relation::Less, &args, 1).unwrap(), Value::Bool(false));
///
/// let args = [3.0, 3.0, 2.0].map(Value::Number);
/// assert_eq!(compare(Relation::GreaterOrEqual, &args, 1).unwrap(), Value::Bool(true));
///
/// let args = [Value::Number(1.0), Value::Bool(false)];
/// assert!(compare(Relation::Equal, &args, 1).is_err());
/// ```
pub fn compare(relation: Relation, args: &[Value], line: usize) -> EvalResult<Value> {
    let nums = numbers(args, relation.symbol(), line)?;

    Ok(Value::Bool(nums.windows(2).all(|pair| relation.holds(pair[0], pair[1]))))
}
