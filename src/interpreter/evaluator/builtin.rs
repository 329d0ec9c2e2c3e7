use std::fmt;

use crate::interpreter::{
    environment::Environment,
    evaluator::{builtin::comparison::Relation, core::EvalResult},
    value::core::Value,
};

/// `+`, `-`, `*`, `/` and the other numeric primitives.
pub mod arithmetic;
/// Chained numeric comparisons: `=`, `<`, `>`, `<=`, `>=`.
pub mod comparison;
/// `and`, `or`, `not` and `assert`.
pub mod logic;

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number
/// of the combination that called it.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means any count of `n` or more is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use schemer::interpreter::evaluator::builtin::Arity;
    ///
    /// assert!(Arity::Exact(2).check(2));
    /// assert!(!Arity::Exact(2).check(3));
    /// assert!(Arity::AtLeast(1).check(5));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// ```
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, n) = match self {
            Self::Exact(n) => ("exactly", *n),
            Self::AtLeast(n) => ("at least", *n),
        };
        let noun = if n == 1 { "argument" } else { "arguments" };
        write!(f, "{prefix} {n} {noun}")
    }
}

/// A primitive procedure: its name, accepted argument counts and handler.
#[derive(Debug)]
pub struct Builtin {
    pub name:  &'static str,
    pub arity: Arity,
    pub func:  BuiltinFn,
}

/// Defines builtin procedures by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE`, the static table bound into every
/// global environment.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "+"         => { arity: Arity::AtLeast(0), func: arithmetic::add },
    "*"         => { arity: Arity::AtLeast(0), func: arithmetic::mul },
    "-"         => { arity: Arity::AtLeast(1), func: arithmetic::sub },
    "/"         => { arity: Arity::AtLeast(1), func: arithmetic::div },
    "abs"       => { arity: Arity::Exact(1), func: arithmetic::abs },
    "remainder" => { arity: Arity::Exact(2), func: arithmetic::remainder },
    "min"       => { arity: Arity::AtLeast(1), func: |args, line| arithmetic::min_max("min", args, line) },
    "max"       => { arity: Arity::AtLeast(1), func: |args, line| arithmetic::min_max("max", args, line) },
    "="         => { arity: Arity::AtLeast(1), func: |args, line| comparison::compare(Relation::Equal, args, line) },
    "<"         => { arity: Arity::AtLeast(1), func: |args, line| comparison::compare(Relation::Less, args, line) },
    ">"         => { arity: Arity::AtLeast(1), func: |args, line| comparison::compare(Relation::Greater, args, line) },
    "<="        => { arity: Arity::AtLeast(1), func: |args, line| comparison::compare(Relation::LessOrEqual, args, line) },
    ">="        => { arity: Arity::AtLeast(1), func: |args, line| comparison::compare(Relation::GreaterOrEqual, args, line) },
    "and"       => { arity: Arity::AtLeast(0), func: logic::and },
    "or"        => { arity: Arity::AtLeast(0), func: logic::or },
    "not"       => { arity: Arity::Exact(1), func: logic::not },
    "assert"    => { arity: Arity::Exact(1), func: logic::assert_fn },
}

/// Binds every builtin under its name in `env`.
pub fn install(env: &Environment) {
    for builtin in BUILTIN_TABLE {
        env.define(builtin.name, Value::Builtin(builtin));
    }
}

/// Finds a builtin by name.
///
/// # Example
/// ```
/// use schemer::interpreter::evaluator::builtin::{Arity, lookup};
///
/// assert_eq!(lookup("remainder").unwrap().arity, Arity::Exact(2));
/// assert!(lookup("sqrt").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}
