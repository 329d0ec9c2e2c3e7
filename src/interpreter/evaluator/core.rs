use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{CondClause, Expr},
    config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_TOLERANCE},
    error::{Error, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::builtin,
        parser::core::parse_source,
        prelude::PRELUDE,
        value::{core::Value, procedure::Procedure},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the global environment and tracks how deeply compound
/// procedure applications are currently nested.
///
/// ## Usage
///
/// A `Context` is created once and reused: definitions made by one call to
/// [`Context::run`] stay visible to the next.
///
/// ```
/// use schemer::interpreter::evaluator::core::Context;
///
/// let mut ctx = Context::new();
/// ctx.run("(define (square x) (* x x))").unwrap();
///
/// let v = ctx.run("(square 12)").unwrap().unwrap();
/// assert_eq!(v.to_string(), "144");
/// ```
pub struct Context {
    pub(crate) global:    Rc<Environment>,
    /// Applications nested deeper than this fail with `RecursionLimit`.
    pub(crate) max_depth: usize,
    /// Compound procedure applications currently in progress.
    pub(crate) depth:     usize,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context whose global environment holds the built-ins,
    /// `true`, `false` and the default `tolerance`. The prelude is not
    /// loaded.
    #[must_use]
    pub fn new() -> Self {
        let global = Rc::new(Environment::new());

        builtin::install(&global);
        global.define("true", Value::Bool(true));
        global.define("false", Value::Bool(false));
        global.define("tolerance", Value::Number(DEFAULT_TOLERANCE));

        Self { global,
               max_depth: DEFAULT_MAX_DEPTH,
               depth: 0 }
    }

    /// Creates a context shaped by `config`.
    ///
    /// Binds `tolerance`, sets the recursion limit and, when
    /// `config.prelude` is set, evaluates the prelude in the global
    /// environment.
    ///
    /// # Errors
    /// Only if the prelude itself fails to load.
    pub fn with_config(config: &Config) -> Result<Self, Error> {
        let mut context = Self::new();

        context.max_depth = config.max_depth;
        context.global.define("tolerance", Value::Number(config.tolerance));

        if config.prelude {
            debug!(tolerance = config.tolerance, "loading prelude");
            context.run(PRELUDE)?;
        }

        Ok(context)
    }

    /// The global environment.
    #[must_use]
    pub fn global(&self) -> Rc<Environment> {
        Rc::clone(&self.global)
    }

    /// Parses `source` and evaluates every top-level expression in the global
    /// environment.
    ///
    /// # Returns
    /// The value of the last expression that produced one, or `None` if none
    /// did (for example a program made only of definitions).
    ///
    /// # Errors
    /// Parse errors are reported before anything is evaluated. Evaluation
    /// stops at the first runtime error; definitions made before it remain.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let program = parse_source(source)?;
        let global = Rc::clone(&self.global);
        let mut last = None;

        for expr in &program {
            if let Some(value) = self.eval(expr, &global)? {
                last = Some(value);
            }
        }

        Ok(last)
    }

    /// Evaluates an expression in `env` and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals evaluate to themselves,
    /// symbols are looked up, special forms follow their own rules and
    /// combinations are applied in applicative order.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Environment the expression is evaluated in.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// definitions, a one-armed `if` whose predicate is false, and a `cond`
    /// with no matching clause.
    ///
    /// # Example
    /// ```
    /// use schemer::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let global = ctx.global();
    /// let expr = Expr::combination(Expr::symbol("+"),
    ///                              vec![Expr::number(21.0), Expr::number(35.0)]);
    ///
    /// assert_eq!(ctx.eval(&expr, &global).unwrap(), Some(Value::Number(56.0)));
    /// ```
    pub fn eval(&mut self, expr: &Expr, env: &Rc<Environment>) -> EvalResult<Option<Value>> {
        ensure_sufficient_stack(|| self.eval_expr(expr, env))
    }

    fn eval_expr(&mut self, expr: &Expr, env: &Rc<Environment>) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Number { value, .. } => Ok(Some(Value::Number(*value))),
            Expr::Bool { value, .. } => Ok(Some(Value::Bool(*value))),
            Expr::Symbol { name, line } => {
                env.lookup(name)
                   .map(Some)
                   .ok_or_else(|| RuntimeError::UnboundName { name: name.clone(),
                                                              line: *line, })
            },
            Expr::Combination { operator,
                                operands,
                                line, } => {
                let v = self.eval_combination(operator, operands, env, *line)?;
                Ok(Some(v))
            },
            Expr::If { predicate,
                       consequent,
                       alternative,
                       line, } => self.eval_if(predicate, consequent, alternative.as_deref(), env, *line),
            Expr::Cond { clauses, line } => self.eval_cond(clauses, env, *line),
            Expr::Lambda { params, body, .. } => {
                Ok(Some(Self::make_procedure(None, params, body, env)))
            },
            Expr::Definition { name, value, line } => {
                self.eval_definition(name, value, env, *line)?;
                Ok(None)
            },
        }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// # Errors
    /// `MissingValue` on `line` when the expression yields nothing, such as a
    /// definition used as an operand.
    pub fn eval_child(&mut self,
                      expr: &Expr,
                      env: &Rc<Environment>,
                      line: usize)
                      -> EvalResult<Value> {
        self.eval(expr, env)?
            .ok_or(RuntimeError::MissingValue { line })
    }

    /// Evaluates a body in order and returns the result of the last
    /// expression.
    pub(crate) fn eval_sequence(&mut self,
                                body: &[Expr],
                                env: &Rc<Environment>)
                                -> EvalResult<Option<Value>> {
        let mut result = None;
        for expr in body {
            result = self.eval(expr, env)?;
        }
        Ok(result)
    }

    /// Evaluates `if`. Only the selected branch is evaluated.
    fn eval_if(&mut self,
               predicate: &Expr,
               consequent: &Expr,
               alternative: Option<&Expr>,
               env: &Rc<Environment>,
               line: usize)
               -> EvalResult<Option<Value>> {
        if self.eval_child(predicate, env, line)?.is_truthy() {
            self.eval(consequent, env)
        } else if let Some(alternative) = alternative {
            self.eval(alternative, env)
        } else {
            Ok(None)
        }
    }

    /// Evaluates `cond`: the first clause whose predicate is not `#f` wins.
    /// A clause without body expressions yields its predicate's value.
    fn eval_cond(&mut self,
                 clauses: &[CondClause],
                 env: &Rc<Environment>,
                 line: usize)
                 -> EvalResult<Option<Value>> {
        for clause in clauses {
            let Some(predicate) = &clause.predicate else {
                return self.eval_sequence(&clause.body, env);
            };

            let test = self.eval_child(predicate, env, line)?;
            if test.is_truthy() {
                if clause.body.is_empty() {
                    return Ok(Some(test));
                }
                return self.eval_sequence(&clause.body, env);
            }
        }

        Ok(None)
    }

    /// Binds `name` in `env`. A lambda value is named after the definition.
    fn eval_definition(&mut self,
                       name: &str,
                       value: &Expr,
                       env: &Rc<Environment>,
                       line: usize)
                       -> EvalResult<()> {
        let value = match value {
            Expr::Lambda { params, body, .. } => {
                Self::make_procedure(Some(name.to_string()), params, body, env)
            },
            other => self.eval_child(other, env, line)?,
        };

        if Rc::ptr_eq(env, &self.global) {
            debug!(name, %value, line, "global definition");
        }

        env.define(name, value);
        Ok(())
    }

    fn make_procedure(name: Option<String>,
                      params: &Rc<[String]>,
                      body: &Rc<[Expr]>,
                      env: &Rc<Environment>)
                      -> Value {
        Value::Procedure(Rc::new(Procedure { name,
                                             params: Rc::clone(params),
                                             body: Rc::clone(body),
                                             env: Rc::clone(env) }))
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.global.clear();
    }
}
