use std::rc::Rc;

use tracing::{trace, warn};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            builtin::Arity,
            core::{Context, EvalResult},
        },
        value::{core::Value, procedure::Procedure},
    },
    util::stack::ensure_sufficient_stack,
};

impl Context {
    /// Evaluates a combination in applicative order.
    ///
    /// The operator is evaluated first, then every operand from left to
    /// right, all in `env`. Only then is the procedure applied.
    ///
    /// # Parameters
    /// - `operator`: Expression in operator position.
    /// - `operands`: Operand expressions.
    /// - `env`: Environment of the combination.
    /// - `line`: Line number for error reporting.
    pub(crate) fn eval_combination(&mut self,
                                   operator: &Expr,
                                   operands: &[Expr],
                                   env: &Rc<Environment>,
                                   line: usize)
                                   -> EvalResult<Value> {
        let procedure = self.eval_child(operator, env, line)?;

        let mut arg_vals = Vec::with_capacity(operands.len());
        for operand in operands {
            arg_vals.push(self.eval_child(operand, env, line)?);
        }

        self.apply(&procedure, arg_vals, line)
    }

    /// Applies a procedure value to already evaluated arguments.
    ///
    /// # Errors
    /// - `NotApplicable` if `procedure` is a number or boolean.
    /// - `Arity` if the argument count does not fit the procedure.
    /// - `RecursionLimit` if the application would nest deeper than the
    ///   configured maximum.
    /// - Whatever the procedure body or built-in reports.
    ///
    /// # Example
    /// ```
    /// use schemer::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut ctx = Context::new();
    /// let max = ctx.global().lookup("max").unwrap();
    ///
    /// let v = ctx.apply(&max, vec![Value::Number(3.0), Value::Number(8.0)], 1)
    ///            .unwrap();
    /// assert_eq!(v, Value::Number(8.0));
    ///
    /// assert!(ctx.apply(&Value::Number(3.0), vec![], 1).is_err());
    /// ```
    pub fn apply(&mut self, procedure: &Value, arg_vals: Vec<Value>, line: usize) -> EvalResult<Value> {
        match procedure {
            Value::Builtin(builtin) => {
                if !builtin.arity.check(arg_vals.len()) {
                    return Err(RuntimeError::Arity { name: procedure.to_string(),
                                                     expected: builtin.arity.to_string(),
                                                     found: arg_vals.len(),
                                                     line });
                }
                (builtin.func)(&arg_vals, line)
            },
            Value::Procedure(compound) => self.apply_compound(compound, arg_vals, line),
            Value::Number(_) | Value::Bool(_) => {
                Err(RuntimeError::NotApplicable { value: procedure.to_string(),
                                                  line })
            },
        }
    }

    /// Runs a compound procedure body in a fresh frame enclosed by the
    /// procedure's defining environment.
    ///
    /// Unless the call returns a procedure, which may have captured the frame,
    /// the frame is cleared afterwards so closures bound in it are released.
    fn apply_compound(&mut self,
                      procedure: &Rc<Procedure>,
                      arg_vals: Vec<Value>,
                      line: usize)
                      -> EvalResult<Value> {
        let arity = Arity::Exact(procedure.params.len());
        if !arity.check(arg_vals.len()) {
            return Err(RuntimeError::Arity { name: Value::Procedure(Rc::clone(procedure)).to_string(),
                                             expected: arity.to_string(),
                                             found: arg_vals.len(),
                                             line });
        }

        if self.depth >= self.max_depth {
            warn!(procedure = procedure.display_name(),
                  limit = self.max_depth,
                  line,
                  "recursion limit reached");
            return Err(RuntimeError::RecursionLimit { limit: self.max_depth,
                                                      line });
        }

        let frame = Rc::new(Environment::with_parent(Rc::clone(&procedure.env)));
        for (param, value) in procedure.params.iter().zip(arg_vals) {
            frame.define(param.as_str(), value);
        }

        self.depth += 1;
        trace!(procedure = procedure.display_name(),
               argc = procedure.params.len(),
               depth = self.depth,
               "apply");

        let result = ensure_sufficient_stack(|| self.eval_sequence(&procedure.body, &frame));

        self.depth -= 1;

        if !matches!(result, Ok(Some(Value::Procedure(_)))) {
            frame.clear();
        }

        result?.ok_or(RuntimeError::MissingValue { line })
    }
}
