use std::{fmt, rc::Rc};

use crate::{ast::Expr, interpreter::environment::Environment};

/// A user-defined procedure closed over its defining environment.
///
/// Calling it creates a fresh environment whose parent is `env`, binds the
/// formal parameters there, and evaluates `body` in it. Because `env` is the
/// environment of the *definition*, free variables in the body resolve
/// lexically.
pub struct Procedure {
    /// The name given by `define`, if the lambda was defined directly.
    pub name:   Option<String>,
    /// Formal parameter names.
    pub params: Rc<[String]>,
    /// Body expressions; the last one produces the result.
    pub body:   Rc<[Expr]>,
    /// The environment in effect when the lambda was evaluated.
    pub env:    Rc<Environment>,
}

impl Procedure {
    /// The procedure name, or `anonymous` for unnamed lambdas.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("anonymous")
    }

    /// Returns `true` if both values come from the same `lambda` evaluated in
    /// the same environment under the same name.
    ///
    /// Looking a procedure up in the frame it closes over builds a fresh
    /// `Procedure`, so identity of the `Rc` alone is not enough.
    #[must_use]
    pub fn same_closure(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
        && Rc::ptr_eq(&self.env, &other.env)
        && self.name == other.name
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Procedure")
         .field("name", &self.name)
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}
