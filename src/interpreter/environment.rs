use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    ast::Expr,
    interpreter::value::{core::Value, procedure::Procedure},
};

/// What a frame stores under a name.
///
/// A procedure whose captured environment is the very frame it is bound in
/// is stored with a weak link back to that frame. The frame therefore never
/// owns itself, and it is freed as soon as the last procedure value or call
/// using it goes away.
enum Binding {
    Value(Value),
    Closure {
        name:   Option<String>,
        params: Rc<[String]>,
        body:   Rc<[Expr]>,
        env:    Weak<Environment>,
    },
}

impl Binding {
    fn value(&self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(value.clone()),
            Self::Closure { name,
                            params,
                            body,
                            env, } => {
                let env = env.upgrade()?;
                Some(Value::Procedure(Rc::new(Procedure { name: name.clone(),
                                                          params: Rc::clone(params),
                                                          body: Rc::clone(body),
                                                          env })))
            },
        }
    }
}

/// A frame of bindings plus a link to the enclosing environment.
///
/// Environments are shared through `Rc`: the global environment is owned by
/// the evaluation context, every other one by the procedures that captured it
/// and by the call currently running in it. The frame itself sits behind a
/// `RefCell` so that `define` can add a binding to a frame that closures have
/// already captured, which is what makes recursive and internal definitions
/// visible to the procedures defined alongside them.
///
/// A procedure bound in the frame it closes over is held weakly (see
/// [`Environment::define`]), so internal definitions do not keep a call frame
/// alive after the call returns.
#[derive(Default)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Binding>>,
    parent:   Option<Rc<Self>>,
}

impl Environment {
    /// Creates an empty environment with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment enclosed by `parent`.
    ///
    /// This is the frame a procedure call evaluates its body in.
    #[must_use]
    pub fn with_parent(parent: Rc<Self>) -> Self {
        Self { bindings: RefCell::new(HashMap::new()),
               parent:   Some(parent), }
    }

    /// Binds `name` in this frame, replacing any previous binding in the same
    /// frame. Enclosing frames are never touched.
    ///
    /// A compound procedure that captured this frame is stored with a weak
    /// link to it; [`Environment::lookup`] rebuilds an equal procedure value
    /// holding the frame strongly.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use schemer::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut ctx = Context::new();
    /// ctx.run("(define (keep n) (define (get) n) get)").unwrap();
    ///
    /// let get = ctx.run("(keep 5)").unwrap().unwrap();
    /// let Value::Procedure(p) = &get else { unreachable!() };
    /// let frame = Rc::downgrade(&p.env);
    ///
    /// drop(get);
    /// assert!(frame.upgrade().is_none());
    /// ```
    pub fn define(&self, name: impl Into<String>, value: Value) {
        let binding = match value {
            Value::Procedure(p) if std::ptr::eq(Rc::as_ptr(&p.env), self) => {
                Binding::Closure { name:   p.name.clone(),
                                   params: Rc::clone(&p.params),
                                   body:   Rc::clone(&p.body),
                                   env:    Rc::downgrade(&p.env), }
            },
            other => Binding::Value(other),
        };
        self.bindings.borrow_mut().insert(name.into(), binding);
    }

    /// Looks `name` up, innermost frame first.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use schemer::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let global = Rc::new(Environment::new());
    /// global.define("x", Value::Number(1.0));
    /// global.define("y", Value::Number(2.0));
    ///
    /// let local = Environment::with_parent(Rc::clone(&global));
    /// local.define("x", Value::Number(10.0));
    ///
    /// assert_eq!(local.lookup("x"), Some(Value::Number(10.0)));
    /// assert_eq!(local.lookup("y"), Some(Value::Number(2.0)));
    /// assert_eq!(global.lookup("x"), Some(Value::Number(1.0)));
    /// assert_eq!(local.lookup("z"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut frame = self;
        loop {
            if let Some(binding) = frame.bindings.borrow().get(name) {
                return binding.value();
            }
            frame = frame.parent.as_deref()?;
        }
    }

    /// Returns `true` if `name` is bound in this frame, ignoring parents.
    #[must_use]
    pub fn is_bound_locally(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    /// Removes every binding in this frame.
    ///
    /// A procedure bound here may capture a frame nested inside this one,
    /// which in turn holds this frame as its parent; clearing breaks that
    /// cycle so all of them can be freed.
    pub fn clear(&self) {
        self.bindings.borrow_mut().clear();
    }

    /// The enclosing environment, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }
}

impl fmt::Debug for Environment {
    // Only names: values may hold procedures that point back at this frame.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.bindings.borrow();
        let mut names = bindings.keys().collect::<Vec<_>>();
        names.sort();

        f.debug_struct("Environment")
         .field("names", &names)
         .field("parent", &self.parent)
         .finish()
    }
}
