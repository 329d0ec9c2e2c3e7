use std::rc::Rc;

/// An abstract syntax tree (AST) node representing a Scheme expression.
///
/// `Expr` covers the literals, symbols, combinations and special forms of the
/// language. Special forms (`if`, `cond`, `lambda`, `define`) get their own
/// variants because they do not follow the evaluation rule for combinations.
/// Every variant records the line it started on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `486` or `2.7`.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal, `#t` or `#f`.
    Bool {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A name looked up in the environment.
    Symbol {
        /// Name of the symbol.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A procedure application, e.g. `(+ 21 35 12 7)`.
    Combination {
        /// Expression in operator position. It may itself be a combination.
        operator: Box<Self>,
        /// Operand expressions, evaluated left to right.
        operands: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `(if <predicate> <consequent> <alternative>)`.
    If {
        /// The condition.
        predicate:   Box<Self>,
        /// Expression evaluated when the predicate is not `#f`.
        consequent:  Box<Self>,
        /// Expression evaluated when the predicate is `#f`, if present.
        alternative: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `(cond (<p1> <e1> ...) ... (else <e> ...))`.
    Cond {
        /// Clauses in source order.
        clauses: Vec<CondClause>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `(lambda (<formal parameters>) <body>)`.
    Lambda {
        /// Formal parameter names.
        params: Rc<[String]>,
        /// Body expressions; the value of the last one is the result. Shared
        /// with every procedure the lambda evaluates to.
        body:   Rc<[Self]>,
        /// Line number in the source code.
        line:   usize,
    },
    /// `(define <name> <value>)`, also produced by the
    /// `(define (<name> <params>) <body>)` shorthand.
    Definition {
        /// The name being bound.
        name:  String,
        /// Expression whose value is bound to `name`.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// A single clause of a `cond` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CondClause {
    /// The clause predicate, or `None` for an `else` clause.
    pub predicate: Option<Expr>,
    /// Expressions evaluated when the clause is selected. May be empty, in
    /// which case the predicate's value is the result.
    pub body:      Vec<Expr>,
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use schemer::ast::Expr;
    ///
    /// let expr = Expr::Symbol { name: "x".to_string(),
    ///                           line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Bool { line, .. }
            | Self::Symbol { line, .. }
            | Self::Combination { line, .. }
            | Self::If { line, .. }
            | Self::Cond { line, .. }
            | Self::Lambda { line, .. }
            | Self::Definition { line, .. } => *line,
        }
    }

    /// Shorthand for a numeric literal on line 0.
    ///
    /// Useful when building expressions programmatically.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value, line: 0 }
    }

    /// Shorthand for a symbol on line 0.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol { name: name.into(),
                       line: 0, }
    }

    /// Shorthand for a combination on line 0.
    ///
    /// ## Example
    /// ```
    /// use schemer::ast::Expr;
    ///
    /// let sum = Expr::combination(Expr::symbol("+"), vec![Expr::number(1.0), Expr::number(2.0)]);
    /// assert!(matches!(sum, Expr::Combination { .. }));
    /// ```
    #[must_use]
    pub fn combination(operator: Self, operands: Vec<Self>) -> Self {
        Self::Combination { operator: Box::new(operator),
                            operands,
                            line: 0 }
    }
}

/// Names that introduce special forms and therefore cannot be rebound.
pub const SPECIAL_FORMS: &[&str] = &["define", "if", "cond", "else", "lambda"];
