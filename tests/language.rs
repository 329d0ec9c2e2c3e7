use std::{fs, rc::Rc};

use schemer::{
    Config,
    error::{Error, ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::{parse_expression, parse_source},
        value::core::Value,
    },
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_scheme_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, &Config::default()) {
                panic!("Scheme example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No Scheme examples found in book/src");
}

fn extract_scheme_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```scheme") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval(src: &str) -> Value {
    match get_result(src, &Config::default()) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("Script produced no value:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn eval_number(src: &str) -> f64 {
    match eval(src) {
        Value::Number(n) => n,
        other => panic!("Expected a number, got {other}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, &Config::default()) {
        panic!("Script failed: {e}");
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match get_result(src, &Config::default()) {
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Expected a runtime error, got parse error {e}"),
        Ok(v) => panic!("Script succeeded with {v:?} but was expected to fail"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match get_result(src, &Config::default()) {
        Err(Error::Parse(e)) => e,
        Err(Error::Runtime(e)) => panic!("Expected a parse error, got runtime error {e}"),
        Ok(v) => panic!("Script succeeded with {v:?} but was expected to fail"),
    }
}

#[test]
fn combination_with_many_operands() {
    assert_eq!(eval_number("(+ 21 35 12 7)"), 75.0);
    assert_eq!(eval_number("(* 25 4 12)"), 1200.0);
    assert_eq!(eval_number("(+ (* 3 (+ (* 2 4) (+ 3 5))) (+ (- 10 7) 6))"), 57.0);
}

#[test]
fn square_of_21() {
    assert_eq!(eval_number("(define (square x) (* x x))\n(square 21)"), 441.0);
    assert_eq!(eval_number("(define (square x) (* x x))\n(square (+ 2 5))"), 49.0);
    assert_eq!(eval_number("(define (square x) (* x x))\n(square (square 3))"), 81.0);
}

#[test]
fn sum_of_squares_through_f() {
    let src = r"
        (define (square x) (* x x))
        (define (sum-of-squares x y) (+ (square x) (square y)))
        (define (f a) (sum-of-squares (+ a 1) (* a 2)))
        (f 5)
    ";
    assert_eq!(eval_number(src), 136.0);
}

#[test]
fn abs_by_cases() {
    let def = "(define (abs x) (if (< x 0) (- x) x))\n";
    assert_eq!(eval_number(&format!("{def}(abs -7)")), 7.0);
    assert_eq!(eval_number(&format!("{def}(abs 0)")), 0.0);
    assert_eq!(eval_number(&format!("{def}(abs 7)")), 7.0);

    let def = "(define (abs x) (cond ((> x 0) x) ((= x 0) 0) ((< x 0) (- x))))\n";
    assert_eq!(eval_number(&format!("{def}(abs -7)")), 7.0);
    assert_eq!(eval_number(&format!("{def}(abs 0)")), 0.0);
    assert_eq!(eval_number(&format!("{def}(abs 7)")), 7.0);
}

#[test]
fn newton_square_root() {
    let tolerance = 0.001;

    let root = eval_number("(sqrt 9)");
    assert!((root * root - 9.0).abs() < tolerance);
    assert!((root - 3.0).abs() < tolerance);

    let squared = eval_number("(square (sqrt 1000))");
    assert!((squared - 1000.0).abs() < tolerance);
}

#[test]
fn new_if_never_terminates() {
    let src = r"
        (define (new-if predicate then-clause else-clause)
          (cond (predicate then-clause)
                (else else-clause)))
        (define (sqrt-iter guess x)
          (new-if (good-enough? guess x)
                  guess
                  (sqrt-iter (improve guess x) x)))
        (define (improve guess x) (average guess (/ x guess)))
        (define (good-enough? guess x) (< (abs (- (square guess) x)) 0.001))
        (sqrt-iter 1.0 9)
    ";
    let config = Config { max_depth: 100,
                          ..Config::default() };

    let err = get_result(src, &config).unwrap_err();
    assert!(matches!(err, Error::Runtime(RuntimeError::RecursionLimit { limit: 100, .. })));

    // The same procedure with the `if` special form terminates.
    let src = src.replace("(new-if (good-enough?", "(if (good-enough?");
    assert!(get_result(&src, &config).is_ok());
}

#[test]
fn tolerance_is_configurable() {
    let coarse = Config { tolerance: 1.0,
                          ..Config::default() };
    let fine = Config { tolerance: 1e-12,
                        ..Config::default() };

    let coarse_root = get_result("(sqrt 2)", &coarse).unwrap().unwrap();
    let fine_root = get_result("(sqrt 2)", &fine).unwrap().unwrap();

    let Value::Number(coarse_root) = coarse_root else { panic!("not a number") };
    let Value::Number(fine_root) = fine_root else { panic!("not a number") };

    assert!((fine_root - std::f64::consts::SQRT_2).abs() < 1e-9);
    assert!((coarse_root - std::f64::consts::SQRT_2).abs() > 1e-6);

    // Redefining the global changes the prelude procedures too.
    let root = eval_number("(define tolerance 1e-12)\n(sqrt 2)");
    assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
}

#[test]
fn relative_square_root_and_cube_root() {
    let small = eval_number("(sqrt-relative 0.0001)");
    assert!((small - 0.01).abs() < 1e-5);

    let large = eval_number("(sqrt-relative 1e13)");
    assert!((large / 3_162_277.660_168_379 - 1.0).abs() < 1e-3);

    let cube = eval_number("(cube-root 27)");
    assert!((cube - 3.0).abs() < 1e-2);

    assert_eq!(eval_number("(sqrt-relative 0)"), 0.0);
}

#[test]
fn if_evaluates_only_one_branch() {
    assert_eq!(eval_number("(if #t 1 undefined-name)"), 1.0);
    assert_eq!(eval_number("(if #f undefined-name 2)"), 2.0);
    assert_eq!(eval_number("(if 0 1 2)"), 1.0);
    assert!(matches!(runtime_error("(if #t undefined-name 1)"),
                     RuntimeError::UnboundName { .. }));
}

#[test]
fn cond_clauses() {
    assert_eq!(eval_number("(cond (#f 1) (#t 2) (else 3))"), 2.0);
    assert_eq!(eval_number("(cond (#f 1) (else 3))"), 3.0);
    assert_eq!(eval_number("(cond (7))"), 7.0);
    assert_eq!(eval_number("(cond ((> 3 2) 1 2 3))"), 3.0);
    assert_eq!(get_result("(cond (#f 1))", &Config::default()).unwrap(), None);
}

#[test]
fn one_armed_if_has_no_value() {
    assert_eq!(get_result("(if #f 1)", &Config::default()).unwrap(), None);
    assert!(matches!(runtime_error("(+ 1 (if #f 1))"), RuntimeError::MissingValue { .. }));
}

#[test]
fn lambda_and_closures() {
    assert_eq!(eval_number("((lambda (x y) (+ x y)) 3 4)"), 7.0);

    let src = r"
        (define (make-adder n) (lambda (x) (+ x n)))
        (define add5 (make-adder 5))
        (define n 100)
        (add5 1)
    ";
    assert_eq!(eval_number(src), 6.0);
}

#[test]
fn closures_capture_definition_environment() {
    let src = r"
        (define x 1)
        (define (get-x) x)
        (define (shadow x) (get-x))
        (shadow 42)
    ";
    assert_eq!(eval_number(src), 1.0);
}

#[test]
fn internal_definitions_and_block_structure() {
    let src = r"
        (define (f x)
          (define y (* x 2))
          (define (g z) (+ y z))
          (g 1))
        (f 10)
    ";
    assert_eq!(eval_number(src), 21.0);
    assert!(matches!(runtime_error(&format!("{src}\ny")), RuntimeError::UnboundName { .. }));
}

#[test]
fn parameter_names_are_local() {
    let by_x = eval_number("(define (sq x) (* x x))\n(define x 3)\n(+ (sq 5) x)");
    let by_y = eval_number("(define (sq y) (* y y))\n(define x 3)\n(+ (sq 5) x)");
    assert_eq!(by_x, by_y);
    assert_eq!(by_x, 28.0);
}

#[test]
fn recursion_on_the_default_limit() {
    let src = r"
        (define (count n) (if (= n 0) 0 (+ 1 (count (- n 1)))))
        (count 5000)
    ";
    assert_eq!(eval_number(src), 5000.0);
}

#[test]
fn builtins() {
    assert_eq!(eval_number("(- 10)"), -10.0);
    assert_eq!(eval_number("(- 10 1 2)"), 7.0);
    assert_eq!(eval_number("(/ 10 4)"), 2.5);
    assert_eq!(eval_number("(remainder 17 5)"), 2.0);
    assert_eq!(eval_number("(min 3 1 2)"), 1.0);
    assert_eq!(eval_number("(max 3 1 2)"), 3.0);
    assert_eq!(eval_number("(abs -2.5)"), 2.5);
    assert_eq!(eval("(< 1 2 3)"), Value::Bool(true));
    assert_eq!(eval("(>= 3 3 4)"), Value::Bool(false));
    assert_eq!(eval("(and 1 2)"), Value::Number(2.0));
    assert_eq!(eval("(or #f 5)"), Value::Number(5.0));
    assert_eq!(eval("(not 0)"), Value::Bool(false));
    assert_eq!(eval("(not false)"), Value::Bool(true));
    assert_success("(assert (= (* 6 7) 42))");
}

#[test]
fn operands_are_evaluated_left_to_right() {
    assert_eq!(runtime_error("(+ a b)"),
               RuntimeError::UnboundName { name: "a".to_string(),
                                           line: 1, });

    let first = "(define (f x y) x)\n(f (/ 1 0) undefined)";
    assert!(matches!(runtime_error(first), RuntimeError::DivisionByZero { line: 2, .. }));

    let second = "(define (f x y) x)\n(f undefined (/ 1 0))";
    assert_eq!(runtime_error(second),
               RuntimeError::UnboundName { name: "undefined".to_string(),
                                           line: 2, });

    assert_eq!(runtime_error("(no-such-procedure (/ 1 0))"),
               RuntimeError::UnboundName { name: "no-such-procedure".to_string(),
                                           line: 1, });
}

#[test]
fn builtins_reject_wrong_argument_counts_when_called_directly() {
    use schemer::interpreter::evaluator::builtin::{
        arithmetic::{abs, div, min_max, remainder, sub},
        logic::{assert_fn, not},
    };

    let one = [Value::Number(1.0)];

    assert!(matches!(abs(&[], 3), Err(RuntimeError::Arity { found: 0, line: 3, .. })));
    assert!(matches!(remainder(&one, 3), Err(RuntimeError::Arity { found: 1, .. })));
    assert!(matches!(not(&[], 3), Err(RuntimeError::Arity { .. })));
    assert!(matches!(assert_fn(&[], 3), Err(RuntimeError::Arity { .. })));
    assert!(matches!(sub(&[], 3), Err(RuntimeError::Arity { .. })));
    assert!(matches!(div(&[], 3), Err(RuntimeError::Arity { .. })));
    assert!(matches!(min_max("min", &[], 3), Err(RuntimeError::Arity { .. })));

    assert_eq!(remainder(&[Value::Number(7.0), Value::Number(2.0)], 1).unwrap(),
               Value::Number(1.0));
}

#[test]
fn every_comparison_keeps_its_own_relation() {
    assert_eq!(eval("(>= 1 2)"), Value::Bool(false));
    assert_eq!(eval("(>= 2 1)"), Value::Bool(true));
    assert_eq!(eval("(<= 2 1)"), Value::Bool(false));
    assert_eq!(eval("(= 1 2)"), Value::Bool(false));
    assert_eq!(eval("(> 1 1)"), Value::Bool(false));
    assert_eq!(eval("(< 1 1)"), Value::Bool(false));
}

#[test]
fn and_or_evaluate_every_operand() {
    assert!(matches!(runtime_error("(and #f undefined-name)"), RuntimeError::UnboundName { .. }));
    assert!(matches!(runtime_error("(or #t (/ 1 0))"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(eval_number("(define (abs x) 99)\n(abs -1)"), 99.0);
    assert_eq!(eval_number("(define (f +) (+ 2 3))\n(f *)"), 6.0);
}

#[test]
fn printed_values() {
    assert_eq!(eval("(/ 1 2)").to_string(), "0.5");
    assert_eq!(eval("#t").to_string(), "#t");
    assert_eq!(eval("(define (square x) (* x x))\nsquare").to_string(),
               "#[compound-procedure square]");
    assert_eq!(eval("(lambda (x) x)").to_string(), "#[compound-procedure anonymous]");
    assert_eq!(eval("+").to_string(), "#[compiled-procedure +]");
}

#[test]
fn context_keeps_definitions_between_runs() {
    let mut ctx = Context::with_config(&Config::default()).unwrap();
    assert_eq!(ctx.run("(define size 2)").unwrap(), None);
    assert_eq!(ctx.run("(* 5 size)").unwrap(), Some(Value::Number(10.0)));
    assert!(ctx.run("(* 5 nope)").is_err());
    assert_eq!(ctx.run("(square size)").unwrap(), Some(Value::Number(4.0)));
}

#[test]
fn prelude_can_be_disabled() {
    let config = Config { prelude: false,
                          ..Config::default() };
    assert!(matches!(get_result("(square 2)", &config),
                     Err(Error::Runtime(RuntimeError::UnboundName { .. }))));
    assert!(get_result("(+ 1 tolerance)", &config).is_ok());
}

#[test]
fn unbound_name_is_error() {
    let err = runtime_error("(define x 1)\n(+ x y)");
    assert_eq!(err,
               RuntimeError::UnboundName { name: "y".to_string(),
                                           line: 2, });
}

#[test]
fn arity_is_checked() {
    let err = runtime_error("(define (square x) (* x x))\n(square 1 2)");
    assert!(matches!(err, RuntimeError::Arity { found: 2, line: 2, .. }));
    assert_eq!(err.to_string(),
               "Error on line 2: #[compound-procedure square] has been called with 2 \
                argument(s); it requires exactly 1 argument.");

    assert!(matches!(runtime_error("(not 1 2)"), RuntimeError::Arity { .. }));
    assert!(matches!(runtime_error("(-)"), RuntimeError::Arity { .. }));
}

#[test]
fn non_procedure_is_not_applicable() {
    assert!(matches!(runtime_error("(5 3)"), RuntimeError::NotApplicable { .. }));
    assert!(matches!(runtime_error("(#t)"), RuntimeError::NotApplicable { .. }));
}

#[test]
fn type_errors() {
    assert!(matches!(runtime_error("(+ 1 #t)"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("(< 1 +)"), RuntimeError::TypeError { .. }));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(runtime_error("(/ 1 0)"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("(remainder 1 0)"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn assertion_failure_is_error() {
    assert!(matches!(runtime_error("(assert (= 1 2))"), RuntimeError::AssertionFailed { .. }));
}

#[test]
fn definition_in_operand_position_is_error() {
    assert!(matches!(runtime_error("(+ 1 (define x 2))"), RuntimeError::MissingValue { .. }));
    assert!(matches!(runtime_error("((lambda () (define x 2)))"), RuntimeError::MissingValue { .. }));
}

#[test]
fn parse_errors() {
    assert!(matches!(parse_error("(+ 1 2"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_error("(+ 1 2))"), ParseError::UnbalancedClosingParen { .. }));
    assert!(matches!(parse_error("()"), ParseError::EmptyCombination { .. }));
    assert!(matches!(parse_error("(define)"), ParseError::IllFormedSpecialForm { .. }));
    assert!(matches!(parse_error("(define x 1 2)"), ParseError::IllFormedSpecialForm { .. }));
    assert!(matches!(parse_error("(if)"), ParseError::IllFormedSpecialForm { .. }));
    assert!(matches!(parse_error("(if 1 2 3 4)"), ParseError::IllFormedSpecialForm { .. }));
    assert!(matches!(parse_error("(lambda x x)"), ParseError::IllFormedSpecialForm { .. }));
    assert!(matches!(parse_error("(lambda (x))"), ParseError::IllFormedSpecialForm { .. }));
    assert!(matches!(parse_error("(lambda (x x) x)"), ParseError::DuplicateParameter { .. }));
    assert!(matches!(parse_error("(cond (else 1) (#t 2))"),
                     ParseError::IllFormedSpecialForm { .. }));
    assert!(matches!(parse_error("(cond ())"), ParseError::IllFormedSpecialForm { .. }));
    assert!(matches!(parse_error("(define if 1)"), ParseError::IdentifierReserved { .. }));
    assert!(matches!(parse_error("(+ lambda 1)"), ParseError::IdentifierReserved { .. }));
    assert!(matches!(parse_error("(else 1)"), ParseError::IdentifierReserved { .. }));
    assert!(matches!(parse_error("(+ 1 @)"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn parse_errors_stop_before_evaluation() {
    let mut ctx = Context::new();
    assert!(ctx.run("(define x 1)\n(+ 1").is_err());
    assert!(ctx.run("x").is_err());
}

#[test]
fn comments_and_line_numbers() {
    let src = "; square things\n(define (square x) (* x x)) ; trailing\n\n(square nope)";
    assert_eq!(runtime_error(src),
               RuntimeError::UnboundName { name: "nope".to_string(),
                                           line: 4, });
}

#[test]
fn deeply_nested_combinations() {
    let depth = 3_000;
    let src = format!("{}1{}", "(+ ".repeat(depth), ")".repeat(depth));

    assert_eq!(parse_source(&src).unwrap().len(), 1);
    assert_eq!(eval_number(&src), 1.0);
}

#[test]
fn end_of_input_reports_the_enclosing_line() {
    let tokens = tokenize("(define x 1)\n(square x)").unwrap();
    let mut stream = tokens.iter().peekable();

    assert!(parse_expression(&mut stream, 1).is_ok());
    assert!(parse_expression(&mut stream, 2).is_ok());
    assert_eq!(parse_expression(&mut stream, 2).unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 2 });

    assert!(matches!(parse_error("\n\n(define x"),
                     ParseError::ExpectedClosingParen { line: 3 }));
}

#[test]
fn internal_definitions_release_their_call_frame() {
    let mut ctx = Context::new();
    ctx.run("(define (h x) (define (g) x) g)").unwrap();

    let g = ctx.run("(h 1)").unwrap().unwrap();
    let Value::Procedure(procedure) = &g else {
        panic!("Expected a compound procedure, got {g}");
    };
    let frame = Rc::downgrade(&procedure.env);

    assert_eq!(ctx.apply(&g, vec![], 1).unwrap(), Value::Number(1.0));
    assert!(frame.upgrade().is_some());

    drop(g);
    assert!(frame.upgrade().is_none());
}

#[test]
fn frames_of_calls_returning_numbers_are_released() {
    let mut ctx = Context::new();
    ctx.run("(define (make-const y) (lambda () y))\n\
             (define (use-const) (define get (make-const 7)) (get))")
       .unwrap();

    let outer = ctx.run("(define (outer) (define (inner) 1) inner)\n(outer)")
                   .unwrap()
                   .unwrap();
    let Value::Procedure(inner) = &outer else {
        panic!("Expected a compound procedure, got {outer}");
    };
    let frame = Rc::downgrade(&inner.env);
    drop(outer);
    assert!(frame.upgrade().is_none());

    assert_eq!(ctx.run("(use-const)").unwrap(), Some(Value::Number(7.0)));
    assert_eq!(Rc::strong_count(&ctx.global()), 2);
}
