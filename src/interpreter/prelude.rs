/// Scheme source of the chapter's worked procedures.
///
/// `sqrt` stops once the square of the guess is within the global
/// `tolerance` of the radicand. That test is useless for very small radicands
/// and may never succeed for very large ones, so `sqrt-relative` instead
/// stops when an improvement changes the guess by less than `tolerance` times
/// the guess. `cube-root` uses the same relative test.
///
/// Every procedure reads `tolerance` when it runs, so redefining it changes
/// their precision.
///
/// # Example
/// ```
/// use schemer::{Config, get_result};
///
/// let v = get_result("(sum-of-squares 3 4)", &Config::default()).unwrap();
/// assert_eq!(v.unwrap().to_string(), "25");
/// ```
pub const PRELUDE: &str = "\
(define (square x) (* x x))

(define (cube x) (* x x x))

(define (average x y) (/ (+ x y) 2))

(define (sum-of-squares x y) (+ (square x) (square y)))

(define (sqrt x)
  (define (good-enough? guess)
    (< (abs (- (square guess) x)) tolerance))
  (define (improve guess)
    (average guess (/ x guess)))
  (define (sqrt-iter guess)
    (if (good-enough? guess)
        guess
        (sqrt-iter (improve guess))))
  (sqrt-iter 1.0))

(define (sqrt-relative x)
  (define (improve guess)
    (average guess (/ x guess)))
  (define (good-enough? guess next)
    (< (abs (- next guess)) (* tolerance (abs guess))))
  (define (sqrt-iter guess)
    (define next (improve guess))
    (if (good-enough? guess next)
        next
        (sqrt-iter next)))
  (if (= x 0) 0 (sqrt-iter 1.0)))

(define (cube-root x)
  (define (improve guess)
    (/ (+ (/ x (square guess)) (* 2 guess)) 3))
  (define (good-enough? guess next)
    (< (abs (- next guess)) (* tolerance (abs guess))))
  (define (cube-root-iter guess)
    (define next (improve guess))
    (if (good-enough? guess next)
        next
        (cube-root-iter next)))
  (if (= x 0) 0 (cube-root-iter 1.0)))
";
