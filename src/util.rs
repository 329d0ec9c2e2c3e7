/// Numeric helpers.
///
/// Scheme-flavoured printing of numbers, shared by value display and error
/// messages.
pub mod num;
/// Stack growth for deep recursion.
///
/// The parser and the evaluator recurse once per nesting level of the source
/// and once per procedure application; both run their recursive steps through
/// [`stack::ensure_sufficient_stack`].
pub mod stack;
