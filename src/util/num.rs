/// Formats a number the way a Scheme REPL would print it.
///
/// Whole numbers print without a fractional part, non-finite values use the
/// `+inf.0`, `-inf.0` and `+nan.0` spellings, everything else uses the
/// shortest representation that round-trips.
///
/// ## Example
/// ```
/// use schemer::util::num::format_number;
///
/// assert_eq!(format_number(75.0), "75");
/// assert_eq!(format_number(12.7), "12.7");
/// assert_eq!(format_number(-0.5), "-0.5");
/// assert_eq!(format_number(f64::INFINITY), "+inf.0");
/// assert_eq!(format_number(f64::NAN), "+nan.0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "+nan.0".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "+inf.0" } else { "-inf.0" }.to_string()
    } else {
        format!("{value}")
    }
}
