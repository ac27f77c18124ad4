/// Absolute tolerance used by the `==` and `!=` operators.
pub const EPSILON: f64 = 1e-4;

/// Compares two doubles for equality within [`EPSILON`].
///
/// The comparison is a plain absolute-difference check. `NaN` compares
/// unequal to everything, including itself.
///
/// # Parameters
/// - `a`: Left operand.
/// - `b`: Right operand.
///
/// # Returns
/// `true` if the absolute difference is below [`EPSILON`].
///
/// # Example
/// ```
/// use linescript::util::num::doubles_equal;
///
/// assert!(doubles_equal(1.0, 1.0));
/// assert!(doubles_equal(1.0, 1.00005));
/// assert!(!doubles_equal(1.0, 1.1));
/// assert!(!doubles_equal(f64::NAN, f64::NAN));
/// ```
#[must_use]
pub fn doubles_equal(a: f64, b: f64) -> bool {
    let diff = a - b;
    diff < EPSILON && -diff < EPSILON
}

/// Renders a double in the language's canonical textual form.
///
/// The value is formatted with six fractional digits, then trailing zeros
/// and a trailing decimal point are stripped. This is the one formatter
/// used by `print`, by string concatenation of numeric operands, and by the
/// interactive prompt, so `25.0` always prints as `25` and `7.0_f64.sqrt()`
/// as `2.645751`.
///
/// # Parameters
/// - `value`: The number to render.
///
/// # Returns
/// The formatted text.
///
/// # Example
/// ```
/// use linescript::util::num::format_number;
///
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(7.0_f64.sqrt()), "2.645751");
/// assert_eq!(format_number(-0.25), "-0.25");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let mut text = format!("{value:.6}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
