use crate::{ast::Function, compiler::registry::functions::FunctionTable};

/// Defines the built-in functions by generating an installer and a name
/// list.
///
/// Each entry provides a name and a constructor expression yielding a
/// [`Function`]. The macro produces:
/// - `install` (registers every entry into a table),
/// - `BUILTIN_FUNCTIONS` (public list of built-in names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $function:expr
        ),* $(,)?
    ) => {
        /// Registers every built-in function into `table`.
        pub fn install(table: &mut FunctionTable) {
            $(
                table.register($name, $function);
            )*
        }

        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"     => Function::unary(f64::abs),
    "acos"    => Function::unary(f64::acos),
    "asin"    => Function::unary(f64::asin),
    "atan"    => Function::unary(f64::atan),
    "ceiling" => Function::unary(f64::ceil),
    "cos"     => Function::unary(f64::cos),
    "cosh"    => Function::unary(f64::cosh),
    "exp"     => Function::unary(f64::exp),
    "floor"   => Function::unary(f64::floor),
    "log"     => Function::unary(f64::ln),
    "log10"   => Function::unary(f64::log10),
    "round"   => Function::unary(f64::round_ties_even),
    "sign"    => Function::unary(sign),
    "sin"     => Function::unary(f64::sin),
    "sinh"    => Function::unary(f64::sinh),
    "sqrt"    => Function::unary(f64::sqrt),
    "tan"     => Function::unary(f64::tan),
    "tanh"    => Function::unary(f64::tanh),
    "max"     => Function::binary(f64::max),
    "min"     => Function::binary(f64::min),
    "if"      => Function::conditional(choose),
}

/// Returns `-1.0`, `0.0` or `1.0` according to the sign of `x`.
///
/// Both zeros map to `0.0` and NaN is returned unchanged.
///
/// # Example
/// ```
/// use equate::compiler::registry::builtin::sign;
///
/// assert_eq!(sign(-3.5), -1.0);
/// assert_eq!(sign(-0.0), 0.0);
/// assert_eq!(sign(12.0), 1.0);
/// assert!(sign(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x.is_nan() {
        x
    } else {
        0.0
    }
}

/// Picks `then` when `condition` holds, `otherwise` when it does not.
///
/// Both branches are evaluated before the choice is made.
#[must_use]
pub const fn choose(condition: bool, then: f64, otherwise: f64) -> f64 {
    if condition { then } else { otherwise }
}
