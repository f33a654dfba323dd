/// Compilation errors.
///
/// Defines every failure that can surface while turning expression text into
/// an evaluation tree: unrecognized characters, unbalanced parentheses,
/// malformed numeric literals, unknown functions or operators, and argument
/// count mismatches. Evaluation itself never fails; floating-point edge cases
/// propagate as infinities and NaNs.
pub mod compile_error;
/// Numeric convention errors.
///
/// Raised when a caller tries to build a numeric convention whose separators
/// would be ambiguous with the expression grammar.
pub mod convention_error;

pub use compile_error::{CompileError, CompileResult, ErrorKind};
pub use convention_error::ConventionError;
