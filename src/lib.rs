//! # equate
//!
//! equate compiles arithmetic and boolean formulas such as
//! `if(a > b; sin(a); c ^ 2)` into reusable evaluation trees bound to named
//! variables. A formula is tokenized and parsed once; afterwards it can be
//! evaluated any number of times as its variables change.
//!
//! Numeric literals are read under a caller-supplied
//! [`NumericConvention`](util::num::NumericConvention), so `4,2` can mean
//! four point two or forty-two. Function arguments are separated by `;`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

/// Defines the structure of compiled expressions.
///
/// This module declares the `Node` tree produced by the parser together with
/// the resolved `Operator` and arity-tagged `Function` values it holds.
///
/// # Responsibilities
/// - Represents constants, variables, negation, binary operators and calls.
/// - Prints trees in a fully parenthesized form for inspection.
pub mod ast;
/// Compilation pipeline and its public driver.
///
/// Turns expression text into tokens, tokens into a tree, and exposes
/// [`EquationCompiler`] as the entry point for hosts.
///
/// # Responsibilities
/// - Tokenizes text under a numeric convention.
/// - Parses with operator precedence against the registries.
/// - Caches compiled trees and binds variables to shared cells.
pub mod compiler;
/// Provides unified error types for compilation.
///
/// Every failure the crate can report while reading a formula is a
/// `CompileError`; invalid separator choices are a `ConventionError`.
pub mod error;
/// Numeric helpers.
///
/// Holds the numeric convention and the literal reader used by the parser.
pub mod util;

pub use crate::{
    ast::Function,
    compiler::core::{EquationCompiler, EquationCompilerBuilder},
    error::{CompileError, CompileResult, ConventionError, ErrorKind},
    util::num::NumericConvention,
};

/// Compiles and evaluates `expression` once.
///
/// Uses the invariant numeric convention and the built-in functions. Any
/// variable in the expression evaluates to `0`.
///
/// # Errors
/// Returns the [`CompileError`] raised while compiling the expression.
///
/// # Examples
/// ```
/// use equate::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("3 + 4 / 2").unwrap(), 5.0);
/// assert_eq!(evaluate("if(2 > 1; max(3; 8); 0)").unwrap(), 8.0);
///
/// let err = evaluate("abs(1; 2)").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ArgumentCount);
/// ```
pub fn evaluate(expression: &str) -> CompileResult<f64> {
    EquationCompiler::with_expression(expression).calculate()
}
