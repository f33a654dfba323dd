/// Operator symbol table.
///
/// Maps every binary operator symbol of the grammar to its numeric function.
/// The set is fixed.
pub mod operators;

/// Function name table.
///
/// Maps function names to arity-tagged callables. Built-ins are installed at
/// construction and callers may add or replace entries.
pub mod functions;

/// Built-in functions.
///
/// Declares the standard unary, binary and conditional functions and
/// installs them into a function table.
pub mod builtin;
