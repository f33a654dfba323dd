/// Parser entry points and shared state.
///
/// Contains the parse context threaded through every rule, the result alias,
/// and the top-level routine that requires the whole token sequence to be
/// consumed.
pub mod core;

/// Binary operator levels.
///
/// Implements the relational/logical, additive, multiplicative, modulo and
/// power levels of the grammar.
pub mod binary;

/// Sign and atom parsing.
///
/// Handles unary signs, numeric literals, variables, parenthesized groups and
/// function calls.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides argument list parsing shared by function calls.
pub mod utils;
