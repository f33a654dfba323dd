/// Numeric convention and literal parsing.
///
/// This module describes how numeric literals are written (which character is
/// the decimal separator and which groups digits) and converts literal text
/// into `f64` under such a convention. The convention is always supplied by
/// the caller; no locale data is looked up here.
///
/// # Responsibilities
/// - Validate separator pairs so they cannot collide with the grammar.
/// - Reject ambiguous literals (double decimal separators, stray grouping).
pub mod num;
