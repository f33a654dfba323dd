use thiserror::Error;

/// Errors raised when constructing a [`NumericConvention`].
///
/// [`NumericConvention`]: crate::util::num::NumericConvention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConventionError {
    /// The decimal and group separators are the same character.
    #[error("Decimal and group separators must differ, both are '{0}'.")]
    IdenticalSeparators(char),
    /// The separator is a digit, letter, whitespace or grammar character.
    #[error("'{0}' cannot be used as a numeric separator.")]
    ReservedSeparator(char),
}
