use thiserror::Error;

/// Result type used by every compilation stage.
pub type CompileResult<T> = Result<T, CompileError>;

/// Represents all errors that can occur while tokenizing or parsing an
/// expression.
///
/// Positions are byte offsets into the expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// No expression text was set, or the text holds no tokens.
    #[error("Invalid equation: the expression is empty.")]
    EmptyExpression,
    /// A character belongs to none of the recognized categories.
    #[error("Invalid equation: unexpected character '{character}' at offset {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  usize,
    },
    /// The token stream ended where an operand was required.
    #[error("Invalid equation: unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A token appeared where the grammar does not allow it.
    #[error("Invalid equation: unexpected token '{token}' at offset {position}.")]
    UnexpectedToken {
        /// Text of the token.
        token:    String,
        /// Where it was found.
        position: usize,
    },
    /// An excess `)` or a missing `)`.
    #[error("Unmatched parentheses at offset {position}.")]
    UnmatchedParentheses {
        /// Offset of the excess `)`, or the end of the text for a missing one.
        position: usize,
    },
    /// A call names a function that is not registered.
    #[error("Function '{name}' not found (offset {position}).")]
    UnknownFunction {
        /// The function name.
        name:     String,
        /// Where the call starts.
        position: usize,
    },
    /// A delimiter reached operator resolution without a registered meaning.
    #[error("Invalid operator '{symbol}' at offset {position}.")]
    UnknownOperator {
        /// The operator symbol.
        symbol:   String,
        /// Where it was found.
        position: usize,
    },
    /// A call supplied a different number of arguments than registered.
    #[error("Function '{name}' expects {expected} argument(s) but {found} were supplied.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// Registered arity.
        expected: usize,
        /// Number of arguments at the call site.
        found:    usize,
    },
    /// An argument slot between separators is empty.
    #[error("Function '{name}' is missing an argument at offset {position}.")]
    MissingArgument {
        /// The function name.
        name:     String,
        /// Where the argument was expected.
        position: usize,
    },
    /// A numeric literal does not fit the active numeric convention.
    #[error("Invalid number format '{literal}' at offset {position}.")]
    NumericFormat {
        /// The literal text.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
}

/// Coarse classification of a [`CompileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token stream.
    InvalidEquation,
    /// Grouping-symbol imbalance.
    UnmatchedParentheses,
    /// Unknown function name.
    InvalidFunction,
    /// Unresolvable operator.
    InvalidOperator,
    /// Wrong or missing arguments in a call.
    ArgumentCount,
    /// Malformed numeric literal.
    NumericFormat,
}

impl CompileError {
    /// Returns the kind of failure this error represents.
    ///
    /// # Example
    /// ```
    /// use equate::error::{CompileError, ErrorKind};
    ///
    /// let err = CompileError::MissingArgument { name:     "min".to_string(),
    ///                                           position: 4, };
    /// assert_eq!(err.kind(), ErrorKind::ArgumentCount);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyExpression
            | Self::InvalidCharacter { .. }
            | Self::UnexpectedEndOfInput
            | Self::UnexpectedToken { .. } => ErrorKind::InvalidEquation,
            Self::UnmatchedParentheses { .. } => ErrorKind::UnmatchedParentheses,
            Self::UnknownFunction { .. } => ErrorKind::InvalidFunction,
            Self::UnknownOperator { .. } => ErrorKind::InvalidOperator,
            Self::ArgumentCountMismatch { .. } | Self::MissingArgument { .. } => {
                ErrorKind::ArgumentCount
            },
            Self::NumericFormat { .. } => ErrorKind::NumericFormat,
        }
    }
}
