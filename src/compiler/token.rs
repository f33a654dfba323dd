use std::fmt;

/// Characters that form delimiter tokens on their own, independent of the
/// numeric convention.
pub const DELIMITERS: &str = "+-*/^%()<>=&|!,;";

/// Two-character operators formed by merging adjacent delimiters.
pub const COMPOUND_OPERATORS: &[&str] = &["&&", "||", "<=", ">=", "!=", "<>", "=="];

/// Category of a character or token.
///
/// `Whitespace` and `Undefined` only ever result from classifying input;
/// the lexer drops whitespace and rejects undefined characters, so neither
/// appears in a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Digits and numeric separators.
    Number,
    /// Identifier characters.
    Letter,
    /// Operators, grouping symbols and separators.
    Delimiter,
    /// Blanks between tokens.
    Whitespace,
    /// Anything else.
    Undefined,
}

/// A classified fragment of expression text.
///
/// Two tokens are equal when their text matches; category and position do
/// not take part in the comparison.
#[derive(Debug, Clone)]
pub struct Token {
    /// The token's text.
    pub text:     String,
    /// Its category.
    pub category: TokenCategory,
    /// Byte offset of the first character in the expression text.
    pub position: usize,
}

impl Token {
    #[must_use]
    pub fn new(text: impl Into<String>, category: TokenCategory, position: usize) -> Self {
        Self { text: text.into(),
               category,
               position }
    }

    /// Returns `true` if this is a delimiter token with exactly `symbol` as
    /// its text.
    #[must_use]
    pub fn is_delimiter(&self, symbol: &str) -> bool {
        self.category == TokenCategory::Delimiter && self.text == symbol
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Token {}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
