use crate::error::ConventionError;

/// Characters that carry meaning in the expression grammar and therefore can
/// never act as numeric separators. `,` is deliberately absent.
const RESERVED_CHARACTERS: &str = "+-*/^%()<>=&|!;";

/// The pair of separators used to read numeric literals.
///
/// The decimal separator splits the integral and fractional parts; the group
/// separator may appear between digits of the integral part and is ignored
/// when the value is read.
///
/// # Example
/// ```
/// use equate::util::num::NumericConvention;
///
/// let invariant = NumericConvention::invariant();
/// assert_eq!(invariant.decimal_separator(), '.');
/// assert_eq!(invariant.group_separator(), ',');
///
/// let german = NumericConvention::new(',', '.').unwrap();
/// assert_eq!(german, NumericConvention::comma_decimal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericConvention {
    decimal_separator: char,
    group_separator:   char,
}

impl NumericConvention {
    /// Creates a convention from a decimal and a group separator.
    ///
    /// # Errors
    /// - `IdenticalSeparators` if both characters are the same.
    /// - `ReservedSeparator` if either character is an ASCII digit or letter,
    ///   `_`, whitespace, or one of `+-*/^%()<>=&|!;`.
    pub fn new(decimal_separator: char, group_separator: char) -> Result<Self, ConventionError> {
        for separator in [decimal_separator, group_separator] {
            if is_reserved(separator) {
                return Err(ConventionError::ReservedSeparator(separator));
            }
        }
        if decimal_separator == group_separator {
            return Err(ConventionError::IdenticalSeparators(decimal_separator));
        }
        Ok(Self { decimal_separator,
                  group_separator })
    }

    /// `.` for decimals, `,` for grouping.
    #[must_use]
    pub const fn invariant() -> Self {
        Self { decimal_separator: '.',
               group_separator:   ',', }
    }

    /// `,` for decimals, `.` for grouping, as used across most of
    /// continental Europe.
    #[must_use]
    pub const fn comma_decimal() -> Self {
        Self { decimal_separator: ',',
               group_separator:   '.', }
    }

    /// `.` for decimals, `'` for grouping, as used in Switzerland.
    #[must_use]
    pub const fn apostrophe_grouping() -> Self {
        Self { decimal_separator: '.',
               group_separator:   '\'', }
    }

    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    #[must_use]
    pub const fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Returns `true` if `c` is either separator of this convention.
    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        c == self.decimal_separator || c == self.group_separator
    }
}

impl Default for NumericConvention {
    fn default() -> Self {
        Self::invariant()
    }
}

fn is_reserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() || RESERVED_CHARACTERS.contains(c)
}

/// Reads a numeric literal written under `convention`.
///
/// A literal is a run of ASCII digits with at most one decimal separator.
/// Group separators are accepted only between two digits of the integral
/// part. Sign characters are never part of a literal; they belong to the
/// grammar.
///
/// # Returns
/// - `Some(f64)`: The value of the literal.
/// - `None`: If the literal is malformed under the convention.
///
/// # Example
/// ```
/// use equate::util::num::{NumericConvention, parse_number};
///
/// let invariant = NumericConvention::invariant();
/// assert_eq!(parse_number("4,200.5", &invariant), Some(4200.5));
/// assert_eq!(parse_number("4,,2", &invariant), None);
/// assert_eq!(parse_number("1.2.3", &invariant), None);
///
/// let comma = NumericConvention::comma_decimal();
/// assert_eq!(parse_number("4,2", &comma), Some(4.2));
/// ```
#[must_use]
pub fn parse_number(literal: &str, convention: &NumericConvention) -> Option<f64> {
    let chars = literal.chars().collect::<Vec<_>>();
    let mut normalized = String::with_capacity(literal.len());
    let mut seen_decimal = false;
    let mut seen_digit = false;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_digit() {
            seen_digit = true;
            normalized.push(c);
        } else if c == convention.decimal_separator {
            if seen_decimal {
                return None;
            }
            seen_decimal = true;
            normalized.push('.');
        } else if c == convention.group_separator {
            let between_digits = i > 0
                                 && chars[i - 1].is_ascii_digit()
                                 && chars.get(i + 1).is_some_and(char::is_ascii_digit);
            if seen_decimal || !between_digits {
                return None;
            }
        } else {
            return None;
        }
    }

    if !seen_digit {
        return None;
    }

    normalized.parse().ok()
}
