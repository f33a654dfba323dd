#![allow(clippy::float_cmp)]

use crate::ast::Operator;

/// Defines the operator table by generating a static list of operator
/// definitions and a name list.
///
/// The macro produces:
/// - `OPERATOR_TABLE` (static table for lookup),
/// - `OPERATOR_SYMBOLS` (public list of operator symbols).
macro_rules! operator_table {
    (
        $(
            $symbol:literal => $apply:expr
        ),* $(,)?
    ) => {
        static OPERATOR_TABLE: &[Operator] = &[
            $(
                Operator { symbol: $symbol, apply: $apply },
            )*
        ];
        pub const OPERATOR_SYMBOLS: &[&str] = &[
            $($symbol,)*
        ];
    };
}

operator_table! {
    "+"  => |x, y| x + y,
    "-"  => |x, y| x - y,
    "*"  => |x, y| x * y,
    "/"  => |x, y| x / y,
    "%"  => |x, y| x % y,
    "^"  => f64::powf,
    "<"  => |x, y| truth(x < y),
    "<=" => |x, y| truth(x <= y),
    ">"  => |x, y| truth(x > y),
    ">=" => |x, y| truth(x >= y),
    "==" => |x, y| truth(x == y),
    "!=" => |x, y| truth(x != y),
    "<>" => |x, y| truth(x != y),
    "&&" => |x, y| truth(x != 0.0 && y != 0.0),
    "||" => |x, y| truth(x != 0.0 || y != 0.0),
}

/// Converts a comparison outcome into `1.0` or `0.0`.
const fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// The binary operators known to a compiler.
///
/// The table is a read-only view over a static list, so every compiler shares
/// the same operator definitions without any process-wide mutable state.
///
/// # Example
/// ```
/// use equate::compiler::registry::operators::OperatorTable;
///
/// let operators = OperatorTable::standard();
/// let le = operators.resolve("<=").unwrap();
/// assert_eq!((le.apply)(2.0, 2.0), 1.0);
/// assert!(operators.resolve("=").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OperatorTable {
    operators: &'static [Operator],
}

impl OperatorTable {
    /// Returns the full built-in operator set.
    #[must_use]
    pub const fn standard() -> Self {
        Self { operators: OPERATOR_TABLE }
    }

    /// Looks up the operator spelled `symbol`.
    #[must_use]
    pub fn resolve(&self, symbol: &str) -> Option<Operator> {
        self.operators.iter().find(|op| op.symbol == symbol).copied()
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.resolve(symbol).is_some()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        self.operators.iter().map(|op| op.symbol)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}
