use std::{fmt, rc::Rc};

use crate::compiler::variables::VariableCell;

/// A binary operator resolved from the operator registry.
///
/// The symbol is kept for display; the function pointer is what evaluation
/// calls.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    /// Surface symbol, e.g. `"<="`.
    pub symbol: &'static str,
    /// Numeric implementation.
    pub apply:  fn(f64, f64) -> f64,
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

/// An arity-tagged callable.
///
/// The variant fixes both the number of arguments and how the first one is
/// interpreted: `Conditional` receives its first argument as a truth value
/// (nonzero is `true`), every other shape receives plain numbers.
///
/// # Example
/// ```
/// use equate::ast::Function;
///
/// let hypot = Function::binary(f64::hypot);
/// assert_eq!(hypot.arity(), 2);
/// assert_eq!(hypot.call(&[3.0, 4.0]), 5.0);
///
/// let pick = Function::conditional(|c, a, b| if c { a } else { b });
/// assert_eq!(pick.call(&[0.0, 1.0, 2.0]), 2.0);
/// ```
#[derive(Clone)]
pub enum Function {
    /// `f64 -> f64`
    Unary(Rc<dyn Fn(f64) -> f64>),
    /// `(f64, f64) -> f64`
    Binary(Rc<dyn Fn(f64, f64) -> f64>),
    /// `(f64, f64, f64) -> f64`
    Ternary(Rc<dyn Fn(f64, f64, f64) -> f64>),
    /// `(bool, f64, f64) -> f64`
    Conditional(Rc<dyn Fn(bool, f64, f64) -> f64>),
}

impl Function {
    pub fn unary(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Unary(Rc::new(f))
    }

    pub fn binary(f: impl Fn(f64, f64) -> f64 + 'static) -> Self {
        Self::Binary(Rc::new(f))
    }

    pub fn ternary(f: impl Fn(f64, f64, f64) -> f64 + 'static) -> Self {
        Self::Ternary(Rc::new(f))
    }

    pub fn conditional(f: impl Fn(bool, f64, f64) -> f64 + 'static) -> Self {
        Self::Conditional(Rc::new(f))
    }

    /// Number of arguments a call site must supply.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
            Self::Ternary(_) | Self::Conditional(_) => 3,
        }
    }

    /// Invokes the callable with already-evaluated arguments.
    ///
    /// The slice length must equal [`Function::arity`]; the parser enforces
    /// this before a call node is ever built.
    #[must_use]
    pub fn call(&self, args: &[f64]) -> f64 {
        match (self, args) {
            (Self::Unary(f), &[x]) => f(x),
            (Self::Binary(f), &[x, y]) => f(x, y),
            (Self::Ternary(f), &[x, y, z]) => f(x, y, z),
            (Self::Conditional(f), &[condition, then, otherwise]) => {
                f(condition != 0.0, then, otherwise)
            },
            _ => unreachable!("argument count is validated when the call is parsed"),
        }
    }

    const fn shape(&self) -> &'static str {
        match self {
            Self::Unary(_) => "f64 -> f64",
            Self::Binary(_) => "(f64, f64) -> f64",
            Self::Ternary(_) => "(f64, f64, f64) -> f64",
            Self::Conditional(_) => "(bool, f64, f64) -> f64",
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.shape())
    }
}

/// A node of a compiled expression tree.
///
/// Every node is immutable once built. The only state that changes between
/// evaluations is reached through [`Node::Variable`] cells, which are shared
/// with the variable store.
#[derive(Debug, Clone)]
pub enum Node {
    /// A numeric literal, read once at compile time.
    Constant {
        /// The literal's value.
        value: f64,
    },
    /// A reference to a variable cell.
    Variable {
        /// Name of the variable.
        name: String,
        /// Cell shared with the variable store.
        cell: VariableCell,
    },
    /// Unary minus.
    Negate {
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operator application.
    BinaryOp {
        /// The resolved operator.
        operator: Operator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A function application.
    FunctionCall {
        /// Name the function was called by.
        name:      String,
        /// The resolved callable.
        function:  Function,
        /// Arguments, in call order.
        arguments: Vec<Self>,
    },
}

impl fmt::Display for Node {
    /// Writes the tree with every operator application parenthesized, which
    /// makes grouping and associativity visible.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant { value } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Negate { operand } => write!(f, "-{operand}"),
            Self::BinaryOp { operator,
                             left,
                             right, } => write!(f, "({left} {} {right})", operator.symbol),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}
