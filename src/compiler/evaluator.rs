use crate::ast::Node;

/// Largest arity among the supported function shapes.
const MAX_ARITY: usize = 3;

impl Node {
    /// Evaluates the tree to a number.
    ///
    /// Evaluation never fails: division by zero, logarithms of negative
    /// numbers and similar cases yield IEEE infinities or NaN, which flow
    /// through the rest of the tree. Variables read their cells at the time
    /// of the call.
    ///
    /// # Example
    /// ```
    /// use equate::ast::Node;
    ///
    /// let tree = Node::Negate { operand: Box::new(Node::Constant { value: 2.5 }) };
    /// assert_eq!(tree.eval(), -2.5);
    /// ```
    #[must_use]
    pub fn eval(&self) -> f64 {
        match self {
            Self::Constant { value } => *value,
            Self::Variable { cell, .. } => cell.get(),
            Self::Negate { operand } => -operand.eval(),
            Self::BinaryOp { operator,
                             left,
                             right, } => (operator.apply)(left.eval(), right.eval()),
            Self::FunctionCall { function,
                                 arguments,
                                 .. } => {
                let mut values = [0.0; MAX_ARITY];
                for (slot, argument) in values.iter_mut().zip(arguments) {
                    *slot = argument.eval();
                }
                function.call(&values[..arguments.len()])
            },
        }
    }
}
