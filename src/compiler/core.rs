use std::collections::HashSet;

use tracing::debug;

use crate::{
    ast::{Function, Node},
    compiler::{
        lexer::tokenize,
        parser::core::{ParseContext, parse_tokens},
        registry::{functions::FunctionTable, operators::OperatorTable},
        variables::VariableStore,
    },
    error::CompileResult,
    util::num::NumericConvention,
};

/// Compiles an expression once and evaluates it on demand.
///
/// The compiler owns the expression text, the numeric convention, the
/// operator and function tables and the variable store. The first call to
/// [`EquationCompiler::calculate`] tokenizes and parses the text; the
/// resulting tree is cached and reused by later calls until the text is
/// replaced with [`EquationCompiler::set_expression`].
///
/// Variables are bound by cell, so assigning a variable never requires a
/// recompilation. The store outlives expression changes: values assigned
/// before `set_expression` are still there afterwards.
///
/// The compiler is single-threaded. Use one instance per thread when the
/// same formula is evaluated concurrently with different bindings.
///
/// # Example
/// ```
/// use equate::EquationCompiler;
///
/// let mut compiler = EquationCompiler::with_expression("a + b");
/// compiler.set_variable("a", 3.0);
/// compiler.set_variable("b", 4.0);
/// assert_eq!(compiler.calculate().unwrap(), 7.0);
///
/// compiler.set_expression("a");
/// assert_eq!(compiler.calculate().unwrap(), 3.0);
/// ```
#[derive(Debug)]
pub struct EquationCompiler {
    expression: String,
    convention: NumericConvention,
    operators:  OperatorTable,
    functions:  FunctionTable,
    variables:  VariableStore,
    tree:       Option<Node>,
}

#[allow(clippy::new_without_default)]
impl EquationCompiler {
    /// Creates a compiler with no expression, the invariant numeric
    /// convention and the built-in functions.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a compiler for `expression` with the invariant numeric
    /// convention and the built-in functions.
    #[must_use]
    pub fn with_expression(expression: impl Into<String>) -> Self {
        Self::builder().expression(expression).build()
    }

    /// Starts configuring a compiler.
    ///
    /// # Example
    /// ```
    /// use equate::{EquationCompiler, util::num::NumericConvention};
    ///
    /// let mut compiler = EquationCompiler::builder().expression("1,5 * 2")
    ///                                               .convention(NumericConvention::comma_decimal())
    ///                                               .build();
    /// assert_eq!(compiler.calculate().unwrap(), 3.0);
    /// ```
    #[must_use]
    pub fn builder() -> EquationCompilerBuilder {
        EquationCompilerBuilder::new()
    }

    /// Replaces the expression text and drops the cached tree. Variable cells
    /// and their values are kept.
    pub fn set_expression(&mut self, expression: impl Into<String>) {
        self.expression = expression.into();
        self.tree = None;
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub const fn convention(&self) -> &NumericConvention {
        &self.convention
    }

    /// Assigns `value` to the variable `name`, creating it if needed.
    ///
    /// A cached tree sees the new value on its next evaluation.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.set(name, value);
    }

    /// Current value of the variable `name`, if it exists.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name)
    }

    /// Registers `function` under `name`.
    ///
    /// A name that is already registered, built-in or not, is replaced. The
    /// cached tree keeps the callable it was compiled with; the replacement
    /// takes effect on the next compilation.
    ///
    /// # Example
    /// ```
    /// use equate::{EquationCompiler, ast::Function};
    ///
    /// let factorial = Function::unary(|n| (1..=n as u64).map(|k| k as f64).product());
    ///
    /// let mut compiler = EquationCompiler::with_expression("factorial(5)");
    /// compiler.add_function("factorial", factorial);
    /// assert_eq!(compiler.calculate().unwrap(), 120.0);
    /// ```
    pub fn add_function(&mut self, name: impl Into<String>, function: Function) {
        self.functions.register(name, function);
    }

    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    /// Compiles the current expression now, replacing any cached tree.
    ///
    /// On failure no tree is cached.
    ///
    /// # Errors
    /// Any [`CompileError`](crate::error::CompileError) raised while
    /// tokenizing or parsing.
    pub fn compile(&mut self) -> CompileResult<()> {
        self.tree = None;
        let tree = self.build_tree()?;
        self.tree = Some(tree);
        Ok(())
    }

    /// Evaluates the expression, compiling it first if no tree is cached.
    ///
    /// # Errors
    /// Any [`CompileError`](crate::error::CompileError) raised by the
    /// compilation. Evaluation itself cannot fail; numeric edge cases yield
    /// infinities or NaN.
    pub fn calculate(&mut self) -> CompileResult<f64> {
        let tree = match self.tree.take() {
            Some(tree) => tree,
            None => self.build_tree()?,
        };

        let value = tree.eval();
        self.tree = Some(tree);
        Ok(value)
    }

    #[must_use]
    pub const fn is_compiled(&self) -> bool {
        self.tree.is_some()
    }

    /// The cached tree, if the expression has been compiled.
    #[must_use]
    pub const fn tree(&self) -> Option<&Node> {
        self.tree.as_ref()
    }

    /// Names of every variable known to this compiler.
    ///
    /// This includes variables referenced by any expression compiled so far
    /// and variables assigned with [`EquationCompiler::set_variable`].
    #[must_use]
    pub fn variable_names(&self) -> HashSet<&str> {
        self.variables.names()
    }

    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    fn build_tree(&mut self) -> CompileResult<Node> {
        debug!(expression = %self.expression, "compiling expression");

        let tokens = tokenize(&self.expression, &self.convention)?;
        let mut context = ParseContext { convention: &self.convention,
                                         operators:  &self.operators,
                                         functions:  &self.functions,
                                         variables:  &mut self.variables, };
        let tree = parse_tokens(&tokens, &mut context)?;

        debug!(tree = %tree, variables = self.variables.len(), "compiled expression");
        Ok(tree)
    }
}

/// Configures an [`EquationCompiler`].
///
/// Defaults: no expression, the invariant numeric convention, built-in
/// functions installed.
#[derive(Debug, Clone)]
pub struct EquationCompilerBuilder {
    expression:         String,
    convention:         NumericConvention,
    standard_functions: bool,
}

impl EquationCompilerBuilder {
    fn new() -> Self {
        Self { expression:         String::new(),
               convention:         NumericConvention::invariant(),
               standard_functions: true, }
    }

    #[must_use]
    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }

    #[must_use]
    pub fn convention(mut self, convention: NumericConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Whether the built-in functions are installed. When `false` the
    /// compiler only knows functions added with
    /// [`EquationCompiler::add_function`].
    #[must_use]
    pub fn standard_functions(mut self, enabled: bool) -> Self {
        self.standard_functions = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> EquationCompiler {
        let functions = if self.standard_functions {
            FunctionTable::standard()
        } else {
            FunctionTable::empty()
        };

        EquationCompiler { expression: self.expression,
                           convention: self.convention,
                           operators: OperatorTable::standard(),
                           functions,
                           variables: VariableStore::new(),
                           tree: None }
    }
}
