use std::collections::HashMap;

use tracing::debug;

use crate::{ast::Function, compiler::registry::builtin};

/// Registered functions keyed by name.
///
/// Names are case-sensitive. Registering a name that is already present
/// replaces the previous callable, whether it was built in or added by the
/// caller.
///
/// # Example
/// ```
/// use equate::{ast::Function, compiler::registry::functions::FunctionTable};
///
/// let mut functions = FunctionTable::standard();
/// assert!(functions.contains("sqrt"));
///
/// let previous = functions.register("sqrt", Function::unary(f64::cbrt));
/// assert!(previous.is_some());
/// assert_eq!(functions.get("sqrt").unwrap().call(&[27.0]), 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, Function>,
}

impl FunctionTable {
    /// A table with no functions at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table holding every built-in function.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::empty();
        builtin::install(&mut table);
        table
    }

    /// Adds `function` under `name`, returning the callable it replaced.
    pub fn register(&mut self, name: impl Into<String>, function: Function) -> Option<Function> {
        let name = name.into();
        let previous = self.functions.insert(name.clone(), function);

        if let Some(previous) = &previous {
            debug!(%name, ?previous, "replaced registered function");
        }

        previous
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
