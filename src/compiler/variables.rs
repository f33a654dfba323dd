use std::{
    cell::Cell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

/// Storage behind one variable, shared by the store and every tree node that
/// references the variable.
pub type VariableCell = Rc<Cell<f64>>;

/// Name-keyed table of variable cells.
///
/// A cell is created with the value `0.0` the first time its name is
/// referenced, either by the parser or by [`VariableStore::set`], and lives
/// as long as the store. Replacing the expression text never removes cells,
/// so values assigned earlier carry over to the next expression.
///
/// # Example
/// ```
/// use equate::compiler::variables::VariableStore;
///
/// let mut store = VariableStore::new();
/// let cell = store.get_or_create("rate");
/// assert_eq!(cell.get(), 0.0);
///
/// store.set("rate", 0.25);
/// assert_eq!(cell.get(), 0.25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    cells: HashMap<String, VariableCell>,
}

impl VariableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell for `name`, creating a zero-valued one if absent.
    pub fn get_or_create(&mut self, name: &str) -> VariableCell {
        if let Some(cell) = self.cells.get(name) {
            return Rc::clone(cell);
        }

        let cell = VariableCell::default();
        self.cells.insert(name.to_string(), Rc::clone(&cell));
        cell
    }

    /// Assigns `value` to `name`. Any compiled tree holding the cell observes
    /// the new value on its next evaluation.
    pub fn set(&mut self, name: &str, value: f64) {
        self.get_or_create(name).set(value);
    }

    /// Current value of `name`, or `None` if it was never referenced.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.cells.get(name).map(|cell| cell.get())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    /// The distinct set of known variable names.
    ///
    /// The set borrows from the store; changing it does not affect the store.
    #[must_use]
    pub fn names(&self) -> HashSet<&str> {
        self.cells.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
