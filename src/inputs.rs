use std::collections::HashMap;

use crate::variable::{Variable, VariableKey};

/// Crisp input values for one `compute` call, keyed by variable handle.
/// Supplied fresh per call and never persisted by the engine.
// TODO: accept pre-fuzzified (non-crisp) facts as an input kind
#[derive(Debug, Default)]
pub struct Inputs(pub(crate) HashMap<VariableKey, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    pub fn add(&mut self, var: Variable, value: f64) {
        self.0.insert(var.0, value);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (VariableKey, f64)> + '_ {
        self.0.iter().map(|(&key, &value)| (key, value))
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}
