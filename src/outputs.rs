use std::collections::HashMap;

use crate::variable::{Variable, VariableKey};

/// Crisp results of one `compute` call, plus the aggregated fuzzy set each
/// value was defuzzified from.
#[derive(Debug)]
pub struct Outputs {
    crisp: HashMap<VariableKey, f64>,
    aggregated: HashMap<VariableKey, Vec<(f64, f64)>>,
}

impl Outputs {
    pub(crate) fn new(
        crisp: HashMap<VariableKey, f64>,
        aggregated: HashMap<VariableKey, Vec<(f64, f64)>>,
    ) -> Self {
        Self { crisp, aggregated }
    }

    /// The defuzzified value for an output variable, if any rule wrote to it.
    pub fn get(&self, var: Variable) -> Option<f64> {
        self.crisp.get(&var.0).copied()
    }

    /// `(x, degree)` samples of the aggregated set the value came from.
    /// A read-only view for plotting; never needed to compute the value.
    pub fn aggregated(&self, var: Variable) -> Option<&[(f64, f64)]> {
        self.aggregated.get(&var.0).map(Vec::as_slice)
    }
}
