use crate::dsl::Expr;

/// An ordered list of fuzzy rules, immutable once handed to the engine.
#[derive(Debug, Default)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    /// Adds a rule with full weight. The consequence must be a single term
    /// or a conjunction of terms; the engine rejects anything else when it
    /// is assembled.
    pub fn add(&mut self, premise: Expr, consequence: Expr) {
        self.add_weighted(premise, consequence, 1.);
    }

    /// Adds a rule whose firing strength is scaled by `weight`. The engine
    /// requires `weight` in (0, 1].
    pub fn add_weighted(&mut self, premise: Expr, consequence: Expr, weight: f64) {
        self.0.push(Rule {
            premise,
            consequence,
            weight,
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug)]
pub(crate) struct Rule {
    pub(crate) premise: Expr,
    pub(crate) consequence: Expr,
    pub(crate) weight: f64,
}
