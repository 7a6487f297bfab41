use std::ops::RangeInclusive;

use slotmap::{new_key_type, SlotMap};

use crate::error::ConfigurationError;
use crate::membership::Membership;
use crate::terms::Terms;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// Copyable handle to a variable registered in a [`Variables`] registry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Variable(pub(crate) VariableKey);

/// Registry of linguistic variables. Built once during setup; the engine
/// takes ownership and freezes it before any evaluation.
#[derive(Debug, Default)]
pub struct Variables(pub(crate) SlotMap<VariableKey, LinguisticVariable>);

impl Variables {
    pub fn new() -> Self {
        Self(SlotMap::with_key())
    }

    /// Registers a variable over `universe_range` with the given terms.
    /// If the step value is not provided, it defaults to 0.1.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        universe_range: RangeInclusive<f64>,
        terms: Terms,
        step: Option<f64>,
    ) -> Result<Variable, ConfigurationError> {
        let name = name.into();

        if self.lookup(&name).is_some() {
            return Err(ConfigurationError::DuplicateVariable(name));
        }

        let var = LinguisticVariable::new(name, universe_range, terms, step.unwrap_or(0.1))?;

        Ok(Variable(self.0.insert(var)))
    }

    pub fn get(&self, var: Variable) -> Option<&LinguisticVariable> {
        self.0.get(var.0)
    }

    pub fn lookup(&self, name: &str) -> Option<Variable> {
        self.0
            .iter()
            .find(|(_, var)| var.name == name)
            .map(|(key, _)| Variable(key))
    }

    pub(crate) fn by_key(&self, key: VariableKey) -> Option<&LinguisticVariable> {
        self.0.get(key)
    }
}

/// A named scalar domain with a family of membership functions.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    min_u: f64,
    max_u: f64,
    step: f64,
    universe: Vec<f64>,
    terms: Vec<(String, Membership)>,
}

impl LinguisticVariable {
    fn new(
        name: String,
        universe_range: RangeInclusive<f64>,
        terms: Terms,
        step: f64,
    ) -> Result<Self, ConfigurationError> {
        let min_u = *universe_range.start();
        let max_u = *universe_range.end();

        if !(min_u.is_finite() && max_u.is_finite() && min_u < max_u) {
            return Err(ConfigurationError::InvalidDomain { variable: name });
        }
        if !(step.is_finite() && step > 0.) {
            return Err(ConfigurationError::InvalidStep { variable: name });
        }

        for (i, (term, shape)) in terms.0.iter().enumerate() {
            if terms.0[..i].iter().any(|(seen, _)| seen == term) {
                return Err(ConfigurationError::DuplicateTerm {
                    variable: name,
                    term: term.clone(),
                });
            }
            if let Err(reason) = shape.validate() {
                return Err(ConfigurationError::InvalidMembership {
                    variable: name,
                    term: term.clone(),
                    reason,
                });
            }
        }

        // floor matches the way the reference discretizes a domain into
        // `int((max - min) / step) + 1` points
        let num = ((max_u - min_u) / step).floor() as usize + 1;

        Ok(Self {
            name,
            min_u,
            max_u,
            step,
            universe: linspace(min_u, max_u, num),
            terms: terms.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        self.min_u..=self.max_u
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// The sampled domain used for aggregation and defuzzification.
    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    pub fn term(&self, name: &str) -> Option<&Membership> {
        self.terms
            .iter()
            .find(|(term, _)| term == name)
            .map(|(_, shape)| shape)
    }

    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(term, _)| term.as_str())
    }

    /// Evaluates every term at `x`, in term insertion order. Values outside
    /// the domain are not rejected; they simply produce all-zero degrees.
    pub fn fuzzify(&self, x: f64) -> Vec<(&str, f64)> {
        self.terms
            .iter()
            .map(|(term, shape)| (term.as_str(), shape.evaluate(x)))
            .collect()
    }

    /// `(x, degree)` samples of one term over the universe, for plotting
    /// and other read-only consumers.
    pub fn sample_term(&self, name: &str) -> Option<Vec<(f64, f64)>> {
        let shape = self.term(name)?;

        Some(self.universe.iter().map(|&x| (x, shape.evaluate(x))).collect())
    }
}

/// Evenly spaced samples over `[min, max]`, endpoints included.
fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![min];
    }

    let step = (max - min) / (n - 1) as f64;

    (0..n).map(|i| min + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn temperature_terms() -> Terms {
        let mut terms = Terms::new();

        terms.insert("cold", Membership::triangular(16., 16., 24.));
        terms.insert("comfortable", Membership::triangular(20., 25., 30.));
        terms.insert("hot", Membership::triangular(26., 36., 36.));

        terms
    }

    #[test]
    fn rejects_duplicate_variable_names() {
        let mut vars = Variables::new();

        vars.add("temperature", 16. ..=36., temperature_terms(), None)
            .unwrap();

        assert_eq!(
            vars.add("temperature", 16. ..=36., temperature_terms(), None),
            Err(ConfigurationError::DuplicateVariable("temperature".into())),
        );
    }

    #[test]
    fn rejects_duplicate_term_names() {
        let mut terms = Terms::new();

        terms.insert("cold", Membership::triangular(16., 16., 24.));
        terms.insert("cold", Membership::triangular(20., 25., 30.));

        let mut vars = Variables::new();

        assert_eq!(
            vars.add("temperature", 16. ..=36., terms, None),
            Err(ConfigurationError::DuplicateTerm {
                variable: "temperature".into(),
                term: "cold".into(),
            }),
        );
    }

    #[test]
    fn rejects_malformed_shapes() {
        let mut terms = Terms::new();

        terms.insert("broken", Membership::triangular(30., 20., 10.));

        let mut vars = Variables::new();

        assert!(matches!(
            vars.add("temperature", 16. ..=36., terms, None),
            Err(ConfigurationError::InvalidMembership { .. }),
        ));
    }

    #[test]
    fn rejects_bad_domain_and_step() {
        let mut vars = Variables::new();

        assert!(matches!(
            vars.add("t", 36. ..=16., temperature_terms(), None),
            Err(ConfigurationError::InvalidDomain { .. }),
        ));
        assert!(matches!(
            vars.add("t", 16. ..=36., temperature_terms(), Some(0.)),
            Err(ConfigurationError::InvalidStep { .. }),
        ));
        assert!(matches!(
            vars.add("t", 16. ..=36., temperature_terms(), Some(-1.)),
            Err(ConfigurationError::InvalidStep { .. }),
        ));
    }

    #[test]
    fn fuzzify_reports_every_term_in_order() {
        let mut vars = Variables::new();
        let temp = vars
            .add("temperature", 16. ..=36., temperature_terms(), Some(1.))
            .unwrap();
        let degrees = vars.get(temp).unwrap().fuzzify(30.);

        assert_eq!(degrees.len(), 3);
        assert_eq!(degrees[0].0, "cold");
        assert_eq!(degrees[0].1, 0.);
        assert_eq!(degrees[1].0, "comfortable");
        assert_eq!(degrees[1].1, 0.);
        assert_eq!(degrees[2].0, "hot");
        assert_relative_eq!(degrees[2].1, 0.4);
    }

    #[test]
    fn fuzzify_outside_domain_is_all_zero() {
        let mut vars = Variables::new();
        let temp = vars
            .add("temperature", 16. ..=36., temperature_terms(), Some(1.))
            .unwrap();

        for (_, degree) in vars.get(temp).unwrap().fuzzify(50.) {
            assert_eq!(degree, 0.);
        }
    }

    #[test]
    fn universe_spans_the_domain() {
        let mut vars = Variables::new();
        let temp = vars
            .add("temperature", 16. ..=36., temperature_terms(), Some(1.))
            .unwrap();
        let universe = vars.get(temp).unwrap().universe();

        assert_eq!(universe.len(), 21);
        assert_eq!(universe[0], 16.);
        assert_relative_eq!(*universe.last().unwrap(), 36.);
    }

    #[test]
    fn sample_term_covers_endpoints() {
        let mut vars = Variables::new();
        let temp = vars
            .add("temperature", 16. ..=36., temperature_terms(), Some(1.))
            .unwrap();
        let samples = vars.get(temp).unwrap().sample_term("cold").unwrap();

        assert_eq!(samples.len(), 21);
        assert_eq!(samples[0], (16., 1.));
        assert_relative_eq!(samples[8].1, 0.);
        assert_eq!(samples.last().unwrap().1, 0.);
        assert!(vars.get(temp).unwrap().sample_term("missing").is_none());
    }

    #[test]
    fn lookup_finds_variables_by_name() {
        let mut vars = Variables::new();
        let temp = vars
            .add("temperature", 16. ..=36., temperature_terms(), None)
            .unwrap();

        assert_eq!(vars.lookup("temperature"), Some(temp));
        assert_eq!(vars.lookup("pressure"), None);
    }
}
