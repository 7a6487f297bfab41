use std::collections::HashMap;

use tracing::{debug, trace};

use crate::dsl::Expr;
use crate::error::{ConfigurationError, EvalError};
use crate::inputs::Inputs;
use crate::ops;
use crate::outputs::Outputs;
use crate::rules::Rules;
use crate::variable::{Variable, VariableKey, Variables};

/// A Mamdani inference engine over a frozen set of variables and rules.
///
/// Assembly validates every term reference, so evaluation never resolves
/// names dynamically. `compute` is a pure function of its inputs and the
/// immutable model; concurrent calls need no locking.
#[derive(Debug)]
pub struct Engine {
    vars: Variables,
    rules: Vec<CompiledRule>,
    outputs: Vec<VariableKey>,
}

#[derive(Debug)]
struct CompiledRule {
    premise: Expr,
    consequents: Vec<(VariableKey, String)>,
    weight: f64,
}

impl Engine {
    /// Assembles an engine, taking ownership of the model. Fails on
    /// dangling term references, malformed consequences, or weights
    /// outside (0, 1].
    pub fn new(vars: Variables, rules: Rules) -> Result<Self, ConfigurationError> {
        let mut compiled = Vec::with_capacity(rules.len());
        let mut outputs = Vec::new();

        for (i, rule) in rules.0.into_iter().enumerate() {
            for (key, term) in rule.premise.term_refs() {
                check_reference(&vars, key, term, i)?;
            }

            if !(rule.weight.is_finite() && rule.weight > 0. && rule.weight <= 1.) {
                return Err(ConfigurationError::InvalidWeight {
                    rule: i,
                    weight: rule.weight,
                });
            }

            let consequents = flatten_consequence(rule.consequence, i)?;

            for (key, term) in &consequents {
                check_reference(&vars, *key, term, i)?;

                if !outputs.contains(key) {
                    outputs.push(*key);
                }
            }

            compiled.push(CompiledRule {
                premise: rule.premise,
                consequents,
                weight: rule.weight,
            });
        }

        Ok(Self {
            vars,
            rules: compiled,
            outputs,
        })
    }

    /// Read-only access to the variable registry.
    pub fn variables(&self) -> &Variables {
        &self.vars
    }

    pub fn variable(&self, name: &str) -> Option<Variable> {
        self.vars.lookup(name)
    }

    /// Runs one inference pass: fuzzification, rule evaluation, clipping,
    /// max-aggregation per output variable, and centroid defuzzification.
    pub fn compute(&self, inputs: &Inputs) -> Result<Outputs, EvalError> {
        // Snapshot of fuzzified inputs; rule premises are evaluated against
        // this, never against the raw inputs.
        let mut fuzzified = HashMap::with_capacity(inputs.len());

        for (key, value) in inputs.iter() {
            if let Some(var) = self.vars.by_key(key) {
                trace!(variable = var.name(), value, "fuzzified input");
                fuzzified.insert(key, var.fuzzify(value));
            }
        }

        let mut strengths = Vec::with_capacity(self.rules.len());

        for (i, rule) in self.rules.iter().enumerate() {
            let premise = self.strength(&rule.premise, &fuzzified)?;
            let strength = (premise * rule.weight).clamp(0., 1.);

            trace!(rule = i, strength, "rule premise evaluated");
            strengths.push(strength);
        }

        let mut crisp = HashMap::with_capacity(self.outputs.len());
        let mut aggregated = HashMap::with_capacity(self.outputs.len());

        for &out in &self.outputs {
            let var = self
                .vars
                .by_key(out)
                .expect("output variables are validated at construction");
            let mut envelope = vec![0.; var.universe().len()];

            for (rule, &strength) in self.rules.iter().zip(&strengths) {
                if strength <= 0. {
                    continue;
                }

                for (target, term) in &rule.consequents {
                    if *target != out {
                        continue;
                    }

                    let shape = var
                        .term(term)
                        .expect("consequent terms are validated at construction");

                    for (point, &x) in envelope.iter_mut().zip(var.universe()) {
                        *point = ops::or(*point, ops::clip(shape.evaluate(x), strength));
                    }
                }
            }

            let samples: Vec<(f64, f64)> = var
                .universe()
                .iter()
                .copied()
                .zip(envelope.iter().copied())
                .collect();
            let value = ops::centroid(samples.iter().copied())
                .ok_or_else(|| EvalError::NoActiveRules(var.name().to_owned()))?;

            debug!(variable = var.name(), value, "defuzzified output");
            crisp.insert(out, value);
            aggregated.insert(out, samples);
        }

        Ok(Outputs::new(crisp, aggregated))
    }

    fn strength(
        &self,
        expr: &Expr,
        fuzzified: &HashMap<VariableKey, Vec<(&str, f64)>>,
    ) -> Result<f64, EvalError> {
        match expr {
            Expr::Term(key, term) => {
                let degrees = fuzzified.get(key).ok_or_else(|| {
                    let name = self
                        .vars
                        .by_key(*key)
                        .expect("premise variables are validated at construction")
                        .name();

                    EvalError::UnboundVariable(name.to_owned())
                })?;
                let degree = degrees
                    .iter()
                    .find(|(name, _)| *name == term.as_str())
                    .map(|(_, degree)| *degree)
                    .expect("premise terms are validated at construction");

                Ok(degree)
            },
            Expr::And(lhs, rhs) => Ok(ops::and(
                self.strength(lhs, fuzzified)?,
                self.strength(rhs, fuzzified)?,
            )),
            Expr::Or(lhs, rhs) => Ok(ops::or(
                self.strength(lhs, fuzzified)?,
                self.strength(rhs, fuzzified)?,
            )),
            Expr::Not(inner) => Ok(ops::complement(self.strength(inner, fuzzified)?)),
        }
    }
}

fn check_reference(
    vars: &Variables,
    key: VariableKey,
    term: &str,
    rule: usize,
) -> Result<(), ConfigurationError> {
    let var = vars
        .by_key(key)
        .ok_or(ConfigurationError::UnknownVariable { rule })?;

    if var.term(term).is_none() {
        return Err(ConfigurationError::UnknownTerm {
            rule,
            variable: var.name().to_owned(),
            term: term.to_owned(),
        });
    }

    Ok(())
}

fn flatten_consequence(expr: Expr, rule: usize) -> Result<Vec<(VariableKey, String)>, ConfigurationError> {
    match expr {
        Expr::Term(key, term) => Ok(vec![(key, term)]),
        Expr::And(lhs, rhs) => {
            let mut refs = flatten_consequence(*lhs, rule)?;

            refs.extend(flatten_consequence(*rhs, rule)?);

            Ok(refs)
        },
        Expr::Or(..) | Expr::Not(..) => Err(ConfigurationError::InvalidConsequence {
            rule,
            reason: "consequences must be a term or a conjunction of terms",
        }),
    }
}
