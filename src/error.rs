use thiserror::Error;

/// Model-build failure. The engine is not usable until the model is fixed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("variable `{0}` is already defined")]
    DuplicateVariable(String),
    #[error("term `{term}` is already defined on variable `{variable}`")]
    DuplicateTerm { variable: String, term: String },
    #[error("variable `{variable}` has an empty or non-finite domain")]
    InvalidDomain { variable: String },
    #[error("variable `{variable}` has a non-positive step")]
    InvalidStep { variable: String },
    #[error("term `{term}` on variable `{variable}` has invalid parameters: {reason}")]
    InvalidMembership {
        variable: String,
        term: String,
        reason: &'static str,
    },
    #[error("rule {rule} references a variable that is not registered")]
    UnknownVariable { rule: usize },
    #[error("rule {rule} references unknown term `{term}` on variable `{variable}`")]
    UnknownTerm {
        rule: usize,
        variable: String,
        term: String,
    },
    #[error("rule {rule} has weight {weight} outside (0, 1]")]
    InvalidWeight { rule: usize, weight: f64 },
    #[error("rule {rule} has an invalid consequence: {reason}")]
    InvalidConsequence { rule: usize, reason: &'static str },
}

/// Evaluation failure. No partial result is returned.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    /// A rule premise references an input variable with no bound value.
    #[error("no input value bound for variable `{0}`")]
    UnboundVariable(String),
    /// Every clipped consequent for this output variable is zero, so the
    /// centroid is undefined. The caller decides the fallback policy.
    #[error("no rule produced any activation for output variable `{0}`")]
    NoActiveRules(String),
}
