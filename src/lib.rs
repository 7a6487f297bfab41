//! Mamdani-style fuzzy inference: linguistic variables over sampled
//! universes, a small rule DSL combined with min/max, clipping implication,
//! pointwise-max aggregation, and centroid defuzzification.
//!
//! The model (variables and rules) is built once, validated when the
//! [`Engine`] is assembled, and frozen from then on; [`Engine::compute`] is
//! a pure function of the supplied [`Inputs`].
//!
//! ```
//! use fuzzy_control::{Engine, Inputs, Membership, Rules, Terms, Variables};
//!
//! let mut vars = Variables::new();
//! let mut temp_terms = Terms::new();
//!
//! temp_terms.insert("cold", Membership::triangular(16., 16., 24.));
//! temp_terms.insert("hot", Membership::triangular(26., 36., 36.));
//!
//! let temperature = vars.add("temperature", 16. ..=36., temp_terms, Some(1.))?;
//! let mut fan_terms = Terms::new();
//!
//! fan_terms.insert("low", Membership::triangular(0., 0., 50.));
//! fan_terms.insert("high", Membership::triangular(50., 100., 100.));
//!
//! let fan = vars.add("fan_speed", 0. ..=100., fan_terms, Some(1.))?;
//! let mut rules = Rules::new();
//!
//! rules.add(temperature.is("cold"), fan.is("low"));
//! rules.add(temperature.is("hot"), fan.is("high"));
//!
//! let engine = Engine::new(vars, rules)?;
//! let mut inputs = Inputs::new();
//!
//! inputs.add(temperature, 33.);
//!
//! let speed = engine.compute(&inputs).unwrap().get(fan).unwrap();
//!
//! assert!(speed > 66.);
//! # Ok::<(), fuzzy_control::ConfigurationError>(())
//! ```

mod dsl;
mod error;
mod inference;
mod inputs;
mod membership;
pub mod ops;
mod outputs;
mod rules;
mod terms;
mod variable;

pub use dsl::Expr;
pub use error::{ConfigurationError, EvalError};
pub use inference::Engine;
pub use inputs::Inputs;
pub use membership::Membership;
pub use outputs::Outputs;
pub use rules::Rules;
pub use terms::Terms;
pub use variable::{LinguisticVariable, Variable, VariableKey, Variables};
