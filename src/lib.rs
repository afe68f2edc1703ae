//! Mamdani fuzzy inference.
//!
//! Crisp inputs are fuzzified against the terms of [`LinguisticVariable`]s,
//! a [`RuleBase`] of conjunctive rules is evaluated, and every concluded output
//! term is clipped at its activation and max-accumulated over the output
//! universe before being defuzzificated into one crisp value.
//!
//! ```
//! use fuzzy_control::{dsl::is, triangular, trapezoidal, ControlSystem, Inputs, LinguisticVariable};
//!
//! # fn main() -> fuzzy_control::Result<()> {
//! let mut system = ControlSystem::new();
//!
//! system.add_input_variable(
//!     LinguisticVariable::new("Wear", 0., 1., 1000)?
//!         .with_term("Factory New", triangular(0., 0.01, 0.07))
//!         .with_term("Field-Tested", trapezoidal(0.12, 0.15, 0.30, 0.38)),
//! );
//! system.add_output_variable(
//!     LinguisticVariable::new("Investment", 0., 1., 1000)?
//!         .with_term("Low", trapezoidal(0.2, 0.4, 0.5, 0.6))
//!         .with_term("Very High", triangular(0.85, 0.95, 1.)),
//! );
//! system.add_rule(is("Wear", "Factory New").then("Investment", "Very High"));
//! system.add_rule(is("Wear", "Field-Tested").then("Investment", "Low"));
//!
//! let outputs = system.infer(&Inputs::from([("Wear", 0.01)]), "Investment", 1000)?;
//!
//! assert!(outputs.crisp() > 0.9);
//! # Ok(())
//! # }
//! ```
//!
//! A separate relational path works on discrete [`FuzzySet`]s: build a
//! [`FuzzyRelation`], compose relations with max-min composition and derive
//! conclusions with [`FuzzySet::apply_modus_ponens`].

pub mod config;
pub mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod membership;
mod ops;
mod outputs;
mod relation;
mod rules;
mod set;
mod variable;

pub use config::{InferenceOptions, Precision};
pub use error::{FuzzyError, Lookup, Result};
pub use inference::ControlSystem;
pub use inputs::Inputs;
pub use linspace::Linspace;
pub use math::Matrix;
pub use membership::{trapezoidal, triangular, Element, MembershipFunction};
pub use ops::DefuzzificationOp;
pub use outputs::Outputs;
pub use relation::FuzzyRelation;
pub use rules::{Activations, Conclusion, Condition, Connective, Fuzzified, Rule, RuleBase};
pub use set::FuzzySet;
pub use variable::{Degrees, LinguisticVariable, VariableKey};
