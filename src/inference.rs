use std::fmt;

use indexmap::IndexMap;
use slotmap::SlotMap;
use tracing::{debug, warn};

use crate::config::InferenceOptions;
use crate::error::{FuzzyError, Lookup, Result};
use crate::inputs::Inputs;
use crate::linspace::Linspace;
use crate::outputs::Outputs;
use crate::rules::{Fuzzified, Rule, RuleBase};
use crate::variable::{LinguisticVariable, VariableKey};

/// A Mamdani fuzzy control system: input and output linguistic variables plus
/// a rule base.
///
/// The system is assembled once and then queried through `&self`; inference
/// never mutates variables or rules, so a built system can be shared freely.
#[derive(Clone, Debug, Default)]
pub struct ControlSystem {
    variables: SlotMap<VariableKey, LinguisticVariable>,
    inputs: IndexMap<String, VariableKey>,
    outputs: IndexMap<String, VariableKey>,
    rule_base: RuleBase,
}

impl ControlSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an input variable, replacing one of the same name.
    pub fn add_input_variable(&mut self, var: LinguisticVariable) -> VariableKey {
        Self::insert(&mut self.variables, &mut self.inputs, var)
    }

    /// Registers an output variable, replacing one of the same name.
    pub fn add_output_variable(&mut self, var: LinguisticVariable) -> VariableKey {
        Self::insert(&mut self.variables, &mut self.outputs, var)
    }

    fn insert(
        variables: &mut SlotMap<VariableKey, LinguisticVariable>,
        index: &mut IndexMap<String, VariableKey>,
        var: LinguisticVariable,
    ) -> VariableKey {
        if let Some(&key) = index.get(var.name()) {
            variables[key] = var;
            return key;
        }

        let name = var.name().to_owned();
        let key = variables.insert(var);

        index.insert(name, key);
        key
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rule_base.add(rule);
    }

    pub fn rule_base(&self) -> &RuleBase {
        &self.rule_base
    }

    pub fn variable(&self, key: VariableKey) -> Option<&LinguisticVariable> {
        self.variables.get(key)
    }

    pub fn input_variable(&self, name: &str) -> Result<&LinguisticVariable> {
        self.inputs
            .get(name)
            .and_then(|&key| self.variables.get(key))
            .ok_or_else(|| FuzzyError::not_found(Lookup::InputVariable, name, "control system"))
    }

    pub fn output_variable(&self, name: &str) -> Result<&LinguisticVariable> {
        self.outputs
            .get(name)
            .and_then(|&key| self.variables.get(key))
            .ok_or_else(|| FuzzyError::not_found(Lookup::OutputVariable, name, "control system"))
    }

    pub fn input_variables(&self) -> impl Iterator<Item = &LinguisticVariable> {
        self.inputs.values().filter_map(|&key| self.variables.get(key))
    }

    pub fn output_variables(&self) -> impl Iterator<Item = &LinguisticVariable> {
        self.outputs.values().filter_map(|&key| self.variables.get(key))
    }

    /// Fuzzifies every input that names a registered input variable. Unknown
    /// names are ignored.
    pub fn fuzzify(&self, inputs: &Inputs) -> Fuzzified {
        inputs
            .iter()
            .filter_map(|(name, value)| {
                let var = self.input_variable(name).ok()?;

                Some((name.to_owned(), var.fuzzify(value)))
            })
            .collect()
    }

    /// Mamdani inference with centroid defuzzification over `num_points`
    /// samples of the output domain.
    pub fn infer(&self, inputs: &Inputs, output_var: &str, num_points: usize) -> Result<Outputs> {
        self.infer_with(
            inputs,
            output_var,
            &InferenceOptions::default().with_num_points(num_points),
        )
    }

    pub fn infer_with(&self, inputs: &Inputs, output_var: &str, options: &InferenceOptions) -> Result<Outputs> {
        let output = self.output_variable(output_var)?;

        // Fuzzificate inputs
        let fuzzified = self.fuzzify(inputs);

        debug!(
            inputs = inputs.len(),
            fuzzified = fuzzified.len(),
            "fuzzificated inputs"
        );

        // Evaluate rules
        let activations = self.rule_base.evaluate_all(&fuzzified);

        debug!(?activations, "evaluated rule base");

        // Clip each concluded term at its activation and accumulate with max
        let universe: Vec<f64> =
            Linspace::new(output.domain_min(), output.domain_max(), options.num_points).collect();
        let mut aggregated = vec![0.; universe.len()];

        for (conclusion, &activation) in &activations {
            if conclusion.variable != output_var || activation <= 0. {
                continue;
            }

            let term = output.term(&conclusion.term)?;

            for (agg, x) in aggregated.iter_mut().zip(&universe) {
                let clipped = f64::min(term.mu(x), activation);

                *agg = f64::max(*agg, clipped);
            }
        }

        // Defuzzificate
        let defuzzed = if aggregated.iter().sum::<f64>() == 0. {
            None
        } else {
            options.defuzzification.call(&universe, &aggregated)
        };
        let fallback = defuzzed.is_none();
        let crisp = defuzzed.unwrap_or_else(|| {
            let midpoint = (output.domain_min() + output.domain_max()) / 2.;

            warn!(output = output_var, midpoint, "no rule fired for output, using domain midpoint");

            midpoint
        });

        debug!(output = output_var, crisp, "inferred");

        Ok(Outputs::new(crisp, universe, aggregated, activations, fallback))
    }
}

impl fmt::Display for ControlSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Input variables:")?;

        for var in self.input_variables() {
            write!(f, "\n  {var}")?;
        }

        f.write_str("\nOutput variables:")?;

        for var in self.output_variables() {
            write!(f, "\n  {var}")?;
        }

        write!(f, "\n{}", self.rule_base)
    }
}


#[test]
fn test_bank_loan() {
    use crate::dsl::is;
    use crate::membership::MembershipFunction;
    use crate::rules::Conclusion;

    let score = LinguisticVariable::new("score", 150., 200., 501)
        .unwrap()
        .with_term("high", MembershipFunction::piecewise([(175., 0.), (180., 0.2), (185., 0.7), (190., 1.)]))
        .with_term(
            "low",
            MembershipFunction::piecewise([(155., 1.), (160., 0.8), (165., 0.5), (170., 0.2), (175., 0.)]),
        );
    let ratio = LinguisticVariable::new("ratio", 0.1, 1., 91)
        .unwrap()
        .with_term("good", MembershipFunction::piecewise([(0.3, 1.), (0.4, 0.7), (0.41, 0.3), (0.42, 0.)]))
        .with_term("bad", MembershipFunction::piecewise([(0.44, 0.), (0.45, 0.3), (0.5, 0.7), (0.7, 1.)]));
    let credit = LinguisticVariable::new("credit", 0., 10., 101)
        .unwrap()
        .with_term("good", MembershipFunction::piecewise([(2., 1.), (3., 0.7), (4., 0.3), (5., 0.)]))
        .with_term("bad", MembershipFunction::piecewise([(5., 0.), (6., 0.3), (7., 0.7), (8., 1.)]));
    let decision = LinguisticVariable::new("decision", 0., 10., 101)
        .unwrap()
        .with_term("approve", MembershipFunction::piecewise([(5., 0.), (6., 0.3), (7., 0.7), (8., 1.)]))
        .with_term("reject", MembershipFunction::piecewise([(2., 1.), (3., 0.7), (4., 0.3), (5., 0.)]));

    let mut system = ControlSystem::new();

    system.add_input_variable(score);
    system.add_input_variable(ratio);
    system.add_input_variable(credit);
    system.add_output_variable(decision);

    system.add_rule(
        is("score", "high")
            .and("ratio", "good")
            .and("credit", "good")
            .then("decision", "approve"),
    );
    system.add_rule(is("score", "low").and("ratio", "bad").then("decision", "reject"));
    system.add_rule(is("credit", "bad").then("decision", "reject"));

    let inputs = Inputs::new().with("score", 190.).with("ratio", 0.39).with("credit", 1.5);
    let outputs = system.infer(&inputs, "decision", 101).unwrap();

    assert!((outputs.activations()[&Conclusion::new("decision", "approve")] - 0.73).abs() < 1e-9);
    assert!((outputs.crisp() - 8.036173913043474).abs() < 1e-9);

    let inputs = Inputs::new().with("score", 160.).with("ratio", 0.6).with("credit", 7.5);
    let outputs = system.infer(&inputs, "decision", 101).unwrap();

    assert!((outputs.activations()[&Conclusion::new("decision", "reject")] - 0.85).abs() < 1e-9);
    assert!((outputs.crisp() - 1.8982839313572542).abs() < 1e-9);
}
