use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::variable::Degrees;

/// Fuzzified inputs: variable name → term name → degree.
pub type Fuzzified = IndexMap<String, Degrees>;

/// Strongest activation per rule conclusion. Absent conclusions have activation 0.
pub type Activations = IndexMap<Conclusion, f64>;

/// How a condition joins the ones before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Connective {
    #[default]
    And,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Condition {
    pub variable: String,
    pub term: String,
    pub connective: Connective,
}

/// The `(variable, term)` a rule concludes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Conclusion {
    pub variable: String,
    pub term: String,
}

impl Conclusion {
    pub fn new(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            term: term.into(),
        }
    }
}

/// `IF cond AND cond ... THEN variable == term`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rule {
    pub(crate) name: Option<String>,
    pub(crate) conditions: Vec<Condition>,
    pub(crate) conclusion: Option<Conclusion>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn add_condition(&mut self, variable: impl Into<String>, term: impl Into<String>, connective: Connective) {
        self.conditions.push(Condition {
            variable: variable.into(),
            term: term.into(),
            connective,
        });
    }

    pub fn set_conclusion(&mut self, variable: impl Into<String>, term: impl Into<String>) {
        self.conclusion = Some(Conclusion::new(variable, term));
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn conclusion(&self) -> Option<&Conclusion> {
        self.conclusion.as_ref()
    }

    /// Activation strength: the minimum degree over all conditions.
    ///
    /// A rule without conditions never fires, and a condition whose variable or
    /// term is missing from `fuzzified` contributes 0.
    pub fn evaluate(&self, fuzzified: &Fuzzified) -> f64 {
        if self.conditions.is_empty() {
            return 0.;
        }

        self.conditions.iter().fold(1., |activation, condition| {
            let degree = fuzzified
                .get(&condition.variable)
                .and_then(|degrees| degrees.get(&condition.term))
                .copied()
                .unwrap_or(0.);

            match condition.connective {
                Connective::And => f64::min(activation, degree),
            }
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IF ")?;

        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                match condition.connective {
                    Connective::And => f.write_str(" AND ")?,
                }
            }

            write!(f, "{} == {}", condition.variable, condition.term)?;
        }

        match &self.conclusion {
            Some(conclusion) => write!(f, " THEN {} == {}", conclusion.variable, conclusion.term),
            None => f.write_str(" THEN <no conclusion>"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RuleBase(pub(crate) Vec<Rule>);

impl RuleBase {
    pub fn new() -> Self {
        RuleBase(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RuleBase(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, rule: Rule) {
        self.0.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Evaluates every rule and keeps, per conclusion, the strongest activation.
    pub fn evaluate_all(&self, fuzzified: &Fuzzified) -> Activations {
        let mut activations = Activations::new();

        for (i, rule) in self.0.iter().enumerate() {
            let activation = rule.evaluate(fuzzified);

            trace!(rule = i + 1, activation, "evaluated rule");

            let Some(conclusion) = &rule.conclusion else {
                continue;
            };

            if activation <= 0. {
                continue;
            }

            activations
                .entry(conclusion.clone())
                .and_modify(|existing| *existing = f64::max(*existing, activation))
                .or_insert(activation);
        }

        activations
    }
}

impl FromIterator<Rule> for RuleBase {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        RuleBase(iter.into_iter().collect())
    }
}

impl fmt::Display for RuleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule base ({} rules):", self.0.len())?;

        for (i, rule) in self.0.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, rule)?;
        }

        Ok(())
    }
}
