use crate::rules::{Connective, Rule};

/// Starts a rule premise: `is("Wear", "Factory New").and("Price", "High").then("Investment", "High")`.
pub fn is(variable: impl Into<String>, term: impl Into<String>) -> Premise {
    Premise(Rule::new()).and(variable, term)
}

/// A rule under construction, before its conclusion is known.
#[derive(Clone, Debug)]
pub struct Premise(Rule);

impl Premise {
    pub fn and(mut self, variable: impl Into<String>, term: impl Into<String>) -> Self {
        self.0.add_condition(variable, term, Connective::And);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    pub fn then(mut self, variable: impl Into<String>, term: impl Into<String>) -> Rule {
        self.0.set_conclusion(variable, term);
        self.0
    }

    /// A rule without a conclusion. It evaluates but never contributes output.
    pub fn into_rule(self) -> Rule {
        self.0
    }
}

#[test]
fn test_builds_conjunction() {
    let rule = is("Wear", "Factory New")
        .and("Liquidity", "Very High")
        .named("blue chip")
        .then("Investment", "Very High");

    assert_eq!(rule.name(), Some("blue chip"));
    assert_eq!(rule.conditions().len(), 2);
    assert_eq!(rule.conditions()[1].variable, "Liquidity");
    assert_eq!(rule.conditions()[1].connective, Connective::And);
    assert_eq!(rule.conclusion().map(|c| c.term.as_str()), Some("Very High"));
    assert!(is("Wear", "Factory New").into_rule().conclusion().is_none());
}
