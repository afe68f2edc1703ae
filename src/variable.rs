use std::fmt;

use indexmap::IndexMap;
use slotmap::new_key_type;

use crate::error::{FuzzyError, Lookup, Result};
use crate::linspace::Linspace;
use crate::membership::MembershipFunction;
use crate::set::FuzzySet;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// Degrees of membership per term name.
pub type Degrees = IndexMap<String, f64>;

/// A linguistic variable: a bounded numeric domain, its discretization and
/// a set of named terms.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    domain_min: f64,
    domain_max: f64,
    num_points: usize,
    terms: IndexMap<String, FuzzySet>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, domain_min: f64, domain_max: f64, num_points: usize) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| FuzzyError::InvalidDomain {
            name: name.clone(),
            reason: reason.to_owned(),
        };

        if !domain_min.is_finite() || !domain_max.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if domain_min > domain_max {
            return Err(invalid("domain_min is greater than domain_max"));
        }
        if num_points == 0 {
            return Err(invalid("at least one point is required"));
        }

        Ok(Self {
            name,
            domain_min,
            domain_max,
            num_points,
            terms: IndexMap::new(),
        })
    }

    /// Adds a term named after the set, replacing any term of the same name.
    pub fn add_term(&mut self, term: FuzzySet) {
        self.terms.insert(term.name().to_owned(), term);
    }

    pub fn with_term(mut self, name: impl Into<String>, membership: MembershipFunction) -> Self {
        self.add_term(FuzzySet::new(name, membership));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain_min(&self) -> f64 {
        self.domain_min
    }

    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn term(&self, name: &str) -> Result<&FuzzySet> {
        self.terms
            .get(name)
            .ok_or_else(|| FuzzyError::not_found(Lookup::Term, name, format!("linguistic variable '{}'", self.name)))
    }

    pub fn terms(&self) -> impl Iterator<Item = &FuzzySet> {
        self.terms.values()
    }

    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// `num_points` evenly spaced samples over the domain, both ends included.
    pub fn universe(&self) -> Linspace {
        Linspace::new(self.domain_min, self.domain_max, self.num_points)
    }

    /// Membership of the crisp value `x` in every term.
    pub fn fuzzify(&self, x: f64) -> Degrees {
        self.terms
            .iter()
            .map(|(name, term)| (name.clone(), term.mu(&x)))
            .collect()
    }

    /// Samples a term's membership over [`universe`](Self::universe).
    pub fn membership_vector(&self, term: &str) -> Result<Vec<f64>> {
        let term = self.term(term)?;

        Ok(self.universe().map(|x| term.mu(&x)).collect())
    }

    /// Terms whose membership at `x` exceeds `threshold`, strongest first.
    pub fn interpret(&self, x: f64, threshold: f64) -> Vec<(&str, f64)> {
        let mut matches: Vec<_> = self
            .terms
            .iter()
            .map(|(name, term)| (name.as_str(), term.mu(&x)))
            .filter(|(_, degree)| *degree > threshold)
            .collect();

        matches.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        matches
    }
}

impl fmt::Display for LinguisticVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{:.2}, {:.2}]", self.name, self.domain_min, self.domain_max)?;

        if !self.terms.is_empty() {
            let names: Vec<_> = self.term_names().collect();

            write!(f, "\n    terms: {}", names.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::membership::{trapezoidal, triangular};

    fn wear() -> LinguisticVariable {
        LinguisticVariable::new("Wear", 0., 1., 101)
            .unwrap()
            .with_term("Factory New", triangular(0., 0.01, 0.07))
            .with_term("Minimal Wear", trapezoidal(0.06, 0.08, 0.10, 0.15))
            .with_term("Field-Tested", trapezoidal(0.12, 0.15, 0.30, 0.38))
    }

    #[test]
    fn test_invalid_domains() {
        assert!(matches!(
            LinguisticVariable::new("Age", 10., 0., 100),
            Err(FuzzyError::InvalidDomain { .. })
        ));
        assert!(LinguisticVariable::new("Age", 0., f64::INFINITY, 100).is_err());
        assert!(LinguisticVariable::new("Age", 0., 10., 0).is_err());
        assert!(LinguisticVariable::new("Age", 3., 3., 1).is_ok());
    }

    #[test]
    fn test_universe() {
        let var = wear();
        let universe: Vec<_> = var.universe().collect();

        assert_eq!(universe.len(), 101);
        assert_eq!(universe[0], 0.);
        assert_eq!(universe[100], 1.);
        assert_relative_eq!(universe[50], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_fuzzify() {
        let var = wear();
        let degrees = var.fuzzify(0.01);

        assert_eq!(degrees["Factory New"], 1.);
        assert_eq!(degrees["Minimal Wear"], 0.);
        assert_eq!(degrees["Field-Tested"], 0.);
        assert_eq!(degrees.keys().collect::<Vec<_>>(), ["Factory New", "Minimal Wear", "Field-Tested"]);

        // raw membership may be queried outside the domain
        assert_eq!(var.fuzzify(-3.)["Factory New"], 0.);
    }

    #[test]
    fn test_membership_vector() {
        let var = wear();
        let samples = var.membership_vector("Field-Tested").unwrap();

        assert_eq!(samples.len(), 101);
        assert!(samples.iter().all(|mu| (0. ..=1.).contains(mu)));
        assert_eq!(samples[20], 1.);
        assert_eq!(samples[90], 0.);

        let err = var.membership_vector("Battle-Scarred").unwrap_err();

        assert_eq!(
            err,
            FuzzyError::not_found(Lookup::Term, "Battle-Scarred", "linguistic variable 'Wear'")
        );
    }

    #[test]
    fn test_replacing_a_term() {
        let mut var = wear();

        var.add_term(FuzzySet::new("Factory New", triangular(0., 0.02, 0.07)));

        assert_eq!(var.term_names().count(), 3);
        assert_relative_eq!(var.fuzzify(0.01)["Factory New"], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_interpret() {
        let var = wear();
        let interpretation = var.interpret(0.065, 0.01);

        assert_eq!(interpretation.len(), 2);
        assert_eq!(interpretation[0].0, "Minimal Wear");
        assert_relative_eq!(interpretation[0].1, 0.25, epsilon = 1e-9);
        assert_eq!(interpretation[1].0, "Factory New");
        assert!(var.interpret(0.9, 0.01).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            wear().to_string(),
            "Wear: [0.00, 1.00]\n    terms: Factory New, Minimal Wear, Field-Tested"
        );
    }
}
