use tracing::warn;

use crate::config::Precision;
use crate::error::{FuzzyError, Result};
use crate::membership::{Element, MembershipFunction};
use crate::relation::FuzzyRelation;

/// A named fuzzy set: a label plus its membership function.
#[derive(Clone, Debug)]
pub struct FuzzySet<K = f64> {
    name: String,
    membership: MembershipFunction<K>,
}

impl<K: Element> FuzzySet<K> {
    pub fn new(name: impl Into<String>, membership: MembershipFunction<K>) -> Self {
        Self {
            name: name.into(),
            membership,
        }
    }

    pub fn discrete(name: impl Into<String>, degrees: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self::new(name, MembershipFunction::discrete(degrees))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn membership(&self) -> &MembershipFunction<K> {
        &self.membership
    }

    pub fn mu(&self, x: &K) -> f64 {
        self.membership.mu(x)
    }

    pub fn elements(&self) -> impl Iterator<Item = &K> + '_ {
        self.membership.elements()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.membership.values()
    }

    pub fn complement(&self) -> Self {
        Self {
            name: format!("not {}", self.name),
            membership: self.membership.complement(),
        }
    }

    /// Fuzzy modus ponens: `B' = A' ∘ (A → B)`.
    ///
    /// This set is the fact `A'` and must be discrete over exactly the relation's
    /// row labels, in order. Each derived degree is `max_i min(μ(i), R[i][j])`,
    /// rounded with `precision`.
    pub fn apply_modus_ponens<C: Element>(
        &self,
        relation: &FuzzyRelation<K, C>,
        precision: Precision,
    ) -> Result<FuzzySet<C>> {
        if !self.membership.is_discrete() || !relation.rows().iter().eq(self.elements()) {
            warn!(
                fact = %self.name,
                relation = %relation.name(),
                "cannot apply modus ponens: fact elements do not match relation rows"
            );

            return Err(FuzzyError::incompatible(
                "apply_modus_ponens",
                relation.rows(),
                self.elements().collect::<Vec<_>>(),
            ));
        }

        let fact: Vec<f64> = self.values().collect();
        let derived = relation.columns().iter().enumerate().map(|(j, column)| {
            let degree = fact
                .iter()
                .enumerate()
                .map(|(i, &mu)| f64::min(mu, relation.matrix().get(i, j).unwrap_or(0.)))
                .fold(0., f64::max);

            (column.clone(), precision.apply(degree))
        });

        Ok(FuzzySet::discrete(format!("inferred from {}", self.name), derived))
    }
}
