use indexmap::IndexMap;

/// Crisp input values keyed by variable name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inputs(pub(crate) IndexMap<String, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(IndexMap::new())
    }

    pub fn add(&mut self, variable: impl Into<String>, value: f64) {
        self.0.insert(variable.into(), value);
    }

    pub fn with(mut self, variable: impl Into<String>, value: f64) -> Self {
        self.add(variable, value);
        self
    }

    pub fn get(&self, variable: &str) -> Option<f64> {
        self.0.get(variable).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Inputs(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for Inputs {
    fn from(values: [(S, f64); N]) -> Self {
        values.into_iter().collect()
    }
}
