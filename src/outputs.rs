use crate::rules::Activations;

/// Result of a Mamdani inference for one output variable.
#[derive(Clone, Debug)]
pub struct Outputs {
    crisp: f64,
    universe: Vec<f64>,
    aggregated: Vec<f64>,
    activations: Activations,
    fallback: bool,
}

impl Outputs {
    pub(crate) fn new(
        crisp: f64,
        universe: Vec<f64>,
        aggregated: Vec<f64>,
        activations: Activations,
        fallback: bool,
    ) -> Self {
        Self {
            crisp,
            universe,
            aggregated,
            activations,
            fallback,
        }
    }

    /// The defuzzificated output value.
    pub fn crisp(&self) -> f64 {
        self.crisp
    }

    /// Output domain samples the aggregate was built on.
    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    /// Aggregated (clipped, max-accumulated) membership, one degree per universe sample.
    pub fn aggregated(&self) -> &[f64] {
        &self.aggregated
    }

    /// Rule activations for every output, not just the one inferred.
    pub fn activations(&self) -> &Activations {
        &self.activations
    }

    /// Whether nothing fired for this output and the crisp value is the domain midpoint.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn into_parts(self) -> (f64, Vec<f64>, Vec<f64>) {
        (self.crisp, self.universe, self.aggregated)
    }
}
